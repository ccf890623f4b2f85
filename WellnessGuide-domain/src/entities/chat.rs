use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Opening line shown before any history
pub const CHAT_GREETING: &str = "Hello! I'm here to listen and support you. How are you feeling today?";

/// Shown for a recorded turn whose response was never stored
pub const MISSING_RESPONSE_PLACEHOLDER: &str = "I understand how you're feeling.";

/// Fixed-shape result of the chat relay: exactly one `response` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ChatReply {
    /// The companion's answer
    pub response: String,
}

/// One recorded exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: String,
    pub user_message: String,
    pub ai_response: String,
    pub created_at: DateTime<Utc>,
}

/// A single bubble in a conversation transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ChatMessage {
    /// `user-{turn id}`, `ai-{turn id}` or `greeting`
    pub id: String,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

/// Greeting followed by recent turns, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ChatHistory {
    pub messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// Flatten turns (oldest first) into a transcript that opens with the greeting
    pub fn from_turns(turns: &[ChatTurn], now: DateTime<Utc>) -> Self {
        let greeting = ChatMessage {
            id: "greeting".to_string(),
            text: CHAT_GREETING.to_string(),
            is_user: false,
            timestamp: turns.first().map(|t| t.created_at).unwrap_or(now),
        };

        let messages = std::iter::once(greeting)
            .chain(turns.iter().flat_map(|turn| {
                [
                    ChatMessage {
                        id: format!("user-{}", turn.id),
                        text: turn.user_message.clone(),
                        is_user: true,
                        timestamp: turn.created_at,
                    },
                    ChatMessage {
                        id: format!("ai-{}", turn.id),
                        text: turn.ai_response.clone(),
                        is_user: false,
                        timestamp: turn.created_at,
                    },
                ]
            }))
            .collect();

        Self { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_with_greeting_and_alternates() {
        let now = Utc::now();
        let turns = vec![ChatTurn {
            id: "t1".to_string(),
            user_message: "I feel tired".to_string(),
            ai_response: "That sounds hard.".to_string(),
            created_at: now,
        }];

        let history = ChatHistory::from_turns(&turns, now);
        assert_eq!(history.messages.len(), 3);
        assert_eq!(history.messages[0].text, CHAT_GREETING);
        assert_eq!(history.messages[1].id, "user-t1");
        assert!(history.messages[1].is_user);
        assert_eq!(history.messages[2].id, "ai-t1");
        assert!(!history.messages[2].is_user);
    }

    #[test]
    fn test_empty_history_is_just_the_greeting() {
        let history = ChatHistory::from_turns(&[], Utc::now());
        assert_eq!(history.messages.len(), 1);
    }
}
