use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};
use wellness_guide_data::repository::{ChatRepository, ChatRepositoryTrait};

use super::{Recorded, ServiceError};
use crate::entities::conversions;
use crate::entities::{ChatHistory, ChatTurn};
use crate::relay::{ChatRelay, RelaySource};

/// Number of turns shown when a conversation is reopened
pub const CHAT_HISTORY_LIMIT: usize = 10;

/// Trait for chat companion operations
#[async_trait]
pub trait ChatServiceTrait: Send + Sync {
    /// Reply to a message and append the exchange to the user's history
    async fn send_message(&self, user_id: &str, message: &str) -> Result<Recorded<ChatTurn>, ServiceError>;

    /// The most recent turns, oldest first
    async fn recent_turns(&self, user_id: &str) -> Result<Vec<ChatTurn>, ServiceError>;

    /// The greeting followed by the most recent turns
    async fn history(&self, user_id: &str) -> Result<ChatHistory, ServiceError> {
        let turns = self.recent_turns(user_id).await?;
        Ok(ChatHistory::from_turns(&turns, Utc::now()))
    }
}

/// Chat companion service
pub struct ChatService<R: ChatRepositoryTrait> {
    repository: R,
    relay: ChatRelay,
}

impl<R: ChatRepositoryTrait> ChatService<R> {
    pub fn new(repository: R, relay: ChatRelay) -> Self {
        Self { repository, relay }
    }
}

#[async_trait]
impl<R: ChatRepositoryTrait> ChatServiceTrait for ChatService<R> {
    #[instrument(skip(self, message))]
    async fn send_message(&self, user_id: &str, message: &str) -> Result<Recorded<ChatTurn>, ServiceError> {
        let outcome = self.relay.respond(message).await;

        if outcome.source == RelaySource::Rejected {
            return Err(ServiceError::ValidationError("Message is required".to_string()));
        }

        let degraded = outcome.is_degraded();
        let new_turn = conversions::convert_to_data_chat_turn(user_id, message.trim(), &outcome.value);
        let stored = self.repository.create(new_turn).await?;

        info!("Recorded chat turn {} (degraded: {})", stored.id, degraded);

        Ok(Recorded {
            record: conversions::convert_to_domain_chat_turn(stored),
            degraded,
        })
    }

    #[instrument(skip(self))]
    async fn recent_turns(&self, user_id: &str) -> Result<Vec<ChatTurn>, ServiceError> {
        let mut turns = self
            .repository
            .list_recent(user_id, Some(CHAT_HISTORY_LIMIT))
            .await?;
        turns.reverse();

        Ok(turns
            .into_iter()
            .map(conversions::convert_to_domain_chat_turn)
            .collect())
    }
}

/// Create a chat service backed by the default repository
pub fn create_default_chat_service(relay: ChatRelay) -> impl ChatServiceTrait {
    ChatService::new(ChatRepository::new(), relay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::entities::chat::CHAT_GREETING;
    use crate::relay::client::MockCompletionClient;
    use wellness_guide_data::database::create_in_memory_pool;

    fn echo_service() -> ChatService<ChatRepository> {
        let mut client = MockCompletionClient::new();
        client.expect_complete().returning(|request| {
            Ok(serde_json::json!({ "response": format!("echo: {}", request.messages[1].content) }).to_string())
        });
        ChatService::new(
            ChatRepository::with_pool(create_in_memory_pool().unwrap()),
            ChatRelay::new(Arc::new(client)),
        )
    }

    #[tokio::test]
    async fn test_send_message_records_turn() {
        let service = echo_service();

        let recorded = service.send_message("alice", "hello there").await.unwrap();
        assert!(!recorded.degraded);
        assert_eq!(recorded.record.user_message, "hello there");
        assert_eq!(recorded.record.ai_response, "echo: hello there");
    }

    #[tokio::test]
    async fn test_recent_turns_keep_last_ten_oldest_first() {
        let service = echo_service();
        for i in 0..12 {
            service.send_message("alice", &format!("message {}", i)).await.unwrap();
        }

        let turns = service.recent_turns("alice").await.unwrap();
        assert_eq!(turns.len(), CHAT_HISTORY_LIMIT);
        assert_eq!(turns.first().unwrap().user_message, "message 2");
        assert_eq!(turns.last().unwrap().user_message, "message 11");
    }

    #[tokio::test]
    async fn test_history_opens_with_greeting() {
        let service = echo_service();
        service.send_message("alice", "hi").await.unwrap();

        let history = service.history("alice").await.unwrap();
        assert_eq!(history.messages.len(), 3);
        assert_eq!(history.messages[0].text, CHAT_GREETING);
        assert!(history.messages[1].is_user);

        let empty = service.history("bob").await.unwrap();
        assert_eq!(empty.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let service = echo_service();
        let result = service.send_message("alice", "").await;
        assert!(matches!(result, Err(ServiceError::ValidationError(_))));
    }
}
