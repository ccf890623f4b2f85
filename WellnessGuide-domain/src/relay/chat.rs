use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::client::CompletionClient;
use super::extract::parse_chat_reply;
use super::fallback::scripted_chat_reply;
use super::prompt::chat_request;
use super::{RelayError, RelayOutcome, RelaySource};
use crate::entities::ChatReply;

/// Relay for the supportive chat companion
#[derive(Clone)]
pub struct ChatRelay {
    client: Arc<dyn CompletionClient>,
}

impl ChatRelay {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Reply to a message, falling back to a scripted empathic reply
    #[instrument(skip(self, message))]
    pub async fn respond(&self, message: &str) -> RelayOutcome<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            warn!("Rejecting chat request without a message");
            return RelayOutcome::degraded(
                scripted_chat_reply(message),
                RelaySource::Rejected,
                RelayError::MissingInput("Message is required"),
            );
        }

        debug!("Chat message: {}", message);

        let reply = match self.client.complete(chat_request(message)).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat upstream call failed: {}", e);
                return RelayOutcome::degraded(scripted_chat_reply(message), RelaySource::Unavailable, e);
            }
        };

        match parse_chat_reply(&reply) {
            Ok(parsed) => RelayOutcome::model(parsed),
            Err(e) => {
                warn!("Failed to parse chat reply, using scripted response: {}", e);
                RelayOutcome::degraded(scripted_chat_reply(message), RelaySource::Heuristic, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::client::MockCompletionClient;

    #[tokio::test]
    async fn test_model_reply_is_used() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|request| request.messages[1].content == "I feel lonely")
            .returning(|_| Ok("{\"response\": \"I'm glad you reached out.\"}".to_string()));
        let relay = ChatRelay::new(Arc::new(client));

        let outcome = relay.respond(" I feel lonely ").await;
        assert_eq!(outcome.source, RelaySource::Model);
        assert_eq!(outcome.value.response, "I'm glad you reached out.");
    }

    #[tokio::test]
    async fn test_failures_fall_back_to_script() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Err(RelayError::MissingApiKey));
        let relay = ChatRelay::new(Arc::new(client));

        let outcome = relay.respond("I feel lonely").await;
        assert_eq!(outcome.source, RelaySource::Unavailable);
        assert!(outcome.value.response.starts_with("Feeling lonely"));
        assert!(outcome.is_degraded());
    }

    #[tokio::test]
    async fn test_plain_text_reply_uses_script() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Ok("That sounds hard.".to_string()));
        let relay = ChatRelay::new(Arc::new(client));

        let outcome = relay.respond("work is stressful").await;
        assert_eq!(outcome.source, RelaySource::Heuristic);
        assert!(outcome.value.response.starts_with("Anxiety"));
    }
}
