use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{RelayConfig, RelayError};

/// Chat roles understood by the completion API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// One prompt message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: MessageRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }
}

/// A single chat-completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<CompletionMessage>,
}

impl CompletionRequest {
    /// System instructions followed by the user's text
    pub fn new(system: &str, user: String) -> Self {
        Self {
            messages: vec![CompletionMessage::system(system), CompletionMessage::user(user)],
        }
    }
}

/// Source of model completions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the request and return the assistant message content
    async fn complete(&self, request: CompletionRequest) -> Result<String, RelayError>;

    /// Whether the client can make calls at all
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionsBody<'a> {
    model: &'a str,
    messages: &'a [CompletionMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Completion client for Groq and other OpenAI-compatible APIs
pub struct GroqClient {
    config: RelayConfig,
    client: Client,
}

impl GroqClient {
    /// Create a new client; the timeout applies only when configured
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, RelayError> {
        let api_key = self.config.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;

        let body = ChatCompletionsBody {
            model: &self.config.model,
            messages: &request.messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!("Completion API response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Completion API error response: {}", error_text);
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let raw = response.text().await?;
        let parsed: ChatCompletionsResponse = serde_json::from_str(&raw)
            .map_err(|e| RelayError::InvalidUpstreamResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                error!("Invalid response structure from completion API: {}", raw);
                RelayError::InvalidUpstreamResponse("no message in first choice".to_string())
            })
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
