//! Completion relay
//!
//! Forwards user text to an OpenAI-compatible chat-completion API and
//! coerces the free-text reply into a fixed JSON contract. Every call is
//! independent: one prompt, one upstream request, no retries. Failures are
//! absorbed here and replaced with schema-valid fallbacks, so callers always
//! receive a well-formed value together with how it was produced.

use thiserror::Error;

pub mod chat;
pub mod client;
pub mod config;
pub mod extract;
pub mod fallback;
pub mod prompt;
pub mod symptom;

pub use chat::ChatRelay;
pub use client::{CompletionClient, CompletionMessage, CompletionRequest, GroqClient, MessageRole};
pub use config::RelayConfig;
pub use symptom::SymptomRelay;

/// Response header carrying the cause of a degraded relay response
pub const RELAY_ERROR_HEADER: &str = "x-relay-error";

/// Response header naming how a relay response was produced
pub const RELAY_SOURCE_HEADER: &str = "x-relay-source";

/// Relay errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// Required input text was missing or blank
    #[error("{0}")]
    MissingInput(&'static str),

    /// No API key was configured for the completion API
    #[error("Completion API key is not configured")]
    MissingApiKey,

    /// The request never produced a response
    #[error("Completion request failed: {0}")]
    Transport(String),

    /// The completion API answered with a non-success status
    #[error("Completion API error: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The completion API answered 2xx without a usable message
    #[error("Invalid response from completion API: {0}")]
    InvalidUpstreamResponse(String),

    /// The model's text did not hold the expected JSON object
    #[error("Malformed model reply: {0}")]
    MalformedReply(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}

/// How a relay result was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaySource {
    /// Parsed from the model's reply
    Model,
    /// The reply was unusable; built from keyword heuristics
    Heuristic,
    /// The upstream call failed; static or heuristic fallback
    Unavailable,
    /// Input was missing; nothing was sent upstream
    Rejected,
}

impl RelaySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelaySource::Model => "model",
            RelaySource::Heuristic => "heuristic",
            RelaySource::Unavailable => "unavailable",
            RelaySource::Rejected => "rejected",
        }
    }
}

/// A relay result that is always schema-valid
#[derive(Debug, Clone, PartialEq)]
pub struct RelayOutcome<T> {
    /// The payload to return to the caller
    pub value: T,
    /// How the payload was produced
    pub source: RelaySource,
    /// What went wrong, for degraded payloads
    pub error: Option<RelayError>,
}

impl<T> RelayOutcome<T> {
    pub fn model(value: T) -> Self {
        Self { value, source: RelaySource::Model, error: None }
    }

    pub fn degraded(value: T, source: RelaySource, error: RelayError) -> Self {
        Self { value, source, error: Some(error) }
    }

    /// True unless the payload came from the model
    pub fn is_degraded(&self) -> bool {
        self.source != RelaySource::Model
    }
}
