// Domain services
// This module contains business logic implementations.
pub mod chat;
pub mod errors;
pub mod mood;
pub mod symptom_check;
pub mod tips;

// Re-export service traits and factory functions
pub use chat::{create_default_chat_service, ChatService, ChatServiceTrait, CHAT_HISTORY_LIMIT};
pub use errors::ServiceError;
pub use mood::{create_default_mood_service, MoodService, MoodServiceTrait, MOOD_TREND_LIMIT};
pub use symptom_check::{create_default_symptom_check_service, SymptomCheckService, SymptomCheckServiceTrait};
pub use tips::{create_default_tip_service, TipService, TipServiceTrait};

/// A stored record plus whether its content came from a fallback
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded<T> {
    pub record: T,
    pub degraded: bool,
}
