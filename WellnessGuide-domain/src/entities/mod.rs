// Domain entities and value objects
pub mod chat;
pub mod conversions;
pub mod mood;
pub mod symptom;
pub mod tip;

// Re-export common types for easier imports
pub use chat::{ChatHistory, ChatMessage, ChatReply, ChatTurn};
pub use mood::{CreateMoodRequest, Mood, MoodEntry, MoodSummary, MoodTrendPoint};
pub use symptom::{SymptomAnalysis, SymptomCheck, UrgencyLevel};
pub use tip::{DailyTip, TipType};
