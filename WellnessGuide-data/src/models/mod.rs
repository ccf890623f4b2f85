// Storage models, one per table
pub mod chat;
pub mod mood;
pub mod symptom_check;
pub mod tip;

pub use chat::{ChatTurn, NewChatTurn};
pub use mood::{MoodEntry, NewMoodEntry};
pub use symptom_check::{NewSymptomCheck, SymptomCheck};
pub use tip::{DailyTip, NewDailyTip};

/// Current time in the fixed-width RFC 3339 form used for `created_at`.
///
/// Microsecond precision with a `Z` suffix keeps lexical and
/// chronological order identical.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
