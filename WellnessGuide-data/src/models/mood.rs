use serde::{Deserialize, Serialize};

/// Storage model for a mood log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// Owner of the record
    pub user_id: String,

    /// Mood value as stored (e.g. "very-happy")
    pub mood: String,

    /// Optional free-text notes
    pub notes: Option<String>,

    /// When the mood was logged
    pub created_at: String,
}

/// Input data for appending a mood entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMoodEntry {
    pub user_id: String,
    pub mood: String,
    pub notes: Option<String>,
}
