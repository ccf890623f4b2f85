use serde::{Deserialize, Serialize};

/// Storage model for a symptom check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomCheck {
    /// Unique identifier for the check
    pub id: String,

    /// Owner of the record
    pub user_id: String,

    /// Free text the user submitted
    pub symptoms: String,

    /// Urgency tier as stored ("critical", "moderate" or "mild")
    pub urgency_level: String,

    /// Serialized analysis (causes, suggestions, disclaimer)
    pub ai_response: String,

    /// When the check was recorded
    pub created_at: String,
}

/// Input data for appending a symptom check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSymptomCheck {
    pub user_id: String,
    pub symptoms: String,
    pub urgency_level: String,
    pub ai_response: String,
}
