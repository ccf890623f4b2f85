use serde::{Deserialize, Serialize};

/// Storage model for a tip that was shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTip {
    pub id: String,
    pub tip_text: String,
    /// "affirmation" or "self-care"
    pub tip_type: String,
    pub created_at: String,
}

/// Input data for recording a tip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDailyTip {
    pub tip_text: String,
    pub tip_type: String,
}
