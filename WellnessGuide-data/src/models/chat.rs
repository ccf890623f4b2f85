use serde::{Deserialize, Serialize};

/// Storage model for one exchange with the chat companion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Unique identifier for the turn
    pub id: String,

    /// Owner of the record
    pub user_id: String,

    /// What the user wrote
    pub user_message: String,

    /// What the companion answered, if anything was recorded
    pub ai_response: Option<String>,

    /// When the turn was recorded
    pub created_at: String,
}

/// Input data for appending a chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatTurn {
    pub user_id: String,
    pub user_message: String,
    pub ai_response: Option<String>,
}
