use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wellness_guide_domain::entities::ChatTurn;

/// Request to send a message to the companion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub message: String,
}

/// A recorded exchange with the companion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatTurnResponse {
    pub id: String,
    pub user_message: String,
    pub ai_response: String,
    pub created_at: DateTime<Utc>,
    /// True when the reply is a scripted fallback
    pub degraded: bool,
}

/// Convert a domain chat turn into its public form
pub fn convert_to_public_chat_turn(turn: ChatTurn, degraded: bool) -> ChatTurnResponse {
    ChatTurnResponse {
        id: turn.id,
        user_message: turn.user_message,
        ai_response: turn.ai_response,
        created_at: turn.created_at,
        degraded,
    }
}
