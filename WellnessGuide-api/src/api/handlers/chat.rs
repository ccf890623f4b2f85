use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};
use tracing::{info, instrument};
use wellness_guide_domain::auth::UserInfo;
use wellness_guide_domain::entities::ChatHistory;

use crate::api::AppState;
use crate::entities::chat::{convert_to_public_chat_turn, ChatTurnResponse, SendMessageRequest};
use crate::entities::common::ErrorResponse;

/// Send a message to the companion and record the exchange
#[utoipa::path(
    post,
    path = "/api/v1/chat",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Exchange recorded", body = ChatTurnResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "chat"
)]
#[instrument(skip(state, user, request))]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let recorded = state.chat.send_message(&user.user_id, &request.message).await?;

    info!("Recorded chat turn {} for user {}", recorded.record.id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(convert_to_public_chat_turn(recorded.record, recorded.degraded)),
    ))
}

/// The greeting followed by the last ten exchanges, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/chat/history",
    responses(
        (status = 200, description = "Conversation transcript", body = ChatHistory),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "chat"
)]
#[instrument(skip(state, user))]
pub async fn chat_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ChatHistory>, ErrorResponse> {
    Ok(Json(state.chat.history(&user.user_id).await?))
}
