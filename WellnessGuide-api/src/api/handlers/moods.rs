use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};
use tracing::{info, instrument};
use wellness_guide_domain::auth::UserInfo;
use wellness_guide_domain::entities::{CreateMoodRequest, MoodSummary, MoodTrendPoint};

use crate::api::AppState;
use crate::entities::common::ErrorResponse;
use crate::entities::mood::{convert_to_public_mood_entry, MoodEntryResponse};

/// Log how the user feels
#[utoipa::path(
    post,
    path = "/api/v1/moods",
    request_body = CreateMoodRequest,
    responses(
        (status = 201, description = "Mood logged", body = MoodEntryResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "moods"
)]
#[instrument(skip(state, user, request))]
pub async fn log_mood(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateMoodRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let entry = state.moods.log_mood(&user.user_id, request).await?;
    info!("Logged mood {} for user {}", entry.id, user.user_id);

    Ok((StatusCode::CREATED, Json(convert_to_public_mood_entry(entry))))
}

/// Up to the 30 most recent moods as chart points, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/moods",
    responses(
        (status = 200, description = "Mood trend", body = [MoodTrendPoint]),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "moods"
)]
#[instrument(skip(state, user))]
pub async fn mood_trend(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<Vec<MoodTrendPoint>>, ErrorResponse> {
    Ok(Json(state.moods.trend(&user.user_id).await?))
}

/// Average score and today's mood
#[utoipa::path(
    get,
    path = "/api/v1/moods/summary",
    responses(
        (status = 200, description = "Mood summary", body = MoodSummary),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "moods"
)]
#[instrument(skip(state, user))]
pub async fn mood_summary(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<MoodSummary>, ErrorResponse> {
    Ok(Json(state.moods.summary(&user.user_id).await?))
}
