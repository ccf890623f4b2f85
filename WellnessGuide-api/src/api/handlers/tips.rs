use axum::{extract::State, Json};
use tracing::instrument;
use wellness_guide_domain::entities::DailyTip;

use crate::api::AppState;

/// One affirmation and one self-care tip for today
#[utoipa::path(
    get,
    path = "/api/v1/tips/daily",
    responses(
        (status = 200, description = "Today's tips", body = [DailyTip]),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "tips"
)]
#[instrument(skip(state))]
pub async fn daily_tips(State(state): State<AppState>) -> Json<Vec<DailyTip>> {
    Json(state.tips.daily_tips().await)
}
