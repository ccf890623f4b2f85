use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};
use tracing::{info, instrument};
use wellness_guide_domain::auth::UserInfo;

use crate::api::AppState;
use crate::entities::common::{ErrorResponse, HistoryQueryParams};
use crate::entities::symptom_check::{
    convert_to_public_symptom_check, CreateSymptomCheckRequest, SymptomCheckResponse,
};

/// Analyze symptoms and record the result
#[utoipa::path(
    post,
    path = "/api/v1/symptom-checks",
    request_body = CreateSymptomCheckRequest,
    responses(
        (status = 201, description = "Symptom check recorded", body = SymptomCheckResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "symptom_checks"
)]
#[instrument(skip(state, user, request))]
pub async fn create_symptom_check(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateSymptomCheckRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let recorded = state
        .symptom_checks
        .check_symptoms(&user.user_id, &request.symptoms)
        .await?;

    info!("Created symptom check {} for user {}", recorded.record.id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(convert_to_public_symptom_check(recorded.record, Some(recorded.degraded))),
    ))
}

/// List the user's symptom checks, newest first
#[utoipa::path(
    get,
    path = "/api/v1/symptom-checks",
    params(HistoryQueryParams),
    responses(
        (status = 200, description = "Symptom check history", body = [SymptomCheckResponse]),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("jwt_auth" = [])
    ),
    tag = "symptom_checks"
)]
#[instrument(skip(state, user))]
pub async fn list_symptom_checks(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Query(params): Query<HistoryQueryParams>,
) -> Result<Json<Vec<SymptomCheckResponse>>, ErrorResponse> {
    let checks = state.symptom_checks.history(&user.user_id, params.limit).await?;

    Ok(Json(
        checks
            .into_iter()
            .map(|check| convert_to_public_symptom_check(check, None))
            .collect(),
    ))
}
