use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use wellness_guide_domain::entities::{ChatReply, SymptomAnalysis};
use wellness_guide_domain::relay::{RelayOutcome, RelaySource, RELAY_ERROR_HEADER, RELAY_SOURCE_HEADER};

use crate::api::AppState;
use crate::entities::relay::{ChatFunctionRequest, SymptomAnalysisRequest};

const MAX_ERROR_HEADER_LEN: usize = 256;

/// Status code for a relay outcome
fn relay_status(source: RelaySource) -> StatusCode {
    match source {
        RelaySource::Model | RelaySource::Heuristic => StatusCode::OK,
        RelaySource::Rejected => StatusCode::BAD_REQUEST,
        RelaySource::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Header-safe rendering of an error message
fn header_text(message: &str) -> String {
    message
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { ' ' })
        .take(MAX_ERROR_HEADER_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Body holds exactly the contract keys; the cause travels in headers
fn relay_response<T: Serialize>(outcome: RelayOutcome<T>) -> Response {
    let mut response = (relay_status(outcome.source), Json(outcome.value)).into_response();
    let headers = response.headers_mut();

    headers.insert(
        HeaderName::from_static(RELAY_SOURCE_HEADER),
        HeaderValue::from_static(outcome.source.as_str()),
    );
    if let Some(error) = outcome.error {
        if let Ok(value) = HeaderValue::from_str(&header_text(&error.to_string())) {
            headers.insert(HeaderName::from_static(RELAY_ERROR_HEADER), value);
        }
    }

    response
}

/// Read a relay body leniently; an unreadable body counts as missing input
fn parse_body<T: serde::de::DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!("Unreadable relay request body: {}", e);
        T::default()
    })
}

/// Analyze free-form symptoms
#[utoipa::path(
    post,
    path = "/functions/v1/symptom-analysis",
    request_body = SymptomAnalysisRequest,
    responses(
        (status = 200, description = "Analysis from the model or the keyword heuristic", body = SymptomAnalysis),
        (status = 400, description = "Symptoms missing; fallback analysis", body = SymptomAnalysis),
        (status = 500, description = "Completion API unavailable; fallback analysis", body = SymptomAnalysis)
    ),
    tag = "relay"
)]
#[instrument(skip(state, body))]
pub async fn symptom_analysis(State(state): State<AppState>, body: Bytes) -> Response {
    let request: SymptomAnalysisRequest = parse_body(&body);
    let symptoms = request.symptoms.unwrap_or_default();

    let outcome = state.symptom_relay.analyze(&symptoms).await;
    info!("Symptom analysis answered from {}", outcome.source.as_str());

    relay_response(outcome)
}

/// Reply to a message from the wellness companion
#[utoipa::path(
    post,
    path = "/functions/v1/mental-health-chat",
    request_body = ChatFunctionRequest,
    responses(
        (status = 200, description = "Reply from the model or a scripted reply", body = ChatReply),
        (status = 400, description = "Message missing; scripted reply", body = ChatReply),
        (status = 500, description = "Completion API unavailable; scripted reply", body = ChatReply)
    ),
    tag = "relay"
)]
#[instrument(skip(state, body))]
pub async fn mental_health_chat(State(state): State<AppState>, body: Bytes) -> Response {
    let request: ChatFunctionRequest = parse_body(&body);
    let message = request.message.unwrap_or_default();

    let outcome = state.chat_relay.respond(&message).await;
    info!("Chat answered from {}", outcome.source.as_str());

    relay_response(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_guide_domain::relay::RelayError;

    #[test]
    fn test_status_per_source() {
        assert_eq!(relay_status(RelaySource::Model), StatusCode::OK);
        assert_eq!(relay_status(RelaySource::Heuristic), StatusCode::OK);
        assert_eq!(relay_status(RelaySource::Rejected), StatusCode::BAD_REQUEST);
        assert_eq!(relay_status(RelaySource::Unavailable), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_header_is_sanitized() {
        let outcome = RelayOutcome::degraded(
            ChatReply { response: "ok".to_string() },
            RelaySource::Unavailable,
            RelayError::UpstreamStatus {
                status: 502,
                body: "bad\ngateway\u{7f}".to_string() + &"x".repeat(1000),
            },
        );

        let response = relay_response(outcome);
        let header = response.headers()[RELAY_ERROR_HEADER].to_str().unwrap();
        assert!(header.starts_with("Completion API error: 502 - bad gateway"));
        assert!(header.len() <= MAX_ERROR_HEADER_LEN);
        assert_eq!(response.headers()[RELAY_SOURCE_HEADER], "unavailable");
    }

    #[test]
    fn test_unreadable_body_is_empty_request() {
        let request: SymptomAnalysisRequest = parse_body(&Bytes::from_static(b"not json"));
        assert!(request.symptoms.is_none());
    }
}
