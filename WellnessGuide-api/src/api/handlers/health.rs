use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use wellness_guide_domain::health::{ComponentStatus as DomainComponentStatus, SystemHealth, SystemStatus};

use crate::api::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Unix timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about the components the service depends on
    pub components: ComponentStatus,
    /// Deployment environment (APP_ENV)
    pub environment: String,
}

/// Status of individual system components
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Record storage
    pub database: ComponentHealthStatus,
    /// Upstream chat-completion API used by the relay functions
    pub completion_api: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Record the server start time for uptime reporting
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(unix_now());
    });
}

fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }
    .to_string()
}

fn component(health: &SystemHealth, name: &str) -> ComponentHealthStatus {
    match health.components.get(name) {
        Some(component) => ComponentHealthStatus {
            status: map_component_status(&component.status),
            message: component.details.clone(),
        },
        None => ComponentHealthStatus {
            status: "error".to_string(),
            message: Some(format!("{} was not checked", name)),
        },
    }
}

/// Build the public report and its status code.
///
/// A degraded service still answers every request, so it reports 200.
fn health_report(health: &SystemHealth, environment: String) -> (StatusCode, HealthResponse) {
    let now = unix_now();
    let (status_code, status) = match health.status {
        SystemStatus::Healthy => (StatusCode::OK, "ok"),
        SystemStatus::Degraded => (StatusCode::OK, "degraded"),
        SystemStatus::Unhealthy => (StatusCode::SERVICE_UNAVAILABLE, "error"),
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime: SERVER_START_TIME.get().map(|&start| now.saturating_sub(start)),
        components: ComponentStatus {
            database: component(health, "database"),
            completion_api: component(health, "completion_api"),
        },
        environment,
    };

    (status_code, response)
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy or degraded", body = HealthResponse),
        (status = 503, description = "API is not healthy", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    info!("Health check requested");

    let health = state.health.get_system_health().await;
    let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
    let (status, response) = health_report(&health, environment);

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wellness_guide_domain::health::HealthComponent;

    fn system_health(status: SystemStatus, database: DomainComponentStatus) -> SystemHealth {
        let mut components = HashMap::new();
        components.insert(
            "database".to_string(),
            HealthComponent {
                status: database,
                details: Some("in-memory storage".to_string()),
            },
        );
        components.insert(
            "completion_api".to_string(),
            HealthComponent {
                status: DomainComponentStatus::Healthy,
                details: None,
            },
        );
        SystemHealth { status, components }
    }

    #[test]
    fn test_degraded_reports_ok_status_code() {
        initialize_server_start_time();
        let health = system_health(SystemStatus::Degraded, DomainComponentStatus::Degraded);

        let (status, response) = health_report(&health, "test".to_string());
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.status, "degraded");
        assert_eq!(response.components.database.status, "degraded");
        assert_eq!(response.components.database.message.as_deref(), Some("in-memory storage"));
        assert_eq!(response.components.completion_api.status, "ok");
        assert!(response.uptime.is_some());
        assert_eq!(response.environment, "test");
    }

    #[test]
    fn test_unhealthy_reports_service_unavailable() {
        let health = system_health(SystemStatus::Unhealthy, DomainComponentStatus::Unhealthy);

        let (status, response) = health_report(&health, "test".to_string());
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.status, "error");
    }

    #[test]
    fn test_missing_component_is_reported_as_error() {
        let health = SystemHealth {
            status: SystemStatus::Healthy,
            components: HashMap::new(),
        };

        let (_, response) = health_report(&health, "test".to_string());
        assert_eq!(response.components.completion_api.status, "error");
    }
}
