use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Types of authentication events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthEventType {
    /// Bearer token checked on a protected route
    TokenValidation,
    /// Request let through by the development bypass
    DevelopmentBypass,
}

impl fmt::Display for AuthEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthEventType::TokenValidation => write!(f, "TOKEN_VALIDATION"),
            AuthEventType::DevelopmentBypass => write!(f, "DEVELOPMENT_BYPASS"),
        }
    }
}

/// Authentication event record
#[derive(Debug, Clone, Serialize)]
pub struct AuthEvent {
    pub event_type: AuthEventType,
    pub user_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub details: Option<String>,
    /// Path of the protected resource
    pub resource: Option<String>,
    pub duration_ms: Option<u64>,
}

impl AuthEvent {
    pub fn new(event_type: AuthEventType, user_id: Option<&str>, success: bool) -> Self {
        Self {
            event_type,
            user_id: user_id.map(String::from),
            timestamp: Utc::now(),
            success,
            details: None,
            resource: None,
            duration_ms: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Log an authentication event; failures are logged at warn level
pub fn log_auth_event(event: AuthEvent) {
    let user_id = event.user_id.as_deref().unwrap_or("anonymous");
    let resource = event.resource.as_deref().unwrap_or("-");
    let details = event.details.as_deref().unwrap_or("");
    let duration = event.duration_ms.unwrap_or(0);

    if event.success {
        info!(
            "AUTH-LOG [{}] [{}] [SUCCESS] [{}] {}ms {}",
            event.event_type, user_id, resource, duration, details
        );
    } else {
        warn!(
            "AUTH-LOG [{}] [{}] [FAILURE] [{}] {}ms {}",
            event.event_type, user_id, resource, duration, details
        );
    }
}
