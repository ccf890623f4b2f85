//! Authentication module for WellnessGuide API
//!
//! Verifies HS256 bearer tokens on record endpoints. Tokens are issued by
//! the hosting identity service; this crate only checks them.

use std::env;
use std::time::Instant;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::auth::logging::{log_auth_event, AuthEvent, AuthEventType};
#[cfg(feature = "with-web")]
use crate::relay::{RELAY_ERROR_HEADER, RELAY_SOURCE_HEADER};

pub mod logging;
pub mod token;

pub use token::SecurityError;

/// User id attached to requests when the development bypass is on
pub const DEV_USER_ID: &str = "dev-user";

/// Allowed request headers for cross-origin callers
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// Authentication claims for JSON Web Tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued at (as timestamp)
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// User information extracted from authenticated requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct UserInfo {
    /// User ID every record is scoped to
    pub user_id: String,
    /// Authentication source ("jwt" or "bypass")
    pub auth_source: String,
}

fn bypass_enabled() -> bool {
    cfg!(debug_assertions)
        && env::var("BYPASS_AUTH")
            .map(|v| !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(false)
}

fn unauthorized() -> Response {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::WWW_AUTHENTICATE, "Bearer")
        .body(Body::empty())
        .unwrap_or_default()
}

/// Authentication middleware for protected routes
pub async fn auth_middleware(mut req: Request<Body>, next: Next) -> Response {
    let request_path = req.uri().path().to_string();
    let start_time = Instant::now();

    if bypass_enabled() {
        debug!("Auth bypass enabled in development mode");
        log_auth_event(
            AuthEvent::new(AuthEventType::DevelopmentBypass, Some(DEV_USER_ID), true)
                .with_resource(request_path),
        );
        req.extensions_mut().insert(UserInfo {
            user_id: DEV_USER_ID.to_string(),
            auth_source: "bypass".to_string(),
        });
        return next.run(req).await;
    }

    let failure = |details: String| {
        AuthEvent::new(AuthEventType::TokenValidation, None, false)
            .with_details(details)
            .with_resource(request_path.clone())
            .with_duration(start_time.elapsed().as_millis() as u64)
    };

    let token = match req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str())
    {
        Some(Ok(value)) => match value.strip_prefix("Bearer ") {
            Some(token) => token.trim().to_string(),
            None => {
                warn!("Authorization header does not contain Bearer token");
                log_auth_event(failure("Authorization header does not contain Bearer token".to_string()));
                return unauthorized();
            }
        },
        Some(Err(_)) => {
            warn!("Invalid Authorization header format");
            log_auth_event(failure("Invalid Authorization header format".to_string()));
            return unauthorized();
        }
        None => {
            debug!("Missing Authorization header");
            log_auth_event(failure("Missing Authorization header".to_string()));
            return unauthorized();
        }
    };

    match token::validate_token(&token) {
        Ok(claims) => {
            log_auth_event(
                AuthEvent::new(AuthEventType::TokenValidation, Some(&claims.sub), true)
                    .with_resource(request_path.clone())
                    .with_duration(start_time.elapsed().as_millis() as u64),
            );

            req.extensions_mut().insert(UserInfo {
                user_id: claims.sub.clone(),
                auth_source: "jwt".to_string(),
            });
            req.extensions_mut().insert(claims);

            next.run(req).await
        }
        Err(e) => {
            log_auth_event(failure(e.to_string()));
            unauthorized()
        }
    }
}

/// Add CORS and security headers to the application.
///
/// Preflight requests are answered by the CORS layer before any route runs.
#[cfg(feature = "with-web")]
pub fn configure_security(app: axum::Router) -> axum::Router {
    use axum::http::{HeaderName, HeaderValue, Method};
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::set_header::SetResponseHeaderLayer;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static))
        .expose_headers([
            HeaderName::from_static(RELAY_ERROR_HEADER),
            HeaderName::from_static(RELAY_SOURCE_HEADER),
        ])
        .max_age(std::time::Duration::from_secs(3600));

    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=(), interest-cohort=()"),
        ));

    app.layer(security_headers).layer(cors)
}

/// Auth info endpoint
#[cfg(feature = "with-api")]
#[utoipa::path(
    get,
    path = "/api/v1/auth/info",
    responses(
        (status = 200, description = "Authenticated user", body = UserInfo),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Authentication",
    security(
        ("jwt_auth" = [])
    )
)]
pub async fn auth_info(axum::Extension(user_info): axum::Extension<UserInfo>) -> axum::Json<UserInfo> {
    axum::Json(user_info)
}
