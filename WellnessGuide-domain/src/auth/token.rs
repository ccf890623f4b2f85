use std::env;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::auth::Claims;

const DEFAULT_ISSUER: &str = "wellness-guide-api";
const DEFAULT_EXPIRATION_MINUTES: i64 = 60;

/// Security errors for authentication and token operations
#[derive(Debug, Error)]
pub enum SecurityError {
    /// JWT validation error
    #[error("Token validation error: {0}")]
    TokenValidation(String),

    /// Expired token
    #[error("Token has expired")]
    TokenExpired,

    /// Invalid token structure
    #[error("Invalid token format")]
    InvalidToken,

    /// Invalid issuer
    #[error("Invalid token issuer")]
    InvalidIssuer,

    /// Configuration error
    #[error("Security configuration error: {0}")]
    ConfigError(String),
}

/// Signing settings for bearer tokens
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub issuer: String,
    pub expiration: Duration,
}

impl TokenConfig {
    /// Load token settings from `JWT_SECRET`, `JWT_ISSUER` and `JWT_EXPIRATION_MINUTES`
    pub fn from_env() -> Result<Self, SecurityError> {
        let secret = env::var("JWT_SECRET").map_err(|e| {
            error!("JWT_SECRET environment variable not found: {}", e);
            SecurityError::ConfigError("JWT_SECRET environment variable not found".to_string())
        })?;

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());
        let minutes = env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|m| m.parse::<i64>().ok())
            .unwrap_or(DEFAULT_EXPIRATION_MINUTES);

        Ok(Self {
            secret,
            issuer,
            expiration: Duration::minutes(minutes),
        })
    }
}

/// Generate a token for a user with explicit settings
pub fn generate_token_with(config: &TokenConfig, user_id: &str) -> Result<String, SecurityError> {
    let now = Utc::now();
    let expiration = now + config.expiration;

    let claims = Claims {
        sub: user_id.to_string(),
        iss: config.issuer.clone(),
        iat: now.timestamp(),
        exp: expiration.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| {
        error!("Failed to encode JWT token: {}", e);
        SecurityError::TokenValidation(e.to_string())
    })?;

    info!("Generated token for user {}", user_id);
    debug!("Token expiration: {}", expiration);

    Ok(token)
}

/// Generate a token using settings from the environment
pub fn generate_token(user_id: &str) -> Result<String, SecurityError> {
    generate_token_with(&TokenConfig::from_env()?, user_id)
}

/// Validate an HS256 token with explicit settings and return its claims
pub fn validate_token_with(config: &TokenConfig, token: &str) -> Result<Claims, SecurityError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_issuer(&[config.issuer.as_str()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SecurityError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidToken => SecurityError::InvalidToken,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => SecurityError::InvalidIssuer,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            SecurityError::TokenValidation("Invalid signature".to_string())
        }
        _ => SecurityError::TokenValidation(e.to_string()),
    })?;

    Ok(token_data.claims)
}

/// Validate a token using settings from the environment
pub fn validate_token(token: &str) -> Result<Claims, SecurityError> {
    validate_token_with(&TokenConfig::from_env()?, token)
}
