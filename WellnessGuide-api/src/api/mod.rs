pub mod handlers;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use wellness_guide_domain::relay::{GroqClient, RelayConfig, RelayError};

pub use state::AppState;

/// Errors raised while assembling the application
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// The completion client could not be built
    #[error("Failed to create completion client: {0}")]
    CompletionClient(#[from] RelayError),
}

/// Create the application router from environment configuration
pub fn create_application() -> Result<Router, ApplicationError> {
    let client = GroqClient::new(RelayConfig::from_env())?;
    let state = AppState::new(Arc::new(client));
    Ok(routes::create_app(state))
}
