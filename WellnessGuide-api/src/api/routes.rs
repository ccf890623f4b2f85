use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use wellness_guide_domain::auth::{auth_info, auth_middleware, configure_security};

use crate::api::handlers::{chat, health, moods, relay, symptom_checks, tips};
use crate::api::AppState;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    // Routes scoped to the authenticated user
    let api_routes = Router::new()
        .route(
            "/symptom-checks",
            get(symptom_checks::list_symptom_checks).post(symptom_checks::create_symptom_check),
        )
        .route("/chat", post(chat::send_message))
        .route("/chat/history", get(chat::chat_history))
        .route("/moods", get(moods::mood_trend).post(moods::log_mood))
        .route("/moods/summary", get(moods::mood_summary))
        .route("/tips/daily", get(tips::daily_tips))
        .route("/auth/info", get(auth_info))
        .layer(middleware::from_fn(auth_middleware));

    debug!("API routes configured");

    // Relay functions are callable without a token
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/functions/v1/symptom-analysis", post(relay::symptom_analysis))
        .route("/functions/v1/mental-health-chat", post(relay::mental_health_chat));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(state)
        .merge(configure_swagger_routes())
        .layer(TraceLayer::new_for_http());

    debug!("Swagger UI merged");

    let app = configure_security(app);
    debug!("Security configuration applied");

    health::initialize_server_start_time();

    app
}
