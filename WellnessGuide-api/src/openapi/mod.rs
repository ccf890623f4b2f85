use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

/// Registers the bearer scheme referenced by the record endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Relay functions
        crate::api::handlers::relay::symptom_analysis,
        crate::api::handlers::relay::mental_health_chat,

        // Symptom checks
        crate::api::handlers::symptom_checks::create_symptom_check,
        crate::api::handlers::symptom_checks::list_symptom_checks,

        // Chat
        crate::api::handlers::chat::send_message,
        crate::api::handlers::chat::chat_history,

        // Moods
        crate::api::handlers::moods::log_mood,
        crate::api::handlers::moods::mood_trend,
        crate::api::handlers::moods::mood_summary,

        // Tips
        crate::api::handlers::tips::daily_tips,

        // Auth endpoints
        wellness_guide_domain::auth::auth_info
    ),
    components(
        schemas(
            // Relay
            crate::entities::relay::SymptomAnalysisRequest,
            crate::entities::relay::ChatFunctionRequest,
            wellness_guide_domain::entities::SymptomAnalysis,
            wellness_guide_domain::entities::UrgencyLevel,
            wellness_guide_domain::entities::ChatReply,

            // Records
            crate::entities::symptom_check::CreateSymptomCheckRequest,
            crate::entities::symptom_check::SymptomCheckResponse,
            crate::entities::chat::SendMessageRequest,
            crate::entities::chat::ChatTurnResponse,
            wellness_guide_domain::entities::ChatHistory,
            wellness_guide_domain::entities::ChatMessage,
            wellness_guide_domain::entities::Mood,
            wellness_guide_domain::entities::CreateMoodRequest,
            crate::entities::mood::MoodEntryResponse,
            wellness_guide_domain::entities::MoodTrendPoint,
            wellness_guide_domain::entities::MoodSummary,
            wellness_guide_domain::entities::DailyTip,
            wellness_guide_domain::entities::TipType,
            crate::entities::common::ErrorResponse,
            crate::entities::common::HistoryQueryParams,

            // Health
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,

            // Auth
            wellness_guide_domain::auth::UserInfo,
            wellness_guide_domain::auth::Claims
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "relay", description = "Symptom analysis and companion chat functions"),
        (name = "symptom_checks", description = "Recorded symptom checks"),
        (name = "chat", description = "Recorded companion conversations"),
        (name = "moods", description = "Mood journal"),
        (name = "tips", description = "Daily affirmations and self-care tips"),
        (name = "Authentication", description = "Authentication endpoints")
    ),
    info(
        title = "WellnessGuide API",
        version = "0.1.0",
        description = "Symptom triage, companion chat and mood tracking",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
