use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wellness_guide_domain::entities::{SymptomCheck, UrgencyLevel};

/// Request to analyze and record symptoms
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSymptomCheckRequest {
    /// Free-form description of the symptoms
    pub symptoms: String,
}

/// A recorded symptom check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SymptomCheckResponse {
    pub id: String,
    pub symptoms: String,
    pub urgency_level: UrgencyLevel,
    pub possible_causes: Vec<String>,
    pub suggestions: Vec<String>,
    pub disclaimer: String,
    pub created_at: DateTime<Utc>,
    /// Present on creation; true when the analysis is a fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

/// Convert a domain symptom check into its public form
pub fn convert_to_public_symptom_check(check: SymptomCheck, degraded: Option<bool>) -> SymptomCheckResponse {
    SymptomCheckResponse {
        id: check.id,
        symptoms: check.symptoms,
        urgency_level: check.analysis.urgency_level,
        possible_causes: check.analysis.possible_causes,
        suggestions: check.analysis.suggestions,
        disclaimer: check.analysis.disclaimer,
        created_at: check.created_at,
        degraded,
    }
}
