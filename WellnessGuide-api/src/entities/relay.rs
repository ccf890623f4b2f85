use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the symptom analysis function
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SymptomAnalysisRequest {
    /// Free-form description of the symptoms
    #[serde(default)]
    pub symptoms: Option<String>,
}

/// Body of the chat function
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ChatFunctionRequest {
    /// What the user wants to say
    #[serde(default)]
    pub message: Option<String>,
}
