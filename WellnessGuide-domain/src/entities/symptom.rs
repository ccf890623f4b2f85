use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Coarse triage label attached to a symptom description
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum UrgencyLevel {
    /// Needs immediate attention
    Critical,
    /// Should be seen by a professional soon
    Moderate,
    /// Self-care is usually enough
    Mild,
}

impl UrgencyLevel {
    /// Wire and storage form of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::Moderate => "moderate",
            UrgencyLevel::Mild => "mild",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(UrgencyLevel::Critical),
            "moderate" => Ok(UrgencyLevel::Moderate),
            "mild" => Ok(UrgencyLevel::Mild),
            other => Err(format!("Unknown urgency level: {}", other)),
        }
    }
}

/// Fixed-shape result of a symptom analysis.
///
/// Serializes to exactly `urgency_level`, `possible_causes`, `suggestions`
/// and `disclaimer`, whether it came from the model or from a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct SymptomAnalysis {
    /// Triage tier
    pub urgency_level: UrgencyLevel,

    /// Conditions that could explain the symptoms
    pub possible_causes: Vec<String>,

    /// Actionable next steps
    pub suggestions: Vec<String>,

    /// Standard medical disclaimer
    pub disclaimer: String,
}

/// The part of an analysis kept in the `ai_response` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub possible_causes: Vec<String>,
    pub suggestions: Vec<String>,
    pub disclaimer: String,
}

impl SymptomAnalysis {
    /// Split off the urgency tier for storage
    pub fn to_stored(&self) -> StoredAnalysis {
        StoredAnalysis {
            possible_causes: self.possible_causes.clone(),
            suggestions: self.suggestions.clone(),
            disclaimer: self.disclaimer.clone(),
        }
    }
}

/// A symptom check as recorded for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomCheck {
    pub id: String,
    pub symptoms: String,
    pub analysis: SymptomAnalysis,
    pub created_at: DateTime<Utc>,
}
