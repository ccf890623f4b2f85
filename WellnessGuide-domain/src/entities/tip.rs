use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Kind of daily tip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum TipType {
    Affirmation,
    SelfCare,
}

impl TipType {
    /// Storage form
    pub fn as_str(&self) -> &'static str {
        match self {
            TipType::Affirmation => "affirmation",
            TipType::SelfCare => "self-care",
        }
    }
}

/// A tip shown on the tips panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DailyTip {
    pub id: String,
    pub tip_text: String,
    pub tip_type: TipType,
    pub created_at: DateTime<Utc>,
}
