use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wellness_guide_domain::entities::{Mood, MoodEntry, MoodTrendPoint};

/// A logged mood
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoodEntryResponse {
    pub id: String,
    /// Missing when the stored value is no longer a known mood
    pub mood: Option<Mood>,
    pub score: u8,
    pub label: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Convert a domain mood entry into its public form
pub fn convert_to_public_mood_entry(entry: MoodEntry) -> MoodEntryResponse {
    let point = MoodTrendPoint::from(&entry);
    MoodEntryResponse {
        id: entry.id,
        mood: entry.mood,
        score: point.score,
        label: point.label,
        notes: entry.notes,
        created_at: entry.created_at,
    }
}
