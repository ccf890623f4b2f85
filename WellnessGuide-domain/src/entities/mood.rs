use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Five-point mood scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Mood {
    VerySad,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

impl Mood {
    /// All moods, lowest score first
    pub const ALL: [Mood; 5] = [Mood::VerySad, Mood::Sad, Mood::Neutral, Mood::Happy, Mood::VeryHappy];

    /// Storage form
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::VerySad => "very-sad",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::VeryHappy => "very-happy",
        }
    }

    /// Chart score from 1 to 5
    pub fn score(&self) -> u8 {
        match self {
            Mood::VerySad => 1,
            Mood::Sad => 2,
            Mood::Neutral => 3,
            Mood::Happy => 4,
            Mood::VeryHappy => 5,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::VerySad => "Very Sad",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Happy => "Happy",
            Mood::VeryHappy => "Very Happy",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| format!("Unknown mood: {}", s))
    }
}

/// Request payload for logging a mood
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CreateMoodRequest {
    /// How the user feels
    pub mood: Mood,

    /// Optional notes about the day
    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub notes: Option<String>,
}

/// A logged mood as read back from storage.
///
/// `mood` is `None` when the stored value is no longer a known mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub mood: Option<Mood>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One point of the mood trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MoodTrendPoint {
    /// Calendar day (UTC) the mood was logged
    pub date: NaiveDate,

    /// Score from 1 to 5, 3 for unknown moods
    pub score: u8,

    /// Label, "Unknown" for unknown moods
    pub label: String,

    /// Exact time the mood was logged
    pub recorded_at: DateTime<Utc>,
}

impl From<&MoodEntry> for MoodTrendPoint {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            date: entry.created_at.date_naive(),
            score: entry.mood.map(|m| m.score()).unwrap_or(3),
            label: entry.mood.map(|m| m.label()).unwrap_or("Unknown").to_string(),
            recorded_at: entry.created_at,
        }
    }
}

/// Aggregate view of a user's recent moods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MoodSummary {
    /// Mean score rounded to one decimal, 0 when there are no entries
    pub average: f64,

    /// Number of entries considered
    pub entry_count: usize,

    /// Latest mood logged today, if any
    pub today: Option<MoodTrendPoint>,
}

impl MoodSummary {
    /// Summarize trend points ordered oldest first
    pub fn from_points(points: &[MoodTrendPoint], today: NaiveDate) -> Self {
        let average = if points.is_empty() {
            0.0
        } else {
            let sum: u32 = points.iter().map(|p| p.score as u32).sum();
            let mean = sum as f64 / points.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        Self {
            average,
            entry_count: points.len(),
            today: points.iter().rev().find(|p| p.date == today).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn point(mood: Mood, at: DateTime<Utc>) -> MoodTrendPoint {
        MoodTrendPoint::from(&MoodEntry {
            id: "id".to_string(),
            mood: Some(mood),
            notes: None,
            created_at: at,
        })
    }

    #[test]
    fn test_mood_round_trips_through_storage_form() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>(), Ok(mood));
        }
        assert!("ecstatic".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_deserializes_from_kebab_case() {
        let request: CreateMoodRequest =
            serde_json::from_str(r#"{"mood": "very-happy", "notes": null}"#).unwrap();
        assert_eq!(request.mood, Mood::VeryHappy);
    }

    #[test]
    fn test_notes_length_is_validated() {
        let request = CreateMoodRequest {
            mood: Mood::Neutral,
            notes: Some("x".repeat(1001)),
        };
        assert!(request.validate().is_err());

        let request = CreateMoodRequest {
            mood: Mood::Neutral,
            notes: Some("fine".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_mood_maps_to_neutral_score() {
        let point = MoodTrendPoint::from(&MoodEntry {
            id: "id".to_string(),
            mood: None,
            notes: None,
            created_at: Utc::now(),
        });
        assert_eq!(point.score, 3);
        assert_eq!(point.label, "Unknown");
    }

    #[test]
    fn test_summary_average_and_today() {
        let today = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
        let points = vec![
            point(Mood::Sad, today - Duration::days(2)),
            point(Mood::Happy, today - Duration::days(1)),
            point(Mood::Neutral, today - Duration::hours(8)),
            point(Mood::VeryHappy, today),
        ];

        let summary = MoodSummary::from_points(&points, today.date_naive());
        // (2 + 4 + 3 + 5) / 4 = 3.5
        assert_eq!(summary.average, 3.5);
        assert_eq!(summary.entry_count, 4);
        assert_eq!(summary.today.unwrap().label, "Very Happy");
    }

    #[test]
    fn test_summary_rounds_to_one_decimal() {
        let now = Utc::now();
        let points = vec![
            point(Mood::VerySad, now),
            point(Mood::VerySad, now),
            point(Mood::Sad, now),
        ];
        // 4 / 3 = 1.333...
        let summary = MoodSummary::from_points(&points, now.date_naive());
        assert_eq!(summary.average, 1.3);
    }

    #[test]
    fn test_empty_summary() {
        let summary = MoodSummary::from_points(&[], Utc::now().date_naive());
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.entry_count, 0);
        assert!(summary.today.is_none());
    }
}
