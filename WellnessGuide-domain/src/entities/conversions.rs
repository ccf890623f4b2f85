//! Conversion functions between domain entities and data models.
//! They follow the pattern convert_to_[target_layer]_[model_name].

use chrono::{DateTime, Utc};
use tracing::warn;
use wellness_guide_data::models as data;

use crate::entities::chat::{ChatReply, ChatTurn, MISSING_RESPONSE_PLACEHOLDER};
use crate::entities::mood::{CreateMoodRequest, MoodEntry};
use crate::entities::symptom::{StoredAnalysis, SymptomAnalysis, SymptomCheck, UrgencyLevel};
use crate::entities::tip::{DailyTip, TipType};
use crate::relay::fallback::DISCLAIMER;

/// Parse a stored RFC 3339 timestamp, falling back to the current time
pub fn parse_timestamp(value: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            warn!("Invalid stored timestamp {:?}: {}", value, e);
            Utc::now()
        }
    }
}

/// Convert a domain analysis into a data model for storage
pub fn convert_to_data_symptom_check(
    user_id: &str,
    symptoms: &str,
    analysis: &SymptomAnalysis,
) -> Result<data::NewSymptomCheck, serde_json::Error> {
    Ok(data::NewSymptomCheck {
        user_id: user_id.to_string(),
        symptoms: symptoms.to_string(),
        urgency_level: analysis.urgency_level.to_string(),
        ai_response: serde_json::to_string(&analysis.to_stored())?,
    })
}

/// Convert a stored symptom check into a domain entity.
///
/// Rows written by older clients may carry an unknown tier or an
/// unparseable analysis; those read back as moderate with empty lists.
pub fn convert_to_domain_symptom_check(check: data::SymptomCheck) -> SymptomCheck {
    let urgency_level = check.urgency_level.parse::<UrgencyLevel>().unwrap_or_else(|e| {
        warn!("Symptom check {} has {}", check.id, e);
        UrgencyLevel::Moderate
    });

    let stored = serde_json::from_str::<StoredAnalysis>(&check.ai_response).unwrap_or_else(|e| {
        warn!("Symptom check {} has an unreadable analysis: {}", check.id, e);
        StoredAnalysis {
            possible_causes: Vec::new(),
            suggestions: Vec::new(),
            disclaimer: DISCLAIMER.to_string(),
        }
    });

    SymptomCheck {
        id: check.id,
        symptoms: check.symptoms,
        analysis: SymptomAnalysis {
            urgency_level,
            possible_causes: stored.possible_causes,
            suggestions: stored.suggestions,
            disclaimer: stored.disclaimer,
        },
        created_at: parse_timestamp(&check.created_at),
    }
}

/// Convert an exchange into a data model for storage
pub fn convert_to_data_chat_turn(user_id: &str, message: &str, reply: &ChatReply) -> data::NewChatTurn {
    data::NewChatTurn {
        user_id: user_id.to_string(),
        user_message: message.to_string(),
        ai_response: Some(reply.response.clone()),
    }
}

/// Convert a stored chat turn into a domain entity
pub fn convert_to_domain_chat_turn(turn: data::ChatTurn) -> ChatTurn {
    let ai_response = turn
        .ai_response
        .filter(|response| !response.trim().is_empty())
        .unwrap_or_else(|| MISSING_RESPONSE_PLACEHOLDER.to_string());

    ChatTurn {
        id: turn.id,
        user_message: turn.user_message,
        ai_response,
        created_at: parse_timestamp(&turn.created_at),
    }
}

/// Convert a mood request into a data model for storage
pub fn convert_to_data_mood_entry(user_id: &str, request: CreateMoodRequest) -> data::NewMoodEntry {
    data::NewMoodEntry {
        user_id: user_id.to_string(),
        mood: request.mood.to_string(),
        notes: request.notes.filter(|notes| !notes.trim().is_empty()),
    }
}

/// Convert a stored mood entry into a domain entity
pub fn convert_to_domain_mood_entry(entry: data::MoodEntry) -> MoodEntry {
    MoodEntry {
        mood: entry.mood.parse().ok(),
        created_at: parse_timestamp(&entry.created_at),
        id: entry.id,
        notes: entry.notes,
    }
}

/// Convert a recorded tip into a domain entity
pub fn convert_to_domain_tip(tip: data::DailyTip) -> DailyTip {
    let tip_type = if tip.tip_type == TipType::SelfCare.as_str() {
        TipType::SelfCare
    } else {
        TipType::Affirmation
    };

    DailyTip {
        id: tip.id,
        tip_text: tip.tip_text,
        tip_type,
        created_at: parse_timestamp(&tip.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_check_round_trip_through_storage_form() {
        let analysis = SymptomAnalysis {
            urgency_level: UrgencyLevel::Critical,
            possible_causes: vec!["Cardiac event".to_string()],
            suggestions: vec!["Call emergency services".to_string()],
            disclaimer: DISCLAIMER.to_string(),
        };

        let new_check = convert_to_data_symptom_check("alice", "chest pain", &analysis).unwrap();
        assert_eq!(new_check.urgency_level, "critical");
        assert!(!new_check.ai_response.contains("urgency_level"));

        let stored = data::SymptomCheck {
            id: "c1".to_string(),
            user_id: new_check.user_id,
            symptoms: new_check.symptoms,
            urgency_level: new_check.urgency_level,
            ai_response: new_check.ai_response,
            created_at: "2024-05-01T08:30:00.000000Z".to_string(),
        };

        let check = convert_to_domain_symptom_check(stored);
        assert_eq!(check.analysis, analysis);
        assert_eq!(check.symptoms, "chest pain");
    }

    #[test]
    fn test_unreadable_stored_analysis_degrades() {
        let stored = data::SymptomCheck {
            id: "c1".to_string(),
            user_id: "alice".to_string(),
            symptoms: "tired".to_string(),
            urgency_level: "urgent".to_string(),
            ai_response: "not json".to_string(),
            created_at: "2024-05-01T08:30:00.000000Z".to_string(),
        };

        let check = convert_to_domain_symptom_check(stored);
        assert_eq!(check.analysis.urgency_level, UrgencyLevel::Moderate);
        assert!(check.analysis.possible_causes.is_empty());
        assert_eq!(check.analysis.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_blank_chat_response_uses_placeholder() {
        let turn = convert_to_domain_chat_turn(data::ChatTurn {
            id: "t1".to_string(),
            user_id: "alice".to_string(),
            user_message: "hi".to_string(),
            ai_response: Some("  ".to_string()),
            created_at: "2024-05-01T08:30:00.000000Z".to_string(),
        });
        assert_eq!(turn.ai_response, MISSING_RESPONSE_PLACEHOLDER);
    }

    #[test]
    fn test_blank_mood_notes_are_dropped() {
        let entry = convert_to_data_mood_entry(
            "alice",
            CreateMoodRequest {
                mood: crate::entities::Mood::Happy,
                notes: Some("   ".to_string()),
            },
        );
        assert_eq!(entry.mood, "happy");
        assert_eq!(entry.notes, None);
    }
}
