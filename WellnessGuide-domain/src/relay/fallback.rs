//! Schema-valid payloads used when the model cannot be relied on

use crate::entities::{ChatReply, SymptomAnalysis, UrgencyLevel};

pub const DISCLAIMER: &str =
    "This is not a medical diagnosis. Please consult with a healthcare professional for proper medical advice.";

const CRITICAL_KEYWORDS: [&str; 4] = ["chest pain", "difficulty breathing", "severe headache", "confusion"];
const MODERATE_KEYWORDS: [&str; 4] = ["fever", "persistent pain", "severe", "unusual"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Pick an urgency tier from keywords in the symptom text
pub fn heuristic_urgency(symptoms: &str) -> UrgencyLevel {
    let lower = symptoms.to_lowercase();
    if contains_any(&lower, &CRITICAL_KEYWORDS) {
        UrgencyLevel::Critical
    } else if contains_any(&lower, &MODERATE_KEYWORDS) {
        UrgencyLevel::Moderate
    } else {
        UrgencyLevel::Mild
    }
}

/// Keyword-driven analysis for replies that could not be parsed
pub fn heuristic_analysis(symptoms: &str) -> SymptomAnalysis {
    let urgency_level = heuristic_urgency(symptoms);
    let (causes, suggestions) = match urgency_level {
        UrgencyLevel::Critical => (
            strings(&["Potentially serious condition", "Requires immediate attention"]),
            strings(&[
                "Seek immediate medical attention",
                "Call emergency services if severe",
                "Do not delay treatment",
            ]),
        ),
        UrgencyLevel::Moderate => (
            strings(&["Possible infection or inflammation", "May require medical evaluation"]),
            strings(&[
                "Consult healthcare provider within 24-48 hours",
                "Monitor temperature and symptoms",
                "Seek care if worsening",
            ]),
        ),
        UrgencyLevel::Mild => (
            strings(&["Common condition", "Requires evaluation"]),
            strings(&[
                "Monitor symptoms",
                "Rest and hydration",
                "Consult healthcare provider if symptoms persist",
            ]),
        ),
    };

    SymptomAnalysis {
        urgency_level,
        possible_causes: causes,
        suggestions,
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// Analysis for calls that never got a reply.
///
/// Moderate by default; critical keywords still select the critical payload.
pub fn unavailable_analysis(symptoms: &str) -> SymptomAnalysis {
    if heuristic_urgency(symptoms) == UrgencyLevel::Critical {
        return heuristic_analysis(symptoms);
    }

    SymptomAnalysis {
        urgency_level: UrgencyLevel::Moderate,
        possible_causes: strings(&["Analysis temporarily unavailable", "Technical issue occurred"]),
        suggestions: strings(&[
            "Please try again in a moment",
            "Consult healthcare provider directly if urgent",
            "Contact medical professional for evaluation",
        ]),
        disclaimer: DISCLAIMER.to_string(),
    }
}

const SCRIPTED_REPLIES: [(&[&str], &str); 5] = [
    (
        &["sad", "down", "depressed"],
        "I hear that you're feeling sad right now. It's completely valid to feel this way, and I want you to know that these feelings are temporary. You're not alone in this. Would you like to talk about what's contributing to these feelings?",
    ),
    (
        &["anxious", "worried", "stress"],
        "Anxiety can feel overwhelming, but remember that you've gotten through difficult times before. Let's take a moment to breathe together. Can you tell me about what's causing you to feel anxious right now?",
    ),
    (
        &["angry", "frustrated", "mad"],
        "I can sense your frustration, and it's okay to feel angry sometimes. These emotions are telling you something important. What would help you feel more at peace right now?",
    ),
    (
        &["happy", "good", "great"],
        "I'm so glad to hear you're feeling positive! It's wonderful when we can appreciate these moments of happiness. What's contributing to your good mood today?",
    ),
    (
        &["lonely", "alone"],
        "Feeling lonely can be really difficult. Please remember that reaching out, like you're doing now, is a brave step. You matter, and your feelings are valid. Is there something specific that would help you feel more connected?",
    ),
];

const DEFAULT_REPLY: &str = "Thank you for sharing that with me. I can hear that this is important to you. Your feelings are valid, and I'm here to listen. Can you tell me more about how you're experiencing this?";

/// Empathic reply chosen by the first emotion keyword found anywhere in the message
pub fn scripted_chat_reply(message: &str) -> ChatReply {
    let lower = message.to_lowercase();

    let response = SCRIPTED_REPLIES
        .iter()
        .find(|(keywords, _)| contains_any(&lower, keywords))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY);

    ChatReply { response: response.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_tiers() {
        assert_eq!(heuristic_urgency("Sudden CHEST PAIN after running"), UrgencyLevel::Critical);
        assert_eq!(heuristic_urgency("some confusion and fever"), UrgencyLevel::Critical);
        assert_eq!(heuristic_urgency("low fever since Monday"), UrgencyLevel::Moderate);
        assert_eq!(heuristic_urgency("runny nose"), UrgencyLevel::Mild);
    }

    #[test]
    fn test_heuristic_payload_matches_tier() {
        let analysis = heuristic_analysis("difficulty breathing");
        assert_eq!(analysis.urgency_level, UrgencyLevel::Critical);
        assert_eq!(analysis.suggestions[0], "Seek immediate medical attention");
        assert_eq!(analysis.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_unavailable_defaults_to_moderate() {
        let analysis = unavailable_analysis("runny nose");
        assert_eq!(analysis.urgency_level, UrgencyLevel::Moderate);
        assert_eq!(analysis.possible_causes[0], "Analysis temporarily unavailable");
    }

    #[test]
    fn test_unavailable_keeps_critical() {
        let analysis = unavailable_analysis("I have chest pain");
        assert_eq!(analysis.urgency_level, UrgencyLevel::Critical);
    }

    #[test]
    fn test_scripted_reply_matches_keyword_fragments() {
        assert!(scripted_chat_reply("Work has been so stressful lately")
            .response
            .starts_with("Anxiety"));
        assert!(scripted_chat_reply("I'm so stressed").response.starts_with("Anxiety"));
        assert!(scripted_chat_reply("Feeling DOWN today").response.starts_with("I hear"));
        assert!(scripted_chat_reply("It makes me mad").response.starts_with("I can sense"));
        assert!(scripted_chat_reply("All alone tonight").response.starts_with("Feeling lonely"));
        assert_eq!(scripted_chat_reply("Just checking in").response, DEFAULT_REPLY);
        assert_eq!(scripted_chat_reply("").response, DEFAULT_REPLY);
    }

    #[test]
    fn test_scripted_reply_checks_sadness_first() {
        // Both "sad" and "stress" appear; sadness wins
        let reply = scripted_chat_reply("sad and stressed");
        assert!(reply.response.starts_with("I hear"));
    }
}
