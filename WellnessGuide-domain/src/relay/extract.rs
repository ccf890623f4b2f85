//! JSON extraction from free-text model replies

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::fallback::DISCLAIMER;
use super::RelayError;
use crate::entities::{ChatReply, SymptomAnalysis, UrgencyLevel};

/// First `{` through last `}`, across newlines
static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid"));

/// Find the outermost JSON object candidate in a reply
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    urgency_level: String,
    possible_causes: Vec<String>,
    suggestions: Vec<String>,
    #[serde(default)]
    disclaimer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChatReply {
    response: String,
}

fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn decode<'de, T: Deserialize<'de>>(text: &'de str) -> Result<T, RelayError> {
    let candidate = extract_json_object(text)
        .ok_or_else(|| RelayError::MalformedReply("no JSON object in reply".to_string()))?;
    serde_json::from_str(candidate).map_err(|e| RelayError::MalformedReply(e.to_string()))
}

/// Parse a symptom analysis out of a model reply.
///
/// Urgency, causes and suggestions are required. A missing or blank
/// disclaimer is replaced with the standard one and extra keys are dropped.
pub fn parse_symptom_analysis(text: &str) -> Result<SymptomAnalysis, RelayError> {
    let raw: RawAnalysis = decode(text)?;

    let urgency_level = raw
        .urgency_level
        .parse::<UrgencyLevel>()
        .map_err(RelayError::MalformedReply)?;

    let disclaimer = raw
        .disclaimer
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DISCLAIMER.to_string());

    Ok(SymptomAnalysis {
        urgency_level,
        possible_causes: non_blank(raw.possible_causes),
        suggestions: non_blank(raw.suggestions),
        disclaimer,
    })
}

/// Parse a chat reply out of a model reply; the response must not be blank
pub fn parse_chat_reply(text: &str) -> Result<ChatReply, RelayError> {
    let raw: RawChatReply = decode(text)?;
    let response = raw.response.trim();
    if response.is_empty() {
        return Err(RelayError::MalformedReply("empty response".to_string()));
    }
    Ok(ChatReply { response: response.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_spans_first_to_last_brace() {
        let text = "Sure! Here it is:\n{\"a\": {\"b\": 1}}\nHope that helps.";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_parse_analysis_with_surrounding_prose() {
        let reply = r#"Here is the analysis:
{
  "urgency_level": "Moderate",
  "possible_causes": ["Viral infection", " "],
  "suggestions": ["Rest", "Hydrate"],
  "confidence": 0.7
}"#;
        let analysis = parse_symptom_analysis(reply).unwrap();
        assert_eq!(analysis.urgency_level, UrgencyLevel::Moderate);
        assert_eq!(analysis.possible_causes, vec!["Viral infection"]);
        assert_eq!(analysis.suggestions.len(), 2);
        assert_eq!(analysis.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_parse_analysis_rejects_missing_keys_and_bad_tier() {
        let missing = r#"{"urgency_level": "mild", "possible_causes": []}"#;
        assert!(matches!(parse_symptom_analysis(missing), Err(RelayError::MalformedReply(_))));

        let bad_tier = r#"{"urgency_level": "urgent", "possible_causes": [], "suggestions": []}"#;
        assert!(matches!(parse_symptom_analysis(bad_tier), Err(RelayError::MalformedReply(_))));

        let wrong_type = r#"{"urgency_level": "mild", "possible_causes": "cold", "suggestions": []}"#;
        assert!(parse_symptom_analysis(wrong_type).is_err());

        assert!(parse_symptom_analysis("I cannot help with that.").is_err());
    }

    #[test]
    fn test_parse_chat_reply() {
        let reply = parse_chat_reply("{\"response\": \" I'm here for you. \"}").unwrap();
        assert_eq!(reply.response, "I'm here for you.");

        assert!(parse_chat_reply("{\"response\": \"\"}").is_err());
        assert!(parse_chat_reply("{\"reply\": \"hi\"}").is_err());
        assert!(parse_chat_reply("just text").is_err());
    }
}
