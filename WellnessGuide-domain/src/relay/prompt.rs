//! Static prompt templates

use super::client::CompletionRequest;

pub const SYMPTOM_SYSTEM_PROMPT: &str = r#"You are a medical AI assistant for symptom analysis. You MUST respond with ONLY a valid JSON object in this exact format:
{
  "urgency_level": "critical|moderate|mild",
  "possible_causes": ["cause1", "cause2", "cause3"],
  "suggestions": ["suggestion1", "suggestion2", "suggestion3"],
  "disclaimer": "This is not a medical diagnosis. Please consult with a healthcare professional for proper medical advice."
}

Guidelines for urgency levels:
- Critical: Chest pain, difficulty breathing, severe headache, signs of stroke, severe bleeding, high fever with confusion, severe allergic reactions
- Moderate: Persistent fever, severe pain, persistent cough, unusual fatigue, concerning changes, moderate injuries
- Mild: Minor aches, slight fever, common cold symptoms, minor cuts, mild headaches

Be specific and relevant to the symptoms provided. Provide actionable suggestions.
IMPORTANT: Respond with ONLY the JSON object, no additional text or explanations."#;

pub const CHAT_SYSTEM_PROMPT: &str = r#"You are a warm, supportive wellness companion. Listen with empathy, validate the user's feelings and gently invite them to share more. Do not diagnose, prescribe or give clinical advice; if the user mentions self-harm or an emergency, encourage them to contact local emergency services or a crisis line. Keep replies under 120 words.
You MUST respond with ONLY a valid JSON object in this exact format:
{"response": "your reply"}"#;

/// Prompt for a symptom analysis
pub fn symptom_request(symptoms: &str) -> CompletionRequest {
    CompletionRequest::new(
        SYMPTOM_SYSTEM_PROMPT,
        format!("Analyze these symptoms and respond with only the JSON object: {}", symptoms),
    )
}

/// Prompt for a chat reply; the message is sent verbatim
pub fn chat_request(message: &str) -> CompletionRequest {
    CompletionRequest::new(CHAT_SYSTEM_PROMPT, message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::client::MessageRole;

    #[test]
    fn test_symptom_prompt_embeds_text() {
        let request = symptom_request("sore throat");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(
            request.messages[1].content,
            "Analyze these symptoms and respond with only the JSON object: sore throat"
        );
    }

    #[test]
    fn test_chat_prompt_is_verbatim() {
        let request = chat_request("I feel low today");
        assert_eq!(request.messages[1].content, "I feel low today");
        assert!(request.messages[0].content.contains("\"response\""));
    }
}
