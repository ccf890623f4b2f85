use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::client::CompletionClient;
use super::extract::parse_symptom_analysis;
use super::fallback::{heuristic_analysis, unavailable_analysis};
use super::prompt::symptom_request;
use super::{RelayError, RelayOutcome, RelaySource};
use crate::entities::SymptomAnalysis;

/// Relay that turns symptom text into a triage analysis
#[derive(Clone)]
pub struct SymptomRelay {
    client: Arc<dyn CompletionClient>,
}

impl SymptomRelay {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Analyze symptoms. Never fails; degraded outcomes carry the cause.
    #[instrument(skip(self, symptoms))]
    pub async fn analyze(&self, symptoms: &str) -> RelayOutcome<SymptomAnalysis> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            warn!("Rejecting symptom analysis without symptoms");
            return RelayOutcome::degraded(
                unavailable_analysis(symptoms),
                RelaySource::Rejected,
                RelayError::MissingInput("Symptoms are required"),
            );
        }

        debug!("Analyzing symptoms: {}", symptoms);

        let reply = match self.client.complete(symptom_request(symptoms)).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Symptom analysis upstream call failed: {}", e);
                return RelayOutcome::degraded(unavailable_analysis(symptoms), RelaySource::Unavailable, e);
            }
        };

        debug!("Raw analysis text: {}", reply);

        match parse_symptom_analysis(&reply) {
            Ok(analysis) => {
                info!("Symptom analysis completed with urgency {}", analysis.urgency_level);
                RelayOutcome::model(analysis)
            }
            Err(e) => {
                warn!("Failed to parse symptom analysis, using keyword heuristic: {}", e);
                RelayOutcome::degraded(heuristic_analysis(symptoms), RelaySource::Heuristic, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::UrgencyLevel;
    use crate::relay::client::MockCompletionClient;

    fn relay_replying(reply: Result<String, RelayError>) -> SymptomRelay {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(move |_| reply.clone());
        SymptomRelay::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_model_reply_is_used() {
        let relay = relay_replying(Ok(r#"{"urgency_level": "mild", "possible_causes": ["Common cold"], "suggestions": ["Rest"], "disclaimer": "See a doctor."}"#.to_string()));

        let outcome = relay.analyze("runny nose").await;
        assert_eq!(outcome.source, RelaySource::Model);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.value.urgency_level, UrgencyLevel::Mild);
        assert_eq!(outcome.value.disclaimer, "See a doctor.");
    }

    #[tokio::test]
    async fn test_unparseable_reply_uses_heuristic() {
        let relay = relay_replying(Ok("You should see a doctor soon.".to_string()));

        let outcome = relay.analyze("fever for three days").await;
        assert_eq!(outcome.source, RelaySource::Heuristic);
        assert_eq!(outcome.value.urgency_level, UrgencyLevel::Moderate);
        assert!(matches!(outcome.error, Some(RelayError::MalformedReply(_))));
    }

    #[tokio::test]
    async fn test_upstream_failure_with_chest_pain_is_critical() {
        let relay = relay_replying(Err(RelayError::UpstreamStatus {
            status: 503,
            body: "overloaded".to_string(),
        }));

        let outcome = relay.analyze("crushing chest pain").await;
        assert_eq!(outcome.source, RelaySource::Unavailable);
        assert_eq!(outcome.value.urgency_level, UrgencyLevel::Critical);
    }

    #[tokio::test]
    async fn test_upstream_failure_defaults_to_moderate() {
        let relay = relay_replying(Err(RelayError::Transport("connection refused".to_string())));

        let outcome = relay.analyze("itchy eyes").await;
        assert_eq!(outcome.value.urgency_level, UrgencyLevel::Moderate);
        assert_eq!(outcome.value.possible_causes[0], "Analysis temporarily unavailable");
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_upstream() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);
        let relay = SymptomRelay::new(Arc::new(client));

        let outcome = relay.analyze("   ").await;
        assert_eq!(outcome.source, RelaySource::Rejected);
        assert_eq!(outcome.error, Some(RelayError::MissingInput("Symptoms are required")));
    }
}
