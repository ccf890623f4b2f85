use async_trait::async_trait;
use tracing::{info, instrument};
use wellness_guide_data::repository::{SymptomCheckRepository, SymptomCheckRepositoryTrait};

use super::{Recorded, ServiceError};
use crate::entities::conversions;
use crate::entities::SymptomCheck;
use crate::relay::{RelayError, RelaySource, SymptomRelay};

/// Trait for symptom check operations
#[async_trait]
pub trait SymptomCheckServiceTrait: Send + Sync {
    /// Analyze symptoms and append the result to the user's history
    async fn check_symptoms(&self, user_id: &str, symptoms: &str) -> Result<Recorded<SymptomCheck>, ServiceError>;

    /// The user's symptom checks, newest first
    async fn history(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<SymptomCheck>, ServiceError>;
}

/// Symptom check service
pub struct SymptomCheckService<R: SymptomCheckRepositoryTrait> {
    repository: R,
    relay: SymptomRelay,
}

impl<R: SymptomCheckRepositoryTrait> SymptomCheckService<R> {
    pub fn new(repository: R, relay: SymptomRelay) -> Self {
        Self { repository, relay }
    }
}

#[async_trait]
impl<R: SymptomCheckRepositoryTrait> SymptomCheckServiceTrait for SymptomCheckService<R> {
    #[instrument(skip(self, symptoms))]
    async fn check_symptoms(&self, user_id: &str, symptoms: &str) -> Result<Recorded<SymptomCheck>, ServiceError> {
        let outcome = self.relay.analyze(symptoms).await;

        if outcome.source == RelaySource::Rejected {
            let message = outcome
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| RelayError::MissingInput("Symptoms are required").to_string());
            return Err(ServiceError::ValidationError(message));
        }

        let degraded = outcome.is_degraded();
        let new_check = conversions::convert_to_data_symptom_check(user_id, symptoms.trim(), &outcome.value)?;
        let stored = self.repository.create(new_check).await?;

        info!("Recorded symptom check {} (degraded: {})", stored.id, degraded);

        Ok(Recorded {
            record: conversions::convert_to_domain_symptom_check(stored),
            degraded,
        })
    }

    #[instrument(skip(self))]
    async fn history(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<SymptomCheck>, ServiceError> {
        let checks = self.repository.list_for_user(user_id, limit).await?;
        Ok(checks
            .into_iter()
            .map(conversions::convert_to_domain_symptom_check)
            .collect())
    }
}

/// Create a symptom check service backed by the default repository
pub fn create_default_symptom_check_service(relay: SymptomRelay) -> impl SymptomCheckServiceTrait {
    SymptomCheckService::new(SymptomCheckRepository::new(), relay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::entities::UrgencyLevel;
    use crate::relay::client::MockCompletionClient;
    use wellness_guide_data::database::create_in_memory_pool;

    fn service_replying(reply: Result<String, RelayError>) -> impl SymptomCheckServiceTrait {
        let mut client = MockCompletionClient::new();
        client.expect_complete().returning(move |_| reply.clone());
        let pool = create_in_memory_pool().unwrap();
        SymptomCheckService::new(
            SymptomCheckRepository::with_pool(pool),
            SymptomRelay::new(Arc::new(client)),
        )
    }

    #[tokio::test]
    async fn test_check_is_recorded_and_listed() {
        let service = service_replying(Ok(
            r#"{"urgency_level": "mild", "possible_causes": ["Allergy"], "suggestions": ["Antihistamine"]}"#.to_string(),
        ));

        let recorded = service.check_symptoms("alice", "sneezing").await.unwrap();
        assert!(!recorded.degraded);
        assert_eq!(recorded.record.analysis.urgency_level, UrgencyLevel::Mild);

        let history = service.history("alice", None).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].analysis.possible_causes, vec!["Allergy"]);
        assert!(service.history("bob", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_degraded_check_is_flagged() {
        let service = service_replying(Err(RelayError::Transport("timeout".to_string())));

        let recorded = service.check_symptoms("alice", "chest pain").await.unwrap();
        assert!(recorded.degraded);
        assert_eq!(recorded.record.analysis.urgency_level, UrgencyLevel::Critical);
    }

    #[tokio::test]
    async fn test_blank_symptoms_are_rejected() {
        let service = service_replying(Ok(String::new()));
        let result = service.check_symptoms("alice", "  ").await;
        assert!(matches!(result, Err(ServiceError::ValidationError(_))));
        assert!(service.history("alice", None).await.unwrap().is_empty());
    }
}
