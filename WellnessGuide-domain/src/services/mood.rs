use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};
use validator::Validate;
use wellness_guide_data::repository::{MoodRepository, MoodRepositoryTrait};

use super::ServiceError;
use crate::entities::conversions;
use crate::entities::{CreateMoodRequest, MoodEntry, MoodSummary, MoodTrendPoint};

/// Number of entries plotted on the trend chart
pub const MOOD_TREND_LIMIT: usize = 30;

/// Trait for mood tracking operations
#[async_trait]
pub trait MoodServiceTrait: Send + Sync {
    /// Validate and append a mood entry
    async fn log_mood(&self, user_id: &str, request: CreateMoodRequest) -> Result<MoodEntry, ServiceError>;

    /// The most recent moods as chart points, oldest first
    async fn trend(&self, user_id: &str) -> Result<Vec<MoodTrendPoint>, ServiceError>;

    /// Average score and today's mood over the trend window
    async fn summary(&self, user_id: &str) -> Result<MoodSummary, ServiceError> {
        let points = self.trend(user_id).await?;
        Ok(MoodSummary::from_points(&points, Utc::now().date_naive()))
    }
}

/// Mood tracking service
pub struct MoodService<R: MoodRepositoryTrait> {
    repository: R,
}

impl<R: MoodRepositoryTrait> MoodService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MoodRepositoryTrait> MoodServiceTrait for MoodService<R> {
    #[instrument(skip(self, request))]
    async fn log_mood(&self, user_id: &str, request: CreateMoodRequest) -> Result<MoodEntry, ServiceError> {
        request.validate()?;

        let new_entry = conversions::convert_to_data_mood_entry(user_id, request);
        let stored = self.repository.create(new_entry).await?;
        info!("Logged mood {} for user {}", stored.mood, user_id);

        Ok(conversions::convert_to_domain_mood_entry(stored))
    }

    #[instrument(skip(self))]
    async fn trend(&self, user_id: &str) -> Result<Vec<MoodTrendPoint>, ServiceError> {
        let entries = self
            .repository
            .list_recent(user_id, Some(MOOD_TREND_LIMIT))
            .await?;

        Ok(entries
            .into_iter()
            .rev()
            .map(conversions::convert_to_domain_mood_entry)
            .map(|entry| MoodTrendPoint::from(&entry))
            .collect())
    }
}

/// Create a mood service backed by the default repository
pub fn create_default_mood_service() -> impl MoodServiceTrait {
    MoodService::new(MoodRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Mood;
    use wellness_guide_data::database::create_in_memory_pool;

    fn service() -> MoodService<MoodRepository> {
        MoodService::new(MoodRepository::with_pool(create_in_memory_pool().unwrap()))
    }

    fn request(mood: Mood) -> CreateMoodRequest {
        CreateMoodRequest { mood, notes: None }
    }

    #[tokio::test]
    async fn test_log_and_trend() {
        let service = service();
        service.log_mood("alice", request(Mood::Sad)).await.unwrap();
        service.log_mood("alice", request(Mood::VeryHappy)).await.unwrap();

        let trend = service.trend("alice").await.unwrap();
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].label, "Sad");
        assert_eq!(trend[1].score, 5);
    }

    #[tokio::test]
    async fn test_trend_is_capped() {
        let service = service();
        for _ in 0..(MOOD_TREND_LIMIT + 5) {
            service.log_mood("alice", request(Mood::Neutral)).await.unwrap();
        }
        assert_eq!(service.trend("alice").await.unwrap().len(), MOOD_TREND_LIMIT);
    }

    #[tokio::test]
    async fn test_summary() {
        let service = service();
        let empty = service.summary("alice").await.unwrap();
        assert_eq!(empty.average, 0.0);
        assert!(empty.today.is_none());

        service.log_mood("alice", request(Mood::Happy)).await.unwrap();
        service.log_mood("alice", request(Mood::Neutral)).await.unwrap();
        service.log_mood("alice", request(Mood::Neutral)).await.unwrap();

        let summary = service.summary("alice").await.unwrap();
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.average, 3.3);
        assert_eq!(summary.today.unwrap().label, "Neutral");
    }

    #[tokio::test]
    async fn test_long_notes_are_rejected() {
        let service = service();
        let result = service
            .log_mood(
                "alice",
                CreateMoodRequest {
                    mood: Mood::Happy,
                    notes: Some("x".repeat(1001)),
                },
            )
            .await;
        assert!(matches!(result, Err(ServiceError::ValidationError(_))));
    }
}
