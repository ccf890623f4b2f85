use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use tracing::{instrument, warn};
use uuid::Uuid;
use wellness_guide_data::models::NewDailyTip;
use wellness_guide_data::repository::{TipRepository, TipRepositoryTrait};

use crate::entities::conversions;
use crate::entities::{DailyTip, TipType};

pub const AFFIRMATIONS: [&str; 10] = [
    "You are worthy of love and respect exactly as you are.",
    "Your feelings are valid and it's okay to experience them.",
    "You have overcome challenges before, and you can do it again.",
    "Progress, not perfection, is what matters.",
    "You are stronger than you think.",
    "It's okay to rest and take care of yourself.",
    "You deserve compassion, especially from yourself.",
    "Every small step forward is an achievement.",
    "You are not alone in your journey.",
    "Your mental health matters and you're worth the effort.",
];

pub const SELF_CARE_TIPS: [&str; 10] = [
    "Take 5 deep breaths and notice how your body feels.",
    "Step outside for a few minutes and feel the fresh air.",
    "Write down three things you're grateful for today.",
    "Listen to your favorite song and really focus on the melody.",
    "Drink a glass of water mindfully, noticing the taste and temperature.",
    "Do some gentle stretching or yoga poses.",
    "Call or text someone who makes you smile.",
    "Organize a small space in your home - it can help clear your mind.",
    "Take a warm shower or bath and enjoy the sensation.",
    "Practice saying 'no' to something that drains your energy.",
];

/// Trait for the daily tips panel
#[async_trait]
pub trait TipServiceTrait: Send + Sync {
    /// One affirmation and one self-care tip. Recording them is best-effort.
    async fn daily_tips(&self) -> Vec<DailyTip>;
}

/// Daily tips service
pub struct TipService<R: TipRepositoryTrait> {
    repository: R,
}

impl<R: TipRepositoryTrait> TipService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn pick() -> [(TipType, &'static str); 2] {
        let mut rng = rand::thread_rng();
        [
            (TipType::Affirmation, AFFIRMATIONS.choose(&mut rng).copied().unwrap_or(AFFIRMATIONS[0])),
            (TipType::SelfCare, SELF_CARE_TIPS.choose(&mut rng).copied().unwrap_or(SELF_CARE_TIPS[0])),
        ]
    }
}

#[async_trait]
impl<R: TipRepositoryTrait> TipServiceTrait for TipService<R> {
    #[instrument(skip(self))]
    async fn daily_tips(&self) -> Vec<DailyTip> {
        let picked = Self::pick();

        let new_tips = picked
            .iter()
            .map(|(tip_type, text)| NewDailyTip {
                tip_text: text.to_string(),
                tip_type: tip_type.as_str().to_string(),
            })
            .collect();

        match self.repository.record(new_tips).await {
            Ok(stored) => stored.into_iter().map(conversions::convert_to_domain_tip).collect(),
            Err(e) => {
                warn!("Failed to record daily tips, returning them unrecorded: {}", e);
                let now = Utc::now();
                picked
                    .iter()
                    .map(|(tip_type, text)| DailyTip {
                        id: Uuid::new_v4().to_string(),
                        tip_text: text.to_string(),
                        tip_type: *tip_type,
                        created_at: now,
                    })
                    .collect()
            }
        }
    }
}

/// Create a tip service backed by the default repository
pub fn create_default_tip_service() -> impl TipServiceTrait {
    TipService::new(TipRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_guide_data::database::create_in_memory_pool;
    use wellness_guide_data::models::DailyTip as StoredTip;
    use wellness_guide_data::repository::RepositoryError;

    struct FailingTipRepository;

    #[async_trait]
    impl TipRepositoryTrait for FailingTipRepository {
        async fn record(&self, _tips: Vec<NewDailyTip>) -> Result<Vec<StoredTip>, RepositoryError> {
            Err(RepositoryError::Lock("poisoned".to_string()))
        }
    }

    #[tokio::test]
    async fn test_one_tip_of_each_kind() {
        let service = TipService::new(TipRepository::with_pool(create_in_memory_pool().unwrap()));
        let tips = service.daily_tips().await;

        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].tip_type, TipType::Affirmation);
        assert!(AFFIRMATIONS.contains(&tips[0].tip_text.as_str()));
        assert_eq!(tips[1].tip_type, TipType::SelfCare);
        assert!(SELF_CARE_TIPS.contains(&tips[1].tip_text.as_str()));
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_surfaced() {
        let service = TipService::new(FailingTipRepository);
        let tips = service.daily_tips().await;
        assert_eq!(tips.len(), 2);
        assert_ne!(tips[0].id, tips[1].id);
    }
}
