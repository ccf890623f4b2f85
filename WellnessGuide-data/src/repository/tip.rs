use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::database::DatabasePool;
use crate::models::{now_timestamp, DailyTip, NewDailyTip};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::resolve_pool;
use super::storage::DatabaseStorage;

/// Repository trait for shown tips
#[async_trait]
pub trait TipRepositoryTrait: Send + Sync {
    /// Record a batch of tips
    async fn record(&self, tips: Vec<NewDailyTip>) -> Result<Vec<DailyTip>, RepositoryError>;
}

/// Repository for shown tips
#[derive(Debug, Clone, Default)]
pub struct TipRepository {
    pool: Option<DatabasePool>,
    storage: InMemoryStorage<DailyTip>,
}

impl TipRepository {
    /// Create a repository backed by the global pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository backed by a specific pool
    pub fn with_pool(pool: DatabasePool) -> Self {
        Self {
            pool: Some(pool),
            storage: InMemoryStorage::new(),
        }
    }

    async fn store_in_memory(&self, tips: &[DailyTip]) -> Result<(), RepositoryError> {
        for tip in tips {
            self.storage.store(tip).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl TipRepositoryTrait for TipRepository {
    async fn record(&self, tips: Vec<NewDailyTip>) -> Result<Vec<DailyTip>, RepositoryError> {
        let created_at = now_timestamp();
        let tips: Vec<DailyTip> = tips
            .into_iter()
            .map(|tip| DailyTip {
                id: Uuid::new_v4().to_string(),
                tip_text: tip.tip_text,
                tip_type: tip.tip_type,
                created_at: created_at.clone(),
            })
            .collect();

        match resolve_pool(&self.pool) {
            Ok(pool) => {
                if let Err(e) = DatabaseStorage::store_tips(&pool, &tips) {
                    error!("Failed to store tips in database: {}", e);
                    self.store_in_memory(&tips).await?;
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.store_in_memory(&tips).await?;
            }
        }

        Ok(tips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_in_memory_pool;

    #[tokio::test]
    async fn test_record_writes_every_tip() {
        let pool = create_in_memory_pool().unwrap();
        let repo = TipRepository::with_pool(pool.clone());

        let recorded = repo
            .record(vec![
                NewDailyTip {
                    tip_text: "You are stronger than you think.".to_string(),
                    tip_type: "affirmation".to_string(),
                },
                NewDailyTip {
                    tip_text: "Do some gentle stretching or yoga poses.".to_string(),
                    tip_type: "self-care".to_string(),
                },
            ])
            .await
            .unwrap();

        assert_eq!(recorded.len(), 2);
        assert_eq!(DatabaseStorage::count_tips(&pool).unwrap(), 2);
    }
}
