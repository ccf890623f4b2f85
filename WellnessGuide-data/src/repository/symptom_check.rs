use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::database::DatabasePool;
use crate::models::{now_timestamp, NewSymptomCheck, SymptomCheck};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::resolve_pool;
use super::storage::DatabaseStorage;

/// Repository trait for symptom checks
#[async_trait]
pub trait SymptomCheckRepositoryTrait: Send + Sync {
    /// Append a new symptom check
    async fn create(&self, new_check: NewSymptomCheck) -> Result<SymptomCheck, RepositoryError>;

    /// A user's symptom checks, newest first
    async fn list_for_user(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<SymptomCheck>, RepositoryError>;
}

/// Repository for symptom checks.
/// Writes go to SQLite when a pool is available and to memory otherwise.
#[derive(Debug, Clone, Default)]
pub struct SymptomCheckRepository {
    pool: Option<DatabasePool>,
    storage: InMemoryStorage<SymptomCheck>,
}

impl SymptomCheckRepository {
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
}

#[async_trait]
impl SymptomCheckRepositoryTrait for SymptomCheckRepository {
    async fn create(&self, new_check: NewSymptomCheck) -> Result<SymptomCheck, RepositoryError> {
        let check = SymptomCheck {
            id: Uuid::new_v4().to_string(),
            user_id: new_check.user_id,
            symptoms: new_check.symptoms,
            urgency_level: new_check.urgency_level,
            ai_response: new_check.ai_response,
            created_at: now_timestamp(),
        };

        match resolve_pool(&self.pool) {
            Ok(pool) => match DatabaseStorage::store_symptom_check(&pool, &check) {
                Ok(()) => Ok(check),
                Err(e) => {
                    error!("Failed to store symptom check in database: {}", e);
                    self.storage.store(&check).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.store(&check).await
            }
        }
    }

    async fn list_for_user(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<SymptomCheck>, RepositoryError> {
        match resolve_pool(&self.pool) {
            Ok(pool) => match DatabaseStorage::list_symptom_checks(&pool, user_id, limit) {
                Ok(checks) => Ok(checks),
                Err(e) => {
                    error!("Failed to get symptom checks from database: {}", e);
                    self.storage.list_for_user(user_id, limit).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage for list_for_user", e);
                self.storage.list_for_user(user_id, limit).await
            }
        }
    }
}
