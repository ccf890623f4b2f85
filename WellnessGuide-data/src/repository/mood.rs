use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::database::DatabasePool;
use crate::models::{now_timestamp, MoodEntry, NewMoodEntry};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::resolve_pool;
use super::storage::DatabaseStorage;

/// Repository trait for mood entries
#[async_trait]
pub trait MoodRepositoryTrait: Send + Sync {
    /// Append a new mood entry
    async fn create(&self, new_entry: NewMoodEntry) -> Result<MoodEntry, RepositoryError>;

    /// A user's most recent mood entries, newest first
    async fn list_recent(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<MoodEntry>, RepositoryError>;
}

/// Repository for mood entries
#[derive(Debug, Clone, Default)]
pub struct MoodRepository {
    pool: Option<DatabasePool>,
    storage: InMemoryStorage<MoodEntry>,
}

impl MoodRepository {
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
impl MoodRepositoryTrait for MoodRepository {
    async fn create(&self, new_entry: NewMoodEntry) -> Result<MoodEntry, RepositoryError> {
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            user_id: new_entry.user_id,
            mood: new_entry.mood,
            notes: new_entry.notes,
            created_at: now_timestamp(),
        };

        match resolve_pool(&self.pool) {
            Ok(pool) => match DatabaseStorage::store_mood_entry(&pool, &entry) {
                Ok(()) => Ok(entry),
                Err(e) => {
                    error!("Failed to store mood entry in database: {}", e);
                    self.storage.store(&entry).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.store(&entry).await
            }
        }
    }

    async fn list_recent(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<MoodEntry>, RepositoryError> {
        match resolve_pool(&self.pool) {
            Ok(pool) => match DatabaseStorage::list_mood_entries(&pool, user_id, limit) {
                Ok(entries) => Ok(entries),
                Err(e) => {
                    error!("Failed to get mood entries from database: {}", e);
                    self.storage.list_for_user(user_id, limit).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage for list_recent", e);
                self.storage.list_for_user(user_id, limit).await
            }
        }
    }
}
