use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::database::DatabasePool;
use crate::models::{now_timestamp, ChatTurn, NewChatTurn};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::resolve_pool;
use super::storage::DatabaseStorage;

/// Repository trait for chat turns
#[async_trait]
pub trait ChatRepositoryTrait: Send + Sync {
    /// Append a new chat turn
    async fn create(&self, new_turn: NewChatTurn) -> Result<ChatTurn, RepositoryError>;

    /// A user's most recent chat turns, newest first
    async fn list_recent(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<ChatTurn>, RepositoryError>;
}

/// Repository for chat turns
#[derive(Debug, Clone, Default)]
pub struct ChatRepository {
    pool: Option<DatabasePool>,
    storage: InMemoryStorage<ChatTurn>,
}

impl ChatRepository {
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
impl ChatRepositoryTrait for ChatRepository {
    async fn create(&self, new_turn: NewChatTurn) -> Result<ChatTurn, RepositoryError> {
        let turn = ChatTurn {
            id: Uuid::new_v4().to_string(),
            user_id: new_turn.user_id,
            user_message: new_turn.user_message,
            ai_response: new_turn.ai_response,
            created_at: now_timestamp(),
        };

        match resolve_pool(&self.pool) {
            Ok(pool) => match DatabaseStorage::store_chat_turn(&pool, &turn) {
                Ok(()) => Ok(turn),
                Err(e) => {
                    error!("Failed to store chat turn in database: {}", e);
                    self.storage.store(&turn).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.store(&turn).await
            }
        }
    }

    async fn list_recent(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<ChatTurn>, RepositoryError> {
        match resolve_pool(&self.pool) {
            Ok(pool) => match DatabaseStorage::list_chat_turns(&pool, user_id, limit) {
                Ok(turns) => Ok(turns),
                Err(e) => {
                    error!("Failed to get chat turns from database: {}", e);
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
