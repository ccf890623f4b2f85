// Repository module structure
pub mod errors;
mod chat;
mod in_memory;
mod mood;
mod storage;
mod symptom_check;
mod tip;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use chat::{ChatRepository, ChatRepositoryTrait};
pub use in_memory::{InMemoryStorage, StoredRecord};
pub use mood::{MoodRepository, MoodRepositoryTrait};
pub use symptom_check::{SymptomCheckRepository, SymptomCheckRepositoryTrait};
pub use tip::{TipRepository, TipRepositoryTrait};

use crate::database::{get_db_pool, DatabaseError, DatabasePool};

/// Use the injected pool, otherwise the global one
pub(crate) fn resolve_pool(pool: &Option<DatabasePool>) -> Result<DatabasePool, DatabaseError> {
    match pool {
        Some(pool) => Ok(pool.clone()),
        None => get_db_pool(),
    }
}
