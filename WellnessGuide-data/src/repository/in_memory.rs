use std::sync::{Arc, Mutex};

use crate::models::{ChatTurn, DailyTip, MoodEntry, SymptomCheck};
use super::errors::RepositoryError;

/// A record the in-memory fallback can hold
pub trait StoredRecord: Clone + Send + Sync + 'static {
    /// Owner of the record, `None` for records not scoped to a user
    fn user_id(&self) -> Option<&str>;

    /// RFC 3339 creation time
    fn created_at(&self) -> &str;
}

impl StoredRecord for SymptomCheck {
    fn user_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl StoredRecord for ChatTurn {
    fn user_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl StoredRecord for MoodEntry {
    fn user_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl StoredRecord for DailyTip {
    fn user_id(&self) -> Option<&str> {
        None
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Append-only in-memory storage used when the database is unavailable
#[derive(Debug, Clone)]
pub struct InMemoryStorage<T> {
    records: Arc<Mutex<Vec<T>>>,
}

impl<T: StoredRecord> Default for InMemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredRecord> InMemoryStorage<T> {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a record
    pub async fn store(&self, record: &T) -> Result<T, RepositoryError> {
        let mut store = self.records.lock()?;
        store.push(record.clone());
        Ok(record.clone())
    }

    /// A user's records, newest first, optionally limited
    pub async fn list_for_user(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<T>, RepositoryError> {
        let store = self.records.lock()?;

        // Walk backwards so records sharing a timestamp stay newest first after the stable sort
        let mut records: Vec<T> = store
            .iter()
            .rev()
            .filter(|record| record.user_id() == Some(user_id))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at().cmp(a.created_at()));

        if let Some(limit) = limit {
            records.truncate(limit);
        }

        Ok(records)
    }

    /// Number of records held
    pub async fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.records.lock()?.len())
    }
}
