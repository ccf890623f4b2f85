use rusqlite::params;
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::{ChatTurn, DailyTip, MoodEntry, SymptomCheck};
use super::errors::RepositoryError;

/// SQLite reads no limit when LIMIT is negative
fn sql_limit(limit: Option<usize>) -> i64 {
    limit.map(|l| l as i64).unwrap_or(-1)
}

/// Database storage operations for wellness records
pub struct DatabaseStorage;

impl DatabaseStorage {
    /// Store a symptom check in the database
    pub fn store_symptom_check(pool: &DatabasePool, check: &SymptomCheck) -> Result<(), RepositoryError> {
        debug!("Storing symptom check in database: id={}", check.id);

        let conn = pool.get()?;
        conn.execute(
            "INSERT INTO symptom_checks (id, user_id, symptoms, urgency_level, ai_response, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                check.id,
                check.user_id,
                check.symptoms,
                check.urgency_level,
                check.ai_response,
                check.created_at,
            ],
        )?;

        Ok(())
    }

    /// A user's symptom checks, newest first
    pub fn list_symptom_checks(
        pool: &DatabasePool,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SymptomCheck>, RepositoryError> {
        debug!("Getting symptom checks from database for user {}", user_id);

        let conn = pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, symptoms, urgency_level, ai_response, created_at
             FROM symptom_checks WHERE user_id = ?1
             ORDER BY created_at DESC, rowid DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![user_id, sql_limit(limit)], |row| {
            Ok(SymptomCheck {
                id: row.get(0)?,
                user_id: row.get(1)?,
                symptoms: row.get(2)?,
                urgency_level: row.get(3)?,
                ai_response: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Store a chat turn in the database
    pub fn store_chat_turn(pool: &DatabasePool, turn: &ChatTurn) -> Result<(), RepositoryError> {
        debug!("Storing chat turn in database: id={}", turn.id);

        let conn = pool.get()?;
        conn.execute(
            "INSERT INTO chat_conversations (id, user_id, user_message, ai_response, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![turn.id, turn.user_id, turn.user_message, turn.ai_response, turn.created_at],
        )?;

        Ok(())
    }

    /// A user's chat turns, newest first
    pub fn list_chat_turns(
        pool: &DatabasePool,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ChatTurn>, RepositoryError> {
        debug!("Getting chat turns from database for user {}", user_id);

        let conn = pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, user_message, ai_response, created_at
             FROM chat_conversations WHERE user_id = ?1
             ORDER BY created_at DESC, rowid DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![user_id, sql_limit(limit)], |row| {
            Ok(ChatTurn {
                id: row.get(0)?,
                user_id: row.get(1)?,
                user_message: row.get(2)?,
                ai_response: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Store a mood entry in the database
    pub fn store_mood_entry(pool: &DatabasePool, entry: &MoodEntry) -> Result<(), RepositoryError> {
        debug!("Storing mood entry in database: id={}", entry.id);

        let conn = pool.get()?;
        conn.execute(
            "INSERT INTO mood_entries (id, user_id, mood, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![entry.id, entry.user_id, entry.mood, entry.notes, entry.created_at],
        )?;

        Ok(())
    }

    /// A user's mood entries, newest first
    pub fn list_mood_entries(
        pool: &DatabasePool,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<MoodEntry>, RepositoryError> {
        debug!("Getting mood entries from database for user {}", user_id);

        let conn = pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, mood, notes, created_at
             FROM mood_entries WHERE user_id = ?1
             ORDER BY created_at DESC, rowid DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![user_id, sql_limit(limit)], |row| {
            Ok(MoodEntry {
                id: row.get(0)?,
                user_id: row.get(1)?,
                mood: row.get(2)?,
                notes: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Store shown tips in one transaction
    pub fn store_tips(pool: &DatabasePool, tips: &[DailyTip]) -> Result<(), RepositoryError> {
        debug!("Storing {} daily tips in database", tips.len());

        let mut conn = pool.get()?;
        let tx = conn.transaction()?;
        for tip in tips {
            tx.execute(
                "INSERT INTO daily_tips (id, tip_text, tip_type, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![tip.id, tip.tip_text, tip.tip_type, tip.created_at],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    /// Count the tips recorded so far
    pub fn count_tips(pool: &DatabasePool) -> Result<usize, RepositoryError> {
        let conn = pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM daily_tips", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
