//! Database connection module for the WellnessGuide application
//!
//! Records are kept in a single SQLite file shared through an r2d2 pool.
//! When the file cannot be opened the pool falls back to an in-memory
//! database so the service keeps answering.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;
use tracing::{error, info, warn};

use super::migrations::run_sqlite_migrations;

/// Global database pool used throughout the application
static DB_POOL: OnceCell<DatabasePool> = OnceCell::new();

/// Shared SQLite connection pool
pub type DatabasePool = Arc<r2d2::Pool<SqliteConnectionManager>>;

/// Database error
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLite error
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// SQLite connection pool error
    #[error("SQLite connection pool error: {0}")]
    SqlitePoolError(#[from] r2d2::Error),

    /// Database pool already initialized
    #[error("Database pool is already initialized")]
    PoolAlreadyInitialized,

    /// Database pool not initialized
    #[error("Database pool is not initialized")]
    PoolNotInitialized,

    /// Migration error
    #[error("Database migration error: {0}")]
    MigrationError(String),

    /// Generic database error
    #[error("Database error: {0}")]
    GenericError(String),
}

impl From<String> for DatabaseError {
    fn from(error: String) -> Self {
        DatabaseError::GenericError(error)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to SQLite database file
    pub sqlite_path: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            sqlite_path: "./data/wellness.db".to_string(),
            max_connections: 10,
            timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let sqlite_path = env::var("DB_SQLITE_PATH").unwrap_or_else(|_| {
            info!("No DB_SQLITE_PATH provided, will use default path: {}", defaults.sqlite_path);
            defaults.sqlite_path.clone()
        });

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_connections);

        let timeout_seconds = env::var("DB_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.timeout_seconds);

        info!(
            "Database configuration: path={}, max_connections={}, timeout={}s",
            sqlite_path, max_connections, timeout_seconds
        );

        Self {
            sqlite_path,
            max_connections,
            timeout_seconds,
        }
    }
}

/// Initialize the global database connection pool from the environment
pub fn initialize_database_pool() -> Result<(), DatabaseError> {
    if DB_POOL.get().is_some() {
        return Err(DatabaseError::PoolAlreadyInitialized);
    }

    let config = DatabaseConfig::from_env();
    let pool = initialize_sqlite_pool(&config)?;
    run_migrations(&pool)?;

    DB_POOL
        .set(pool)
        .map_err(|_| DatabaseError::PoolAlreadyInitialized)
}

/// Get the database connection pool
pub fn get_db_pool() -> Result<DatabasePool, DatabaseError> {
    DB_POOL.get().cloned().ok_or(DatabaseError::PoolNotInitialized)
}

/// Build a migrated in-memory pool with a single connection.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// capped at one connection to keep all callers on the same data.
pub fn create_in_memory_pool() -> Result<DatabasePool, DatabaseError> {
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())?;
    let pool = Arc::new(pool);
    run_migrations(&pool)?;
    Ok(pool)
}

/// Initialize SQLite connection pool
fn initialize_sqlite_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!("Initializing SQLite database at: {}", config.sqlite_path);

    if let Some(parent) = Path::new(&config.sqlite_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating parent directory: {:?}", parent);
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create directory: {}, falling back to in-memory database", e);
                return create_in_memory_pool();
            }
        }
    }

    let manager = SqliteConnectionManager::file(&config.sqlite_path)
        .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);

    let pool = match r2d2::Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(Duration::from_secs(config.timeout_seconds))
        .build(manager)
    {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to create SQLite connection pool: {}", e);
            warn!("Falling back to in-memory SQLite database");
            return create_in_memory_pool();
        }
    };

    info!("SQLite connection pool created successfully");
    Ok(Arc::new(pool))
}

/// Run database migrations on a pool
fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    let conn = pool.get()?;
    run_sqlite_migrations(&conn).map_err(DatabaseError::MigrationError)?;

    Ok(())
}

/// Get information about the current database connection
pub fn get_connection_info() -> Option<String> {
    let pool = DB_POOL.get()?;

    let conn = match pool.get() {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to get SQLite connection: {}", e);
            return Some(format!("SQLite connection error: {}", e));
        }
    };

    let location = match conn.query_row("PRAGMA database_list", [], |row| row.get::<_, String>(2)) {
        Ok(path) if path.is_empty() || path == ":memory:" => "SQLite in-memory database".to_string(),
        Ok(path) => format!("SQLite database at {}", path),
        Err(_) => "SQLite database (path unknown)".to_string(),
    };

    let state = pool.state();
    Some(format!(
        "{} healthy (connections: active={}, idle={})",
        location, state.connections, state.idle_connections
    ))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.sqlite_path, "./data/wellness.db");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_in_memory_pool_is_migrated() {
        let pool = create_in_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM mood_entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_pool_not_initialized_by_default() {
        assert!(matches!(get_db_pool(), Err(DatabaseError::PoolNotInitialized)));
    }
}
