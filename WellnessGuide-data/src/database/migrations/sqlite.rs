use rusqlite::Connection;
use tracing::info;

/// Run SQLite migrations
pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    info!("Running SQLite migrations");

    create_symptom_checks_table(conn)?;
    create_chat_conversations_table(conn)?;
    create_mood_entries_table(conn)?;
    create_daily_tips_table(conn)?;
    create_user_indexes(conn)?;

    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Create the symptom checks table
fn create_symptom_checks_table(conn: &Connection) -> Result<(), String> {
    info!("Creating symptom_checks table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS symptom_checks (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            symptoms TEXT NOT NULL,
            urgency_level TEXT NOT NULL,
            ai_response TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    ).map_err(|e| e.to_string())?;

    Ok(())
}

/// Create the chat conversations table
fn create_chat_conversations_table(conn: &Connection) -> Result<(), String> {
    info!("Creating chat_conversations table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS chat_conversations (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            user_message TEXT NOT NULL,
            ai_response TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    ).map_err(|e| e.to_string())?;

    Ok(())
}

/// Create the mood entries table
fn create_mood_entries_table(conn: &Connection) -> Result<(), String> {
    info!("Creating mood_entries table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS mood_entries (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            mood TEXT NOT NULL,
            notes TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    ).map_err(|e| e.to_string())?;

    Ok(())
}

/// Create the daily tips table
fn create_daily_tips_table(conn: &Connection) -> Result<(), String> {
    info!("Creating daily_tips table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS daily_tips (
            id TEXT PRIMARY KEY,
            tip_text TEXT NOT NULL,
            tip_type TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    ).map_err(|e| e.to_string())?;

    Ok(())
}

/// Create (user_id, created_at) indexes for per-user history queries
fn create_user_indexes(conn: &Connection) -> Result<(), String> {
    info!("Creating per-user history indexes");

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_symptom_checks_user_created
            ON symptom_checks (user_id, created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_chat_conversations_user_created
            ON chat_conversations (user_id, created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_mood_entries_user_created
            ON mood_entries (user_id, created_at DESC);"
    ).map_err(|e| format!("Failed to create index: {}", e))?;

    Ok(())
}
