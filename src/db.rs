use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};

/// Shared SQLite tuning. WAL keeps readers open while the writer commits,
/// NORMAL sync is safe under WAL, and the busy timeout smooths over the
/// occasional lock collision.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory");

    Ok(options)
}

/// Read-only pool sized for concurrent page renders.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?.read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "created read pool");

    Ok(pool)
}

/// Single-connection pool for writes. One writer at a time keeps
/// SQLITE_BUSY out of the request path.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!("created write pool");

    Ok(pool)
}

/// Plain pool for CLI commands and tests, where splitting reads from
/// writes buys nothing.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!(max_connections, "created pool");

    Ok(pool)
}
