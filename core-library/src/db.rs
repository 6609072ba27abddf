//! # Corpus Database Module
//!
//! Opens the SQLite corpus with a connection pool tuned for read-only access.
//!
//! ## Features
//!
//! - **Read-only**: the shipped corpus is opened without write access and is
//!   never created on demand; a missing file is a `StorageUnavailable` error
//! - **Schema verification**: the tables and views the core reads must exist,
//!   otherwise opening fails with `CorpusCorrupt`
//! - **Health check**: the pool is validated before it is handed out
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bridge_traits::database::DatabaseConfig;
//! use core_library::db::create_pool;
//!
//! let pool = create_pool(&DatabaseConfig::new("db/lyrics.db")).await?;
//! ```
//!
//! ## Testing
//!
//! Tests use a writable in-memory database with the schema migrated in:
//!
//! ```rust,ignore
//! let pool = create_test_pool().await?;
//! ```

use crate::{LibraryError, Result};
use bridge_traits::database::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tables and views the core reads from.
const REQUIRED_OBJECTS: &[(&str, &str)] = &[
    ("table", "albums"),
    ("table", "songs"),
    ("table", "lyrics"),
    ("view", "lyrics_with_song_info"),
    ("view", "song_details"),
];

/// Create a configured SQLite connection pool over the corpus
///
/// This function:
/// 1. Configures connection options (read-only unless the config says otherwise)
/// 2. Creates the pool
/// 3. Performs a health check
/// 4. Verifies the corpus schema (read-only databases only; writable ones are
///    expected to be migrated by the caller)
///
/// # Errors
///
/// - `StorageUnavailable` if the file is missing or cannot be opened
/// - `CorpusCorrupt` if the file is not a database or lacks the corpus schema
pub async fn create_pool(config: &DatabaseConfig) -> Result<Pool<Sqlite>> {
    info!(
        database_url = %config.database_url,
        read_only = config.read_only,
        max_connections = config.max_connections,
        "Opening corpus database"
    );

    let mut connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| LibraryError::StorageUnavailable(format!("Invalid database URL: {}", e)))?;

    connect_options = connect_options
        .read_only(config.read_only)
        .create_if_missing(!config.read_only)
        .foreign_keys(true)
        .statement_cache_capacity(config.cache_capacity);

    debug!("SQLite connection options configured");

    // In-memory databases vanish with their last connection, so never let the
    // pool recycle it.
    let pool = SqlitePoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_options)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to open corpus database");
            LibraryError::from(e)
        })?;

    health_check(&pool).await?;

    if config.read_only {
        verify_schema(&pool).await?;
    }

    info!(connections = pool.size(), "Corpus database opened");
    Ok(pool)
}

/// Create an in-memory pool with the corpus schema applied
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_something() {
///     let pool = create_test_pool().await.unwrap();
/// }
/// ```
pub async fn create_test_pool() -> Result<Pool<Sqlite>> {
    let pool = create_pool(&DatabaseConfig::in_memory()).await?;
    run_migrations(&pool).await?;
    verify_schema(&pool).await?;
    Ok(pool)
}

/// Apply the bundled schema migrations
///
/// Only meaningful for writable databases: corpus builds and tests.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Running corpus schema migrations");

    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        warn!(error = %e, "Migration failed");
        LibraryError::Migration(e.to_string())
    })?;

    info!("Corpus schema migrations completed");
    Ok(())
}

/// Execute a trivial query to prove the pool can serve connections
async fn health_check(pool: &Pool<Sqlite>) -> Result<()> {
    debug!("Performing database health check");

    sqlx::query("SELECT 1").fetch_one(pool).await.map_err(|e| {
        warn!(error = %e, "Database health check failed");
        LibraryError::from(e)
    })?;

    debug!("Database health check passed");
    Ok(())
}

/// Ensure every table and view the core reads exists
pub async fn verify_schema(pool: &Pool<Sqlite>) -> Result<()> {
    for (kind, name) in REQUIRED_OBJECTS {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = ? AND name = ?")
                .bind(kind)
                .bind(name)
                .fetch_one(pool)
                .await?;

        if count == 0 {
            warn!(kind, name, "Corpus schema object missing");
            return Err(LibraryError::CorpusCorrupt(format!(
                "Corpus is missing {} `{}`",
                kind, name
            )));
        }
    }

    debug!("Corpus schema verified");
    Ok(())
}
