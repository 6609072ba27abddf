//! Database Abstraction Layer
//!
//! Provides a storage-agnostic, read-only trait for the corpus database.
//!
//! ## Design
//!
//! The lyrics corpus is shipped as a pre-built SQLite file and is never written
//! by the core. The adapter therefore only exposes connection management and
//! parameterized reads; there are no transaction or migration entry points.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_traits::database::{DatabaseAdapter, QueryValue};
//!
//! let rows = adapter
//!     .query(
//!         "SELECT * FROM lyrics_with_song_info WHERE song_id = ?",
//!         &[QueryValue::Integer(12)],
//!     )
//!     .await?;
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration for opening the corpus
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database file path or connection string
    pub database_url: String,

    /// Open the database without write access
    pub read_only: bool,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Maximum time to wait for a connection (seconds)
    pub acquire_timeout_secs: u64,

    /// Statement cache capacity
    pub cache_capacity: usize,
}

impl DatabaseConfig {
    /// Create a read-only configuration for the database file at `database_path`
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        let path = database_path.into();
        let database_url = format!("sqlite:{}", path.display());

        Self {
            database_url,
            read_only: true,
            min_connections: 1,
            max_connections: 5,
            acquire_timeout_secs: 30,
            cache_capacity: 100,
        }
    }

    /// Create a writable configuration for an in-memory database
    ///
    /// Only useful for tests, which need to load fixture rows.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            read_only: false,
            min_connections: 1,
            max_connections: 1,
            acquire_timeout_secs: 30,
            cache_capacity: 100,
        }
    }

    /// Set the maximum number of pooled connections
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the connection acquire timeout in seconds
    pub fn acquire_timeout_secs(mut self, secs: u64) -> Self {
        self.acquire_timeout_secs = secs;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

// =============================================================================
// Query Result Types
// =============================================================================

/// Represents a single row from a database query as a map of column names to values
pub type QueryRow = std::collections::HashMap<String, QueryValue>;

/// Represents a database value that can be null, integer, real, text, or blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl QueryValue {
    /// Convert to i64 if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            QueryValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Borrow as str if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }
}

// =============================================================================
// Database Adapter Trait
// =============================================================================

/// Read-only database adapter for the lyrics corpus
///
/// Implementations must be `Send + Sync`; a single adapter is shared by every
/// concurrent search.
///
/// Adapters must report connection-level failures as
/// [`BridgeError::Unavailable`](crate::BridgeError::Unavailable) and
/// schema/decoding failures as
/// [`BridgeError::DatabaseError`](crate::BridgeError::DatabaseError).
#[async_trait::async_trait]
pub trait DatabaseAdapter: Send + Sync {
    /// Close all database connections
    ///
    /// Calling any query method after `close` fails with `Unavailable`.
    async fn close(&self) -> Result<()>;

    /// Execute a parameterized SQL query and return all rows
    async fn query(&self, query: &str, params: &[QueryValue]) -> Result<Vec<QueryRow>>;

    /// Execute a query and return exactly one row
    async fn query_one(&self, query: &str, params: &[QueryValue]) -> Result<QueryRow>;

    /// Get statistics about the underlying pool
    async fn get_statistics(&self) -> Result<DatabaseStatistics>;
}

// =============================================================================
// Supporting Types
// =============================================================================

/// Database statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseStatistics {
    /// Total number of connections in the pool
    pub total_connections: u32,
    /// Number of idle connections
    pub idle_connections: u32,
    /// Database file size in bytes (if applicable)
    pub database_size_bytes: Option<u64>,
}
