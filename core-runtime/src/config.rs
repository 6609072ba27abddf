//! # Core Configuration Module
//!
//! Configuration for the lyrics search core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! and validates it before returning. At least one corpus source is required:
//!
//! - `database_path` - the shipped SQLite corpus, opened read-only. Required
//!   for song and album pages.
//! - `snapshot_path` - a JSON corpus artifact. When set, searches are served
//!   from it instead of the database.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::{CoreConfig, CorpusLoading};
//!
//! let config = CoreConfig::builder()
//!     .database_path("/path/to/lyrics.db")
//!     .corpus_loading(CorpusLoading::PerRequest)
//!     .max_query_length(128)
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::CoreConfig;
//!
//! // No corpus source configured
//! let config = CoreConfig::builder()
//!     .build()
//!     .expect("Should fail - no corpus source");
//! ```

use crate::error::{Error, Result};
use bridge_traits::database::DatabaseConfig;
use core_search::SearchOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 256;

/// When the database corpus is read
///
/// Snapshot corpora are always read once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusLoading {
    /// Read the full corpus once at startup and serve searches from memory
    #[default]
    Preload,
    /// Query the database on every search
    PerRequest,
}

/// Core configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// SQLite corpus database
    pub database_path: Option<PathBuf>,
    /// JSON corpus artifact
    pub snapshot_path: Option<PathBuf>,
    pub corpus_loading: CorpusLoading,
    /// Upper bound on pooled read connections
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Options applied when a caller does not supply its own
    pub default_search_options: SearchOptions,
    /// Longest accepted query, in characters
    pub max_query_length: usize,
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - A corpus source is configured and its path is not empty
    /// - Pool settings are non-zero
    /// - The query length limit is non-zero
    pub fn validate(&self) -> Result<()> {
        if self.database_path.is_none() && self.snapshot_path.is_none() {
            return Err(Error::Config(
                "A corpus source is required. Use .database_path() or .snapshot_path() to set it."
                    .to_string(),
            ));
        }

        if let Some(path) = &self.database_path {
            if path.as_os_str().is_empty() {
                return Err(Error::Config("Database path cannot be empty".to_string()));
            }
        }

        if let Some(path) = &self.snapshot_path {
            if path.as_os_str().is_empty() {
                return Err(Error::Config("Snapshot path cannot be empty".to_string()));
            }
        }

        if self.max_connections == 0 {
            return Err(Error::Config(
                "Max connections must be greater than 0".to_string(),
            ));
        }

        if self.acquire_timeout_secs == 0 {
            return Err(Error::Config(
                "Acquire timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.max_query_length == 0 {
            return Err(Error::Config(
                "Max query length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Read-only pool settings for the database corpus, if one is configured
    pub fn database_config(&self) -> Option<DatabaseConfig> {
        self.database_path.as_ref().map(|path| {
            DatabaseConfig::new(path)
                .max_connections(self.max_connections)
                .acquire_timeout_secs(self.acquire_timeout_secs)
        })
    }
}

/// Builder for [`CoreConfig`]
#[derive(Debug, Default)]
pub struct CoreConfigBuilder {
    database_path: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
    corpus_loading: Option<CorpusLoading>,
    max_connections: Option<u32>,
    acquire_timeout_secs: Option<u64>,
    default_search_options: Option<SearchOptions>,
    max_query_length: Option<usize>,
}

impl CoreConfigBuilder {
    /// Sets the SQLite corpus database path.
    pub fn database_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Sets a JSON corpus artifact to search instead of the database.
    pub fn snapshot_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn corpus_loading(mut self, loading: CorpusLoading) -> Self {
        self.corpus_loading = Some(loading);
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    pub fn acquire_timeout_secs(mut self, secs: u64) -> Self {
        self.acquire_timeout_secs = Some(secs);
        self
    }

    pub fn default_search_options(mut self, options: SearchOptions) -> Self {
        self.default_search_options = Some(options);
        self
    }

    pub fn max_query_length(mut self, length: usize) -> Self {
        self.max_query_length = Some(length);
        self
    }

    /// Builds the final `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, see [`CoreConfig::validate`].
    pub fn build(self) -> Result<CoreConfig> {
        let config = CoreConfig {
            database_path: self.database_path,
            snapshot_path: self.snapshot_path,
            corpus_loading: self.corpus_loading.unwrap_or_default(),
            max_connections: self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            acquire_timeout_secs: self
                .acquire_timeout_secs
                .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            default_search_options: self.default_search_options.unwrap_or_default(),
            max_query_length: self.max_query_length.unwrap_or(DEFAULT_MAX_QUERY_LENGTH),
        };

        config.validate()?;

        Ok(config)
    }
}
