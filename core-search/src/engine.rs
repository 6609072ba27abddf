//! Search engine
//!
//! Loads the corpus from a [`CorpusStore`] and filters it with a
//! [`QueryMatcher`]. Each call is an independent scan; the engine holds no
//! mutable state and can be shared freely between tasks.

use crate::error::{Result, SearchError};
use crate::matcher::QueryMatcher;
use crate::options::SearchOptions;
use core_library::{CorpusStore, LyricRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Filter an already loaded corpus
///
/// `records` must be in canonical order; the result keeps that order.
/// Returns `Ok(None)` for an empty query.
pub fn search_records(
    records: Vec<LyricRecord>,
    query: &str,
    options: SearchOptions,
) -> Result<Option<Vec<LyricRecord>>> {
    Ok(QueryMatcher::new(query, options)?.map(|matcher| matcher.filter(records)))
}

pub struct SearchEngine {
    store: Arc<dyn CorpusStore>,
    max_query_length: Option<usize>,
}

impl SearchEngine {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self {
            store,
            max_query_length: None,
        }
    }

    /// Reject queries longer than `limit` characters
    pub fn with_max_query_length(mut self, limit: usize) -> Self {
        self.max_query_length = Some(limit);
        self
    }

    /// Run one query against the full corpus
    ///
    /// # Returns
    /// - `Ok(None)` if `query` is empty; the store is not touched
    /// - `Ok(Some(records))` with every matching record in canonical order,
    ///   possibly empty
    ///
    /// # Errors
    /// - `StorageUnavailable` / `CorpusCorrupt` propagated from the store
    /// - `QueryTooLong` if a length limit is configured and exceeded
    #[instrument(
        skip(self, query),
        fields(query_len = query.chars().count(), mode = %options.mode())
    )]
    pub async fn search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Option<Vec<LyricRecord>>> {
        if let Some(limit) = self.max_query_length {
            let length = query.chars().count();
            if length > limit {
                return Err(SearchError::QueryTooLong { length, limit });
            }
        }

        let Some(matcher) = QueryMatcher::new(query, options)? else {
            debug!("Empty query; no search performed");
            return Ok(None);
        };

        let records = self.store.all_records().await?;
        let scanned = records.len();
        let matches = matcher.filter(records);

        debug!(scanned, matches = matches.len(), "Search complete");
        Ok(Some(matches))
    }
}
