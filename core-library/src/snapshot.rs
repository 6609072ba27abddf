//! In-memory corpus snapshot
//!
//! A `CorpusSnapshot` holds every record in memory, already in canonical
//! order. It is used two ways:
//!
//! - preloading: read the database once at startup with
//!   [`CorpusSnapshot::load_from`] and serve every search from memory
//! - packaged corpora: decode a JSON artifact shipped next to the binary with
//!   [`CorpusSnapshot::load_json_file`]
//!
//! Snapshots are immutable and cheap to clone.

use crate::error::{LibraryError, Result};
use crate::models::{ensure_canonical_order, LyricRecord};
use crate::repositories::CorpusStore;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CorpusSnapshot {
    records: Arc<Vec<LyricRecord>>,
}

impl CorpusSnapshot {
    /// Build a snapshot from records in any order
    ///
    /// Records are sorted canonically. Invalid records, duplicate ordering
    /// keys and duplicate lyric ids are rejected with `CorpusCorrupt`.
    pub fn from_records(mut records: Vec<LyricRecord>) -> Result<Self> {
        for record in &records {
            record.validate().map_err(LibraryError::CorpusCorrupt)?;
        }

        records.sort_by_key(LyricRecord::canonical_key);
        ensure_canonical_order(&records)?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.lyric_id) {
                return Err(LibraryError::CorpusCorrupt(format!(
                    "Duplicate lyric id {}",
                    record.lyric_id
                )));
            }
        }

        debug!(records = records.len(), "Corpus snapshot built");
        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Materialize another store into memory
    pub async fn load_from(store: &dyn CorpusStore) -> Result<Self> {
        let records = store.all_records().await?;
        Self::from_records(records)
    }

    /// Decode a JSON array of records
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<LyricRecord> = serde_json::from_slice(bytes)?;
        Self::from_records(records)
    }

    /// Read and decode a JSON corpus artifact
    ///
    /// # Errors
    /// - `StorageUnavailable` if the file cannot be read
    /// - `CorpusCorrupt` if it does not decode or violates corpus invariants
    pub async fn load_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            LibraryError::StorageUnavailable(format!(
                "Cannot read corpus snapshot {}: {}",
                path.display(),
                e
            ))
        })?;

        let snapshot = Self::from_json_slice(&bytes)?;
        info!(
            path = %path.display(),
            records = snapshot.len(),
            "Loaded corpus snapshot"
        );
        Ok(snapshot)
    }

    /// Borrow the records in canonical order
    pub fn records(&self) -> &[LyricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait::async_trait]
impl CorpusStore for CorpusSnapshot {
    async fn all_records(&self) -> Result<Vec<LyricRecord>> {
        Ok(self.records.as_ref().clone())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.records.len() as i64)
    }
}
