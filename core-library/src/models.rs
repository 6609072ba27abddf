//! Domain models for the lyrics corpus
//!
//! All models are plain read-only values. Identifiers are the integer primary
//! keys of the shipped corpus database.

use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// =============================================================================
// Search Records
// =============================================================================

/// Canonical ordering key: `(album_id, song_number, line_number)`
pub type CanonicalKey = (i64, i64, i64);

/// A single lyric line, denormalized with its song and album
///
/// This is the unit the search engine scans and returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricRecord {
    /// Unique identifier, stable across queries
    pub lyric_id: i64,
    /// Position of the line within its song (1-based)
    pub line_number: i64,
    /// Literal line text
    #[serde(alias = "lyric_text")]
    pub text: String,
    pub song_id: i64,
    pub song_name: String,
    /// Position of the song within its album
    pub song_number: i64,
    pub album_id: i64,
    pub album_name: String,
}

impl LyricRecord {
    /// The key every result sequence is ordered by
    pub fn canonical_key(&self) -> CanonicalKey {
        (self.album_id, self.song_number, self.line_number)
    }

    /// Validate record data
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.line_number < 1 {
            return Err(format!(
                "Lyric {} has line number {}; line numbers start at 1",
                self.lyric_id, self.line_number
            ));
        }

        if self.song_name.trim().is_empty() {
            return Err(format!("Lyric {} has an empty song name", self.lyric_id));
        }

        if self.album_name.trim().is_empty() {
            return Err(format!("Lyric {} has an empty album name", self.lyric_id));
        }

        Ok(())
    }
}

/// Check that `records` are strictly increasing in canonical order.
///
/// Strictness also proves the ordering key is unique.
pub fn ensure_canonical_order(records: &[LyricRecord]) -> Result<()> {
    for pair in records.windows(2) {
        let (prev, next) = (pair[0].canonical_key(), pair[1].canonical_key());
        if prev >= next {
            return Err(LibraryError::CorpusCorrupt(format!(
                "Records out of canonical order or duplicated: {:?} then {:?} (lyric {} then {})",
                prev, next, pair[0].lyric_id, pair[1].lyric_id
            )));
        }
    }
    Ok(())
}

// =============================================================================
// Detail Page Models
// =============================================================================

/// Album row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Album {
    pub id: i64,
    pub name: String,
    pub explicit: bool,
}

/// Song row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Song {
    pub id: i64,
    pub name: String,
    pub album_id: i64,
    pub song_number: i64,
    pub explicit: bool,
}

/// Song joined with its album (`song_details` view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SongDetails {
    pub song_id: i64,
    pub song_name: String,
    pub song_number: i64,
    pub song_explicit: bool,
    pub album_id: i64,
    pub album_name: String,
    pub album_explicit: bool,
}

/// A lyric line without song/album context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Lyric {
    pub lyric_id: i64,
    pub line_number: i64,
    #[sqlx(rename = "lyric_text")]
    #[serde(alias = "lyric_text")]
    pub text: String,
    pub song_id: i64,
}
