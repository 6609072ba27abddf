//! # Lyrics Corpus Module
//!
//! Owns read access to the lyrics corpus and provides the corpus store that the
//! search engine scans.
//!
//! ## Overview
//!
//! This module manages:
//! - Opening the shipped SQLite corpus read-only and verifying its schema
//! - The [`CorpusStore`](repositories::CorpusStore) contract: every lyric line,
//!   denormalized with song and album metadata, in canonical order
//! - An in-memory [`CorpusSnapshot`](snapshot::CorpusSnapshot) for preloaded or
//!   packaged corpora
//! - Song and album lookups backing the detail pages
//!
//! Canonical order is ascending `(album_id, song_number, line_number)`. Every
//! store in this crate either produces records in that order or fails with
//! [`LibraryError::CorpusCorrupt`].

pub mod adapters;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod snapshot;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use error::{LibraryError, Result};
pub use models::{Album, Lyric, LyricRecord, Song, SongDetails};
pub use repositories::CorpusStore;
pub use snapshot::CorpusSnapshot;
