//! # Lyrics Search Module
//!
//! Deterministic substring and whole-word matching over the lyrics corpus.
//!
//! ## Overview
//!
//! - [`SearchOptions`] selects one of three match modes: case-insensitive
//!   substring (default), case-sensitive substring, or whole word
//! - [`QueryMatcher`] compiles a query once and tests lines against it
//! - [`SearchEngine`] loads the corpus from a
//!   [`CorpusStore`](core_library::CorpusStore) and returns matches in
//!   canonical `(album_id, song_number, line_number)` order
//! - [`highlight`] splits lines into matched and unmatched segments for display
//!
//! There is no ranking and no index. An empty query means "no search", which
//! is reported as `None` and is distinct from an empty result.
//!
//! ## Usage
//!
//! ```ignore
//! use core_search::{SearchEngine, SearchOptions};
//!
//! let engine = SearchEngine::new(store);
//! match engine.search("cold", SearchOptions::exact_word()).await? {
//!     None => println!("nothing searched"),
//!     Some(records) => println!("{} matches", records.len()),
//! }
//! ```

pub mod engine;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod options;
pub mod outcome;

pub use engine::{search_records, SearchEngine};
pub use error::{Result, SearchError};
pub use highlight::Segment;
pub use matcher::QueryMatcher;
pub use options::{MatchMode, SearchOptions};
pub use outcome::SearchOutcome;
