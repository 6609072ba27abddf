//! # Repository Pattern Implementation
//!
//! Read-only repositories over the corpus database.
//!
//! ## Architecture
//!
//! - Traits define the interface for each repository
//! - SQLite implementations use sqlx (directly or through the
//!   `DatabaseAdapter` bridge)
//! - All operations return `Result<T>` with the corpus error taxonomy
//!
//! ## Available Repositories
//!
//! - `CorpusStore` - Every lyric line with song/album metadata, canonical order
//! - `AlbumRepository` - Albums and their track listing
//! - `SongRepository` - Song details and lyric lines

pub mod album;
pub mod corpus;
pub mod song;

pub use album::{AlbumRepository, SqliteAlbumRepository};
pub use corpus::{CorpusStore, SqliteCorpusRepository};
pub use song::{SongRepository, SqliteSongRepository};
