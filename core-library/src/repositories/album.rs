//! Album repository trait and implementation

use crate::error::Result;
use crate::models::{Album, Song};
use async_trait::async_trait;
use sqlx::{query_as, SqlitePool};

/// Album repository interface for data access operations
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Find an album by its ID
    ///
    /// # Returns
    /// - `Ok(Some(album))` if found
    /// - `Ok(None)` if not found
    /// - `Err` if database error occurs
    async fn find_by_id(&self, id: i64) -> Result<Option<Album>>;

    /// Songs of an album ordered by track position
    async fn songs_for_album(&self, album_id: i64) -> Result<Vec<Song>>;

    /// Album plus its track listing
    ///
    /// Unknown albums yield `(None, [])` without querying songs.
    async fn find_with_songs(&self, id: i64) -> Result<(Option<Album>, Vec<Song>)> {
        match self.find_by_id(id).await? {
            Some(album) => {
                let songs = self.songs_for_album(id).await?;
                Ok((Some(album), songs))
            }
            None => Ok((None, Vec::new())),
        }
    }
}

/// SQLite implementation of AlbumRepository
pub struct SqliteAlbumRepository {
    pool: SqlitePool,
}

impl SqliteAlbumRepository {
    /// Create a new SqliteAlbumRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for SqliteAlbumRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Album>> {
        let album = query_as::<_, Album>("SELECT id, name, explicit FROM albums WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(album)
    }

    async fn songs_for_album(&self, album_id: i64) -> Result<Vec<Song>> {
        let songs = query_as::<_, Song>(
            r#"
            SELECT id, name, album_id, song_number, explicit
            FROM songs
            WHERE album_id = ?
            ORDER BY song_number
            "#,
        )
        .bind(album_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }
}
