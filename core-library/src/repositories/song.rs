//! Song repository trait and implementation

use crate::error::Result;
use crate::models::{Lyric, SongDetails};
use async_trait::async_trait;
use sqlx::{query_as, SqlitePool};

/// Song repository interface for the song detail page
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Song joined with its album, from the `song_details` view
    async fn find_details(&self, song_id: i64) -> Result<Option<SongDetails>>;

    /// Lyric lines of a song ordered by line number
    async fn lyrics_for_song(&self, song_id: i64) -> Result<Vec<Lyric>>;

    /// Song details plus lyric lines
    ///
    /// Unknown songs yield `(None, [])` without querying lyrics.
    async fn find_with_lyrics(&self, song_id: i64) -> Result<(Option<SongDetails>, Vec<Lyric>)> {
        match self.find_details(song_id).await? {
            Some(song) => {
                let lyrics = self.lyrics_for_song(song_id).await?;
                Ok((Some(song), lyrics))
            }
            None => Ok((None, Vec::new())),
        }
    }
}

/// SQLite implementation of SongRepository
pub struct SqliteSongRepository {
    pool: SqlitePool,
}

impl SqliteSongRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for SqliteSongRepository {
    async fn find_details(&self, song_id: i64) -> Result<Option<SongDetails>> {
        let song = query_as::<_, SongDetails>(
            r#"
            SELECT song_id, song_name, song_number, song_explicit,
                   album_id, album_name, album_explicit
            FROM song_details
            WHERE song_id = ?
            "#,
        )
        .bind(song_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(song)
    }

    async fn lyrics_for_song(&self, song_id: i64) -> Result<Vec<Lyric>> {
        let lyrics = query_as::<_, Lyric>(
            r#"
            SELECT id as lyric_id, line_number, lyric_text, song_id
            FROM lyrics
            WHERE song_id = ?
            ORDER BY line_number
            "#,
        )
        .bind(song_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lyrics)
    }
}
