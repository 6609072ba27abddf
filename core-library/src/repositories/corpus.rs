//! Corpus store trait and SQLite implementation

use crate::error::{LibraryError, Result};
use crate::models::{ensure_canonical_order, LyricRecord};
use bridge_traits::database::{DatabaseAdapter, QueryRow, QueryValue};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

/// Read view over the full lyrics corpus
///
/// Implementations return every record, fully materialized, in canonical order
/// `(album_id, song_number, line_number)` ascending. There is no pagination.
/// A failure never yields partial results.
#[async_trait::async_trait]
pub trait CorpusStore: Send + Sync {
    /// Every record in canonical order
    ///
    /// # Errors
    /// - `StorageUnavailable` if the corpus cannot be read
    /// - `CorpusCorrupt` if rows fail to decode or violate canonical order
    async fn all_records(&self) -> Result<Vec<LyricRecord>>;

    /// Number of records in the corpus
    async fn count(&self) -> Result<i64>;
}

/// SQLite implementation of CorpusStore reading the denormalized view
pub struct SqliteCorpusRepository {
    adapter: Arc<dyn DatabaseAdapter>,
}

impl SqliteCorpusRepository {
    /// Create a new corpus repository with the given database adapter
    pub fn new(adapter: Arc<dyn DatabaseAdapter>) -> Self {
        Self { adapter }
    }

    /// Create a new corpus repository from a SQLite connection pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        use crate::adapters::SqliteAdapter;
        Self::new(Arc::new(SqliteAdapter::from_pool(pool)))
    }

    fn get_string(row: &QueryRow, col: &str) -> Result<String> {
        row.get(col)
            .and_then(QueryValue::as_str)
            .map(str::to_string)
            .ok_or_else(|| Self::invalid_column(col))
    }

    fn get_i64(row: &QueryRow, col: &str) -> Result<i64> {
        row.get(col)
            .and_then(QueryValue::as_i64)
            .ok_or_else(|| Self::invalid_column(col))
    }

    fn invalid_column(col: &str) -> LibraryError {
        LibraryError::CorpusCorrupt(format!("Missing or invalid column: {}", col))
    }

    fn row_to_record(row: QueryRow) -> Result<LyricRecord> {
        Ok(LyricRecord {
            lyric_id: Self::get_i64(&row, "lyric_id")?,
            line_number: Self::get_i64(&row, "line_number")?,
            text: Self::get_string(&row, "lyric_text")?,
            song_id: Self::get_i64(&row, "song_id")?,
            song_name: Self::get_string(&row, "song_name")?,
            song_number: Self::get_i64(&row, "song_number")?,
            album_id: Self::get_i64(&row, "album_id")?,
            album_name: Self::get_string(&row, "album_name")?,
        })
    }
}

#[async_trait::async_trait]
impl CorpusStore for SqliteCorpusRepository {
    async fn all_records(&self) -> Result<Vec<LyricRecord>> {
        let sql = r#"
            SELECT lyric_id, line_number, lyric_text, song_id, song_name,
                   song_number, album_id, album_name
            FROM lyrics_with_song_info
            ORDER BY album_id, song_number, line_number
        "#;

        let rows = self.adapter.query(sql, &[]).await?;

        let records = rows
            .into_iter()
            .map(Self::row_to_record)
            .collect::<Result<Vec<_>>>()?;

        for record in &records {
            record.validate().map_err(LibraryError::CorpusCorrupt)?;
        }
        ensure_canonical_order(&records)?;

        debug!(records = records.len(), "Loaded corpus records");
        Ok(records)
    }

    async fn count(&self) -> Result<i64> {
        let sql = "SELECT COUNT(*) as count FROM lyrics_with_song_info";
        let row = self.adapter.query_one(sql, &[]).await?;

        Self::get_i64(&row, "count")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::testing::{sample_corpus, seed_corpus, FixtureAlbum, FixtureSong};

    async fn seeded_repo() -> SqliteCorpusRepository {
        let pool = create_test_pool().await.unwrap();
        seed_corpus(&pool, &sample_corpus()).await.unwrap();
        SqliteCorpusRepository::from_pool(pool)
    }

    #[tokio::test]
    async fn test_all_records_in_canonical_order() {
        let repo = seeded_repo().await;
        let records = repo.all_records().await.unwrap();

        assert!(!records.is_empty());
        let keys: Vec<_> = records.iter().map(LyricRecord::canonical_key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn test_all_records_orders_by_song_number_not_song_id() {
        let pool = create_test_pool().await.unwrap();
        // Song 20 is track 1, song 10 is track 2.
        let albums = vec![FixtureAlbum::new(1, "Reordered").with_songs(vec![
            FixtureSong::new(10, "Second Track", 2, &["second track line"]),
            FixtureSong::new(20, "First Track", 1, &["first track line"]),
        ])];
        seed_corpus(&pool, &albums).await.unwrap();

        let repo = SqliteCorpusRepository::from_pool(pool);
        let records = repo.all_records().await.unwrap();

        let songs: Vec<_> = records.iter().map(|r| r.song_id).collect();
        assert_eq!(songs, vec![20, 10]);
    }

    #[tokio::test]
    async fn test_records_are_fully_denormalized() {
        let repo = seeded_repo().await;
        let records = repo.all_records().await.unwrap();

        let first = &records[0];
        assert_eq!(first.album_id, 1);
        assert_eq!(first.song_number, 1);
        assert_eq!(first.line_number, 1);
        assert!(!first.song_name.is_empty());
        assert!(!first.album_name.is_empty());
    }

    #[tokio::test]
    async fn test_count_matches_all_records() {
        let repo = seeded_repo().await;
        let records = repo.all_records().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), records.len() as i64);
    }

    #[tokio::test]
    async fn test_empty_corpus() {
        let repo = SqliteCorpusRepository::from_pool(create_test_pool().await.unwrap());
        assert!(repo.all_records().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_closed_pool_is_unavailable() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteCorpusRepository::from_pool(pool.clone());
        pool.close().await;

        let err = repo.all_records().await.unwrap_err();
        assert!(err.is_unavailable(), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_missing_view_is_corrupt() {
        let pool = create_test_pool().await.unwrap();
        sqlx::query("DROP VIEW lyrics_with_song_info")
            .execute(&pool)
            .await
            .unwrap();

        let repo = SqliteCorpusRepository::from_pool(pool);
        let err = repo.all_records().await.unwrap_err();
        assert!(err.is_corrupt(), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_blank_album_name_is_corrupt() {
        let pool = create_test_pool().await.unwrap();
        seed_corpus(&pool, &sample_corpus()).await.unwrap();
        sqlx::query("UPDATE albums SET name = '  ' WHERE id = 2")
            .execute(&pool)
            .await
            .unwrap();

        let repo = SqliteCorpusRepository::from_pool(pool);
        let err = repo.all_records().await.unwrap_err();
        assert!(err.is_corrupt(), "got {:?}", err);
        assert!(err.to_string().contains("empty album name"));
    }

    #[tokio::test]
    async fn test_undecodable_row_is_corrupt() {
        let pool = create_test_pool().await.unwrap();
        sqlx::query("DROP VIEW lyrics_with_song_info")
            .execute(&pool)
            .await
            .unwrap();
        // Same columns, but lyric_text is NULL.
        sqlx::query(
            r#"
            CREATE VIEW lyrics_with_song_info AS
            SELECT 1 AS lyric_id, 1 AS line_number, NULL AS lyric_text, 1 AS song_id,
                   'Song' AS song_name, 1 AS song_number, 1 AS album_id, 'Album' AS album_name
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let repo = SqliteCorpusRepository::from_pool(pool);
        let err = repo.all_records().await.unwrap_err();
        assert!(err.is_corrupt(), "got {:?}", err);
        assert!(err.to_string().contains("lyric_text"));
    }
}
