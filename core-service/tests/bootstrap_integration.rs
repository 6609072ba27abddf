//! End-to-end tests: configuration → bootstrap → search and pages

use bridge_traits::database::DatabaseConfig;
use core_library::db::{create_pool, run_migrations};
use core_library::testing::{fixture_lyric_id, sample_corpus, seed_corpus};
use core_library::{CorpusStore, LyricRecord};
use core_runtime::config::{CoreConfig, CorpusLoading};
use core_search::{SearchOptions, SearchOutcome};
use core_service::{bootstrap, CoreError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write the sample corpus to a SQLite file and return its path
async fn corpus_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("lyrics.db");
    let config = DatabaseConfig {
        read_only: false,
        ..DatabaseConfig::new(&path)
    };

    let pool = create_pool(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    seed_corpus(&pool, &sample_corpus()).await.unwrap();
    pool.close().await;

    path
}

fn config_for(path: &Path, loading: CorpusLoading) -> CoreConfig {
    CoreConfig::builder()
        .database_path(path)
        .corpus_loading(loading)
        .max_connections(2)
        .build()
        .unwrap()
}

fn ids(records: &[LyricRecord]) -> Vec<i64> {
    records.iter().map(|r| r.lyric_id).collect()
}

#[tokio::test]
async fn both_loading_modes_answer_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = corpus_file(&dir).await;

    let preload = bootstrap(config_for(&path, CorpusLoading::Preload))
        .await
        .unwrap();
    let per_request = bootstrap(config_for(&path, CorpusLoading::PerRequest))
        .await
        .unwrap();

    for query in ["hello", "cold", "a.b*c", "the", "nothing here"] {
        for options in [
            SearchOptions::default(),
            SearchOptions::case_sensitive(),
            SearchOptions::exact_word(),
        ] {
            assert_eq!(
                preload.search(query, options).await.unwrap(),
                per_request.search(query, options).await.unwrap(),
                "{:?} {:?}",
                query,
                options
            );
        }
    }

    preload.close().await.unwrap();
    per_request.close().await.unwrap();
}

#[tokio::test]
async fn preloaded_search_survives_pool_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = corpus_file(&dir).await;

    let service = bootstrap(config_for(&path, CorpusLoading::Preload))
        .await
        .unwrap();
    service.close().await.unwrap();

    let results = service
        .search("cold", SearchOptions::exact_word())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ids(&results), vec![fixture_lyric_id(1, 2), fixture_lyric_id(3, 3)]);

    let err = service.song_page(1, None, None).await.unwrap_err();
    assert!(err.is_unavailable(), "got {:?}", err);
}

#[tokio::test]
async fn per_request_search_fails_after_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = corpus_file(&dir).await;

    let service = bootstrap(config_for(&path, CorpusLoading::PerRequest))
        .await
        .unwrap();
    service.close().await.unwrap();

    let err = service
        .search("cold", SearchOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_unavailable(), "got {:?}", err);

    // The empty query never reaches storage.
    assert!(service
        .search("", SearchOptions::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn missing_database_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("absent.db"), CorpusLoading::Preload);

    let err = bootstrap(config).await.err().unwrap();
    assert!(err.is_unavailable(), "got {:?}", err);
}

#[tokio::test]
async fn database_without_schema_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.db");
    let pool = create_pool(&DatabaseConfig {
        read_only: false,
        ..DatabaseConfig::new(&path)
    })
    .await
    .unwrap();
    sqlx::query("CREATE TABLE unrelated (id INTEGER PRIMARY KEY)")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let err = bootstrap(config_for(&path, CorpusLoading::PerRequest))
        .await
        .err()
        .unwrap();
    assert!(err.is_corrupt(), "got {:?}", err);
}

#[tokio::test]
async fn invalid_records_are_corrupt_in_both_loading_modes() {
    let dir = tempfile::tempdir().unwrap();
    let path = corpus_file(&dir).await;

    let pool = create_pool(&DatabaseConfig {
        read_only: false,
        ..DatabaseConfig::new(&path)
    })
    .await
    .unwrap();
    sqlx::query("UPDATE songs SET name = '' WHERE id = 4")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let err = bootstrap(config_for(&path, CorpusLoading::Preload))
        .await
        .err()
        .unwrap();
    assert!(err.is_corrupt(), "got {:?}", err);

    let per_request = bootstrap(config_for(&path, CorpusLoading::PerRequest))
        .await
        .unwrap();
    let err = per_request
        .search("hello", SearchOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_corrupt(), "got {:?}", err);
    per_request.close().await.unwrap();
}

#[tokio::test]
async fn snapshot_serves_search_and_database_serves_pages() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = corpus_file(&dir).await;

    // Export the database corpus as a JSON artifact.
    let exporter = bootstrap(config_for(&db_path, CorpusLoading::PerRequest))
        .await
        .unwrap();
    let everything = exporter
        .dependencies()
        .corpus
        .all_records()
        .await
        .unwrap();
    exporter.close().await.unwrap();

    let snapshot_path = dir.path().join("corpus.json");
    std::fs::write(&snapshot_path, serde_json::to_vec(&everything).unwrap()).unwrap();

    let config = CoreConfig::builder()
        .database_path(&db_path)
        .snapshot_path(&snapshot_path)
        .build()
        .unwrap();
    let service = bootstrap(config).await.unwrap();

    let outcome = service
        .search_outcome("Hello", SearchOptions::case_sensitive())
        .await
        .unwrap();
    assert_eq!(outcome.summary().as_deref(), Some("Found 1 result"));

    let record = &outcome.records()[0];
    let page = service
        .song_page(record.song_id, Some(record.lyric_id), Some("Hello"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.highlight_id, Some(record.lyric_id));
    let preview = page.preview();
    assert!(!preview.more_before);
    assert_eq!(preview.lines.len(), 2);

    let album = service.album_page(record.album_id).await.unwrap().unwrap();
    assert_eq!(album.songs.len(), 2);

    let stats = service.statistics().await.unwrap();
    assert_eq!(stats.records, everything.len() as i64);
    assert!(stats.database.is_some());

    service.close().await.unwrap();
}

#[tokio::test]
async fn snapshot_only_service() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot_path = dir.path().join("corpus.json");
    std::fs::write(
        &snapshot_path,
        r#"[{"lyric_id": 1, "line_number": 1, "lyric_text": "I am cold today",
             "song_id": 1, "song_name": "S", "song_number": 1,
             "album_id": 1, "album_name": "A"}]"#,
    )
    .unwrap();

    let config = CoreConfig::builder()
        .snapshot_path(&snapshot_path)
        .default_search_options(SearchOptions::exact_word())
        .build()
        .unwrap();
    let service = bootstrap(config).await.unwrap();

    assert_eq!(
        service.search_with_defaults("col").await.unwrap(),
        Some(vec![])
    );
    assert_eq!(
        service
            .search_outcome("", SearchOptions::default())
            .await
            .unwrap(),
        SearchOutcome::NotSearched
    );

    let err = service.album_page(1).await.unwrap_err();
    assert!(matches!(err, CoreError::CapabilityMissing { .. }));
}

#[tokio::test]
async fn corrupt_snapshot_fails_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot_path = dir.path().join("corpus.json");
    std::fs::write(&snapshot_path, b"[{").unwrap();

    let config = CoreConfig::builder()
        .snapshot_path(&snapshot_path)
        .build()
        .unwrap();
    let err = bootstrap(config).await.err().unwrap();
    assert!(err.is_corrupt(), "got {:?}", err);
}

#[tokio::test]
async fn overlong_query_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = corpus_file(&dir).await;
    let config = CoreConfig::builder()
        .database_path(&path)
        .max_query_length(8)
        .build()
        .unwrap();
    let service = bootstrap(config).await.unwrap();

    let err = service
        .search("a very long query", SearchOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Search(core_search::SearchError::QueryTooLong { .. })
    ));
    service.close().await.unwrap();
}
