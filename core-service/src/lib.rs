//! Core service façade and bootstrap helpers.
//!
//! This crate wires a validated [`CoreConfig`] into a running
//! [`LyricsService`]: it opens the corpus database read-only, picks the corpus
//! store searches run against (preloaded snapshot, per-request database scan,
//! or a JSON artifact), and exposes the search contract plus the song and
//! album pages built on top of it.
//!
//! ```ignore
//! use core_runtime::CoreConfig;
//! use core_search::SearchOptions;
//!
//! let config = CoreConfig::builder().database_path("lyrics.db").build()?;
//! let service = core_service::bootstrap(config).await?;
//!
//! match service.search("cold", SearchOptions::exact_word()).await? {
//!     None => {}                        // empty query, nothing searched
//!     Some(records) if records.is_empty() => {} // no results
//!     Some(records) => { /* render */ }
//! }
//!
//! service.close().await?;
//! ```

pub mod error;
pub mod views;

pub use error::{CoreError, Result};
pub use views::{AlbumView, Excerpt, SongLine, SongView};

use std::sync::Arc;

use bridge_traits::database::{DatabaseAdapter, DatabaseStatistics};
use core_library::adapters::SqliteAdapter;
use core_library::repositories::{
    AlbumRepository, SongRepository, SqliteAlbumRepository, SqliteCorpusRepository,
    SqliteSongRepository,
};
use core_library::{CorpusSnapshot, CorpusStore, LyricRecord};
use core_runtime::config::{CoreConfig, CorpusLoading, DEFAULT_MAX_QUERY_LENGTH};
use core_runtime::logging::truncate_for_log;
use core_search::{SearchEngine, SearchOptions, SearchOutcome};
use tracing::{debug, info, instrument, warn};

/// Aggregated handle to the stores the service reads from.
pub struct CoreDependencies {
    /// Store searches scan
    pub corpus: Arc<dyn CorpusStore>,
    pub database: Option<Arc<dyn DatabaseAdapter>>,
    pub albums: Option<Arc<dyn AlbumRepository>>,
    pub songs: Option<Arc<dyn SongRepository>>,
}

impl CoreDependencies {
    /// Dependencies with a corpus store only; page lookups are unavailable.
    pub fn new(corpus: Arc<dyn CorpusStore>) -> Self {
        Self {
            corpus,
            database: None,
            albums: None,
            songs: None,
        }
    }

    /// Attach an open database for page lookups, statistics and shutdown.
    pub fn with_database(mut self, adapter: Arc<SqliteAdapter>) -> Self {
        let pool = adapter.pool().clone();
        self.albums = Some(Arc::new(SqliteAlbumRepository::new(pool.clone())));
        self.songs = Some(Arc::new(SqliteSongRepository::new(pool)));
        self.database = Some(adapter);
        self
    }
}

/// Corpus size and pool state
#[derive(Debug, Clone)]
pub struct CorpusStatistics {
    pub records: i64,
    pub database: Option<DatabaseStatistics>,
}

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct LyricsService {
    deps: Arc<CoreDependencies>,
    engine: Arc<SearchEngine>,
    default_options: SearchOptions,
}

impl LyricsService {
    /// Create a new service from the provided dependencies.
    pub fn new(deps: CoreDependencies) -> Self {
        Self::with_limits(deps, SearchOptions::default(), DEFAULT_MAX_QUERY_LENGTH)
    }

    pub fn with_limits(
        deps: CoreDependencies,
        default_options: SearchOptions,
        max_query_length: usize,
    ) -> Self {
        let engine = SearchEngine::new(Arc::clone(&deps.corpus))
            .with_max_query_length(max_query_length);

        Self {
            deps: Arc::new(deps),
            engine: Arc::new(engine),
            default_options,
        }
    }

    /// Access the dependencies being used by the service.
    pub fn dependencies(&self) -> Arc<CoreDependencies> {
        Arc::clone(&self.deps)
    }

    pub fn default_options(&self) -> SearchOptions {
        self.default_options
    }

    /// Search the corpus
    ///
    /// `Ok(None)` means the query was empty and no search ran. `Ok(Some(v))`
    /// holds every match in `(album_id, song_number, line_number)` order and
    /// may be empty. Storage failures are never turned into empty results.
    pub async fn search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Option<Vec<LyricRecord>>> {
        debug!(query = %truncate_for_log(query), "Search requested");
        let results = self.engine.search(query, options).await?;
        Ok(results)
    }

    /// [`search`](Self::search) with the configured default options
    pub async fn search_with_defaults(&self, query: &str) -> Result<Option<Vec<LyricRecord>>> {
        self.search(query, self.default_options).await
    }

    pub async fn search_outcome(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<SearchOutcome> {
        Ok(self.search(query, options).await?.into())
    }

    /// Song page data
    ///
    /// Returns `Ok(None)` for an unknown song. `highlight` is kept only if it
    /// names one of the song's lines. Every line is split into segments
    /// around `query`.
    #[instrument(skip(self, query))]
    pub async fn song_page(
        &self,
        song_id: i64,
        highlight: Option<i64>,
        query: Option<&str>,
    ) -> Result<Option<SongView>> {
        let songs = self.deps.songs.as_ref().ok_or_else(|| database_missing("song pages"))?;

        let (song, lyrics) = songs.find_with_lyrics(song_id).await?;
        let Some(song) = song else {
            debug!("Song not found");
            return Ok(None);
        };

        let view = SongView::new(song, lyrics, highlight, query);
        if highlight.is_some() && view.highlight_id.is_none() {
            debug!(?highlight, "Highlight does not belong to song; ignored");
        }
        Ok(Some(view))
    }

    /// Album page data; `Ok(None)` for an unknown album
    #[instrument(skip(self))]
    pub async fn album_page(&self, album_id: i64) -> Result<Option<AlbumView>> {
        let albums = self
            .deps
            .albums
            .as_ref()
            .ok_or_else(|| database_missing("album pages"))?;

        let (album, songs) = albums.find_with_songs(album_id).await?;
        Ok(album.map(|album| AlbumView { album, songs }))
    }

    pub async fn statistics(&self) -> Result<CorpusStatistics> {
        let records = self.deps.corpus.count().await?;
        let database = match &self.deps.database {
            Some(adapter) => Some(adapter.get_statistics().await?),
            None => None,
        };

        Ok(CorpusStatistics { records, database })
    }

    /// Release the database pool. Searches served from a snapshot keep
    /// working; database-backed calls fail as unavailable afterwards.
    pub async fn close(&self) -> Result<()> {
        if let Some(adapter) = &self.deps.database {
            adapter.close().await?;
        }
        Ok(())
    }
}

fn database_missing(feature: &str) -> CoreError {
    CoreError::CapabilityMissing {
        capability: "database".to_string(),
        message: format!(
            "{} need the corpus database. Use .database_path() to configure it.",
            feature
        ),
    }
}

/// Build a [`LyricsService`] from configuration.
///
/// Opens the database (if configured) and loads the corpus store searches
/// run against. If loading fails after the pool is open, the pool is closed
/// before the error is returned.
pub async fn bootstrap(config: CoreConfig) -> Result<LyricsService> {
    config.validate()?;

    let adapter = match config.database_config() {
        Some(db_config) => Some(Arc::new(SqliteAdapter::connect(&db_config).await?)),
        None => None,
    };

    let corpus = match load_corpus(&config, adapter.as_ref()).await {
        Ok(corpus) => corpus,
        Err(err) => {
            if let Some(adapter) = &adapter {
                if let Err(close_err) = adapter.close().await {
                    warn!(error = %close_err, "Failed to close corpus pool after load error");
                }
            }
            return Err(err);
        }
    };

    let mut deps = CoreDependencies::new(corpus);
    if let Some(adapter) = adapter {
        deps = deps.with_database(adapter);
    }

    info!(
        database = config.database_path.is_some(),
        snapshot = config.snapshot_path.is_some(),
        loading = ?config.corpus_loading,
        "Lyrics service ready"
    );

    Ok(LyricsService::with_limits(
        deps,
        config.default_search_options,
        config.max_query_length,
    ))
}

async fn load_corpus(
    config: &CoreConfig,
    adapter: Option<&Arc<SqliteAdapter>>,
) -> Result<Arc<dyn CorpusStore>> {
    if let Some(path) = &config.snapshot_path {
        let snapshot = CorpusSnapshot::load_json_file(path).await?;
        return Ok(Arc::new(snapshot));
    }

    let adapter = adapter.ok_or_else(|| {
        CoreError::InitializationFailed("No corpus source configured".to_string())
    })?;
    let repository = SqliteCorpusRepository::new(Arc::clone(adapter) as Arc<dyn DatabaseAdapter>);

    match config.corpus_loading {
        CorpusLoading::Preload => {
            let snapshot = CorpusSnapshot::load_from(&repository).await?;
            info!(records = snapshot.len(), "Preloaded corpus");
            Ok(Arc::new(snapshot))
        }
        CorpusLoading::PerRequest => Ok(Arc::new(repository)),
    }
}
