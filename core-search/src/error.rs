use core_library::LibraryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Corpus corrupt: {0}")]
    CorpusCorrupt(String),

    #[error("Query is {length} characters long; the limit is {limit}")]
    QueryTooLong { length: usize, limit: usize },

    /// The escaped word pattern exceeded the regex size limit.
    #[error("Query pattern rejected: {0}")]
    Pattern(String),
}

impl SearchError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SearchError::StorageUnavailable(_))
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, SearchError::CorpusCorrupt(_))
    }
}

impl From<LibraryError> for SearchError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::StorageUnavailable(msg) => SearchError::StorageUnavailable(msg),
            LibraryError::CorpusCorrupt(msg) => SearchError::CorpusCorrupt(msg),
            LibraryError::Migration(msg) => SearchError::CorpusCorrupt(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
