use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    /// The corpus could not be read at all (missing file, closed pool, I/O).
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The corpus was reachable but its contents are unusable.
    #[error("Corpus corrupt: {0}")]
    CorpusCorrupt(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}

impl LibraryError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LibraryError::StorageUnavailable(_))
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, LibraryError::CorpusCorrupt(_))
    }
}

impl From<sqlx::Error> for LibraryError {
    fn from(err: sqlx::Error) -> Self {
        if is_unavailable(&err) {
            LibraryError::StorageUnavailable(err.to_string())
        } else {
            LibraryError::CorpusCorrupt(err.to_string())
        }
    }
}

impl From<BridgeError> for LibraryError {
    fn from(err: BridgeError) -> Self {
        if err.is_unavailable() {
            LibraryError::StorageUnavailable(err.to_string())
        } else {
            LibraryError::CorpusCorrupt(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::CorpusCorrupt(format!("Snapshot decode failed: {}", err))
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::StorageUnavailable(err.to_string())
    }
}

/// SQLite primary result code for "unable to open database file".
const SQLITE_CANTOPEN: i32 = 14;

/// Classify a driver error as "storage unreachable".
///
/// Anything not listed here (schema errors, decode failures, missing columns)
/// means the storage answered but the corpus is malformed.
pub(crate) fn is_unavailable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .and_then(|code| code.parse::<i32>().ok())
            .map(|code| code & 0xff == SQLITE_CANTOPEN)
            .unwrap_or(false),
        _ => false,
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
