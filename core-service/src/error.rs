use bridge_traits::BridgeError;
use core_library::LibraryError;
use core_search::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Core initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

impl CoreError {
    /// The corpus could not be read
    pub fn is_unavailable(&self) -> bool {
        match self {
            CoreError::Library(err) => err.is_unavailable(),
            CoreError::Search(err) => err.is_unavailable(),
            CoreError::Bridge(err) => err.is_unavailable(),
            _ => false,
        }
    }

    /// The corpus was read but is malformed
    pub fn is_corrupt(&self) -> bool {
        match self {
            CoreError::Library(err) => err.is_corrupt(),
            CoreError::Search(err) => err.is_corrupt(),
            CoreError::Bridge(err) => !err.is_unavailable(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_looks_through_layers() {
        let err: CoreError = SearchError::StorageUnavailable("closed".to_string()).into();
        assert!(err.is_unavailable());
        assert!(!err.is_corrupt());

        let err: CoreError = LibraryError::CorpusCorrupt("no such table".to_string()).into();
        assert!(err.is_corrupt());

        let err: CoreError = BridgeError::Unavailable("offline".to_string()).into();
        assert!(err.is_unavailable());

        let err: CoreError = core_runtime::Error::Config("bad".to_string()).into();
        assert!(!err.is_unavailable());
        assert!(!err.is_corrupt());
    }
}
