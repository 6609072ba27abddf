use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Whether the failure means the storage could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BridgeError::Unavailable(_) | BridgeError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
