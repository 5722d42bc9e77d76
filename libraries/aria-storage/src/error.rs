/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub(crate) type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
///
/// Internal to the adapter: the `PlaylistStorage` surface is
/// infallible by contract, so these never leave the crate except as
/// log lines.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The stored document is not a JSON object
    #[error("malformed playlist document: {0}")]
    Malformed(String),

    /// Serialization/deserialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
