//! Cache error types.

use thiserror::Error;

/// Errors that can occur when reading or writing a store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the backing store.
    #[error("failed to open store: {0}")]
    Open(String),

    /// Failed to serialize or deserialize a value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The underlying store operation failed.
    #[error("store operation failed: {0}")]
    Store(String),

    /// Filesystem error from a file-backed store.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
