//! Error types for the persistence layer.

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore) or the cart adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be serialized.
    #[error("Storage encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
