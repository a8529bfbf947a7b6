//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum KvError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to perform a store operation.
    #[error("Store operation failed: {0}")]
    Backend(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
