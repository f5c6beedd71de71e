//! Errors raised by key-value backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage is not available on this platform")]
    Unavailable,

    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage backend rejected key '{key}': {message}")]
    Backend { key: String, message: String },
}
