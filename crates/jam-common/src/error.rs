//! Error types for jam-common.

use thiserror::Error;

/// Common error type for jamtool operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream ended before a record, count or blob was fully read.
    #[error("truncated read at offset {offset}: needed {needed} bytes but only {available} available")]
    TruncatedRead {
        offset: u64,
        needed: u64,
        available: u64,
    },

    /// Invalid magic bytes encountered.
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic {
        expected: Vec<u8>,
        actual: Vec<u8>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
