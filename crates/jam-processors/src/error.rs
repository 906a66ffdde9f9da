//! Error types for content processors.

use thiserror::Error;

/// Errors a content processor can report.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing the converted output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The raw content does not have the structure the processor expects.
    #[error("malformed content: {0}")]
    Malformed(String),

    /// The content is well-formed but uses a variant the processor cannot convert.
    #[error("unsupported content: {0}")]
    Unsupported(String),
}

/// Result type for processor operations.
pub type Result<T> = std::result::Result<T, Error>;
