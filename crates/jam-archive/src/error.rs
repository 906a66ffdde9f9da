//! Error types for the JAM archive crate.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which list of a directory a count belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Files,
    Subdirectories,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Files => f.write_str("files"),
            ListKind::Subdirectories => f.write_str("subdirectories"),
        }
    }
}

/// Errors that can occur when reading or extracting JAM archives.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error (bad magic, truncated reads).
    #[error("{0}")]
    Common(#[from] jam_common::Error),

    /// A directory lists more entries than the configured bound.
    #[error("too many {list} in \"{path}\": {count} exceeds the limit of {limit}")]
    CountTooLarge {
        list: ListKind,
        path: String,
        count: u32,
        limit: u32,
    },

    /// A subdirectory does not point past its parent's record.
    #[error("subdirectory \"{path}\" does not follow its parent: offset {offset} is below {minimum}")]
    NonMonotonicOffset {
        path: String,
        offset: u32,
        minimum: u64,
    },

    /// Directory nesting exceeds the configured bound.
    #[error("directory \"{path}\" exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { path: String, limit: usize },

    /// A subdirectory name would escape its destination folder.
    #[error("unsafe entry name {name:?} in \"{parent}\"")]
    UnsafeName { parent: String, name: String },

    /// A file name would escape its destination folder; the file is skipped.
    #[error("skipping file with unsafe name \"{path}\"")]
    UnsafeFileName { path: String },

    /// A destination folder could not be created.
    #[error("could not create folder \"{}\": {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A destination file could not be opened for writing.
    #[error("could not open file for output: \"{path}\": {source}")]
    OutputOpenFailed {
        path: String,
        source: std::io::Error,
    },

    /// A content processor failed on one file.
    #[error("failed to dump JAM file \"{path}\" with {processor}: {source}")]
    ProcessorFailed {
        path: String,
        processor: &'static str,
        source: jam_processors::Error,
    },
}

impl Error {
    /// Check if this error aborts the whole extraction.
    ///
    /// Non-fatal errors concern a single file and extraction continues with
    /// its siblings.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::UnsafeFileName { .. }
                | Error::OutputOpenFailed { .. }
                | Error::ProcessorFailed { .. }
        )
    }
}

/// Result type for JAM archive operations.
pub type Result<T> = std::result::Result<T, Error>;
