//! Jamtool - extraction library for LEGO JAM archives.
//!
//! This crate provides a unified interface to the jamtool crates.
//!
//! # Crates
//!
//! - [`jam_common`] - Strict stream reading and fixed-width names
//! - [`jam_processors`] - Content processors and extension dispatch
//! - [`jam_archive`] - JAM records, tree walking and the extraction driver
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use jamtool::prelude::*;
//!
//! let registry = ProcessorRegistry::default();
//! let outcome = extract_jam_file(
//!     Path::new("LEGO.JAM"),
//!     Path::new("dump/out"),
//!     &registry,
//!     &Limits::default(),
//! );
//!
//! if let ExtractOutcome::Completed(summary) = outcome {
//!     println!("Files: {}", summary.files);
//! }
//! ```

pub use jam_archive as archive;
pub use jam_common as common;
pub use jam_processors as processors;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use jam_archive::{
        extract_jam_file, extract_jam_file_with, list_entries, ArchiveEntry, EntryKind,
        ExtractEvent, ExtractOutcome, JamWalker, Limits, WalkSummary,
    };
    pub use jam_common::StreamReader;
    pub use jam_processors::{ContentProcessor, Extension, PassthroughProcessor, ProcessorRegistry};
}

pub use jam_archive::{extract_jam_file, ExtractOutcome};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
