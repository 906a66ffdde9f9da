//! JAM archive reader and extractor.
//!
//! A JAM archive is a 4-byte magic followed by a tree of directories. Each
//! directory is a file list and a subdirectory list, both addressed by
//! absolute offsets into the same stream:
//!
//! - [`FileRecord`] - 12-byte name, data offset, data size
//! - [`DirectoryRecord`] - 12-byte name, offset of the directory's lists
//!
//! The root directory's lists start right after the magic. Subdirectory
//! offsets must always point forward, which is what keeps a hostile archive
//! from sending the walk in circles.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use jam_archive::{extract_jam_file, ExtractOutcome, Limits};
//! use jam_processors::ProcessorRegistry;
//!
//! let registry = ProcessorRegistry::default();
//! let outcome = extract_jam_file(
//!     Path::new("LEGO.JAM"),
//!     Path::new("dumps/out"),
//!     &registry,
//!     &Limits::default(),
//! );
//!
//! if let ExtractOutcome::Completed(summary) = outcome {
//!     println!("{} files extracted", summary.files);
//! }
//! ```

mod directory;
mod error;
mod extract;
mod list;
mod options;
mod records;
mod walker;

pub use directory::{diagnostic_path, is_safe_entry_name, logical_path};
pub use error::{Error, ListKind, Result};
pub use extract::{dump_folder_for, extract_jam_file, extract_jam_file_with, ExtractOutcome};
pub use list::{list_entries, ArchiveEntry, EntryKind};
pub use options::{Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ENTRIES};
pub use records::{DirectoryRecord, FileRecord, JAM_MAGIC, NAME_CAPACITY, ROOT_DATA_OFFSET};
pub use walker::{ExtractEvent, JamWalker, WalkSummary};
