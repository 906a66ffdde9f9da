//! The extraction driver.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use jam_processors::ProcessorRegistry;
use log::{error, info};

use crate::walker::{ExtractEvent, JamWalker, WalkSummary};
use crate::{Error, Limits};

/// How an extraction run ended.
///
/// The driver never panics and never propagates errors: every failure has
/// already been logged when the outcome is returned.
#[derive(Debug)]
pub enum ExtractOutcome {
    /// The whole tree was walked; individual files may still have failed.
    Completed(WalkSummary),
    /// A fatal error stopped the walk; `summary` covers what was extracted.
    Aborted { error: Error, summary: WalkSummary },
    /// The archive could not be opened.
    OpenFailed(io::Error),
}

impl ExtractOutcome {
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, ExtractOutcome::Completed(_))
    }

    /// Counters of the walk, if it started.
    pub fn summary(&self) -> Option<&WalkSummary> {
        match self {
            ExtractOutcome::Completed(summary) => Some(summary),
            ExtractOutcome::Aborted { summary, .. } => Some(summary),
            ExtractOutcome::OpenFailed(_) => None,
        }
    }
}

/// Destination root for an archive: a sibling of `output_dir` named after the
/// archive's file name without its extension.
///
/// `out/LEGO.JAM` with `output_dir = dumps/run1` yields `dumps/LEGO`.
pub fn dump_folder_for(archive: &Path, output_dir: &Path) -> PathBuf {
    let parent = output_dir.parent().unwrap_or(output_dir);
    let stem = archive
        .file_stem()
        .unwrap_or_else(|| OsStr::new("archive"));
    parent.join(stem)
}

/// Extract `archive` next to `output_dir`, dispatching files through `registry`.
pub fn extract_jam_file(
    archive: &Path,
    output_dir: &Path,
    registry: &ProcessorRegistry,
    limits: &Limits,
) -> ExtractOutcome {
    extract_jam_file_with(archive, output_dir, registry, limits, |_| {})
}

/// Like [`extract_jam_file`], reporting progress to `observer`.
pub fn extract_jam_file_with<F>(
    archive: &Path,
    output_dir: &Path,
    registry: &ProcessorRegistry,
    limits: &Limits,
    mut observer: F,
) -> ExtractOutcome
where
    F: FnMut(&ExtractEvent<'_>),
{
    let file = match File::open(archive) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to open JAM file \"{}\": {}", archive.display(), e);
            return ExtractOutcome::OpenFailed(e);
        }
    };

    let dump_folder = dump_folder_for(archive, output_dir);
    if let Err(source) = fs::create_dir_all(&dump_folder) {
        let error = Error::CreateDirectory {
            path: dump_folder,
            source,
        };
        error!("Failed to dump JAM file: {}", error);
        return ExtractOutcome::Aborted {
            error,
            summary: WalkSummary::default(),
        };
    }

    info!(
        "Dumping JAM file \"{}\" to folder \"{}\"",
        archive.display(),
        dump_folder.display()
    );

    let mut walker = match JamWalker::new(BufReader::new(file), dump_folder, registry) {
        Ok(walker) => walker.with_limits(*limits).with_observer(&mut observer),
        Err(error) => {
            error!("Failed to dump JAM file: {}", error);
            return ExtractOutcome::Aborted {
                error,
                summary: WalkSummary::default(),
            };
        }
    };

    match walker.walk() {
        Ok(summary) => {
            info!(
                "Dumped {} files ({} bytes) in {} directories, {} failed",
                summary.files, summary.bytes_read, summary.directories, summary.failed_files
            );
            ExtractOutcome::Completed(summary)
        }
        Err(error) => {
            error!("Failed to dump JAM file: {}", error);
            ExtractOutcome::Aborted {
                error,
                summary: walker.summary(),
            }
        }
    }
}
