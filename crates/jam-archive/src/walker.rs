//! Recursive extraction of a JAM archive's directory tree.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

use jam_common::StreamReader;
use jam_processors::{Extension, ProcessorRegistry};
use log::{debug, warn};

use crate::directory::{
    check_subdirectory, diagnostic_path, is_safe_entry_name, logical_path, read_listing,
};
use crate::records::{DirectoryRecord, FileRecord, JAM_MAGIC};
use crate::{Error, Limits, Result};

/// Progress notifications emitted while walking.
#[derive(Debug)]
pub enum ExtractEvent<'e> {
    /// A destination folder exists for this logical path.
    DirectoryCreated { path: &'e str },
    /// A file was written; `path` is the diagnostic source path.
    FileExtracted { path: &'e str, size: u32 },
    /// A file could not be extracted; extraction continues.
    FileFailed { path: &'e str, error: &'e Error },
}

/// Counters describing one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories created, including the root
    pub directories: usize,
    /// Files written successfully, including empty ones
    pub files: usize,
    /// Files with zero data size
    pub empty_files: usize,
    /// Files skipped or left incomplete by a non-fatal error
    pub failed_files: usize,
    /// Raw content bytes read from the archive
    pub bytes_read: u64,
}

/// Walks a JAM archive and reconstructs its tree under a dump folder.
///
/// The walker owns the stream cursor for the whole walk. Fatal errors (bad
/// magic, truncated reads, oversized counts, offsets that do not move
/// forward, excessive depth) stop the walk and are returned; per-file
/// failures are logged, counted and reported through the observer.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use jam_archive::JamWalker;
/// use jam_processors::ProcessorRegistry;
///
/// let registry = ProcessorRegistry::default();
/// let file = BufReader::new(File::open("LEGO.JAM")?);
///
/// let mut walker = JamWalker::new(file, "out/LEGO", &registry)?;
/// let summary = walker.walk()?;
/// println!("{} files", summary.files);
/// # Ok::<(), jam_archive::Error>(())
/// ```
pub struct JamWalker<'a, R> {
    reader: StreamReader<R>,
    dump_folder: PathBuf,
    registry: &'a ProcessorRegistry,
    limits: Limits,
    observer: Option<&'a mut dyn FnMut(&ExtractEvent<'_>)>,
    summary: WalkSummary,
}

impl<'a, R: Read + Seek> JamWalker<'a, R> {
    /// Create a walker over `stream` that writes below `dump_folder`.
    pub fn new<P: Into<PathBuf>>(
        stream: R,
        dump_folder: P,
        registry: &'a ProcessorRegistry,
    ) -> Result<Self> {
        Ok(Self {
            reader: StreamReader::new(stream)?,
            dump_folder: dump_folder.into(),
            registry,
            limits: Limits::default(),
            observer: None,
            summary: WalkSummary::default(),
        })
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Receive an [`ExtractEvent`] for every directory and file.
    pub fn with_observer(mut self, observer: &'a mut dyn FnMut(&ExtractEvent<'_>)) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Counters so far; after a failed walk this reflects the partial tree.
    #[inline]
    pub fn summary(&self) -> WalkSummary {
        self.summary
    }

    #[inline]
    pub fn dump_folder(&self) -> &Path {
        &self.dump_folder
    }

    /// Validate the magic and extract the whole tree.
    pub fn walk(&mut self) -> Result<WalkSummary> {
        self.reader.seek_to(0)?;
        self.reader.expect_magic(&JAM_MAGIC)?;

        let root = DirectoryRecord::root();
        let dump_folder = self.dump_folder.clone();
        self.walk_directory(&root, "", &dump_folder, 0)?;

        Ok(self.summary)
    }

    fn walk_directory(
        &mut self,
        directory: &DirectoryRecord,
        path: &str,
        destination: &Path,
        depth: usize,
    ) -> Result<()> {
        fs::create_dir_all(destination).map_err(|source| Error::CreateDirectory {
            path: destination.to_path_buf(),
            source,
        })?;
        self.summary.directories += 1;
        self.notify(&ExtractEvent::DirectoryCreated { path });

        let listing = read_listing(&mut self.reader, directory, path, &self.limits)?;
        debug!(
            "Directory \"{}\" at offset {}: {} files, {} subdirectories",
            path,
            directory.data_offset(),
            listing.files.len(),
            listing.subdirectories.len()
        );

        for file in &listing.files {
            self.extract_file(file, path, destination)?;
        }

        for subdirectory in &listing.subdirectories {
            let name = subdirectory.name();
            let child_path = logical_path(path, &name);

            check_subdirectory(directory, subdirectory, &child_path, depth + 1, &self.limits)?;
            if !is_safe_entry_name(&name) {
                return Err(Error::UnsafeName {
                    parent: path.to_string(),
                    name: name.into_owned(),
                });
            }

            let child_destination = destination.join(name.as_ref());
            self.walk_directory(subdirectory, &child_path, &child_destination, depth + 1)?;
        }

        Ok(())
    }

    /// Extract one file; only fatal errors are returned.
    fn extract_file(&mut self, file: &FileRecord, directory: &str, destination: &Path) -> Result<()> {
        let name = file.name();
        let source_path = diagnostic_path(directory, &name);

        if !is_safe_entry_name(&name) {
            self.report_failure(
                &source_path,
                Error::UnsafeFileName {
                    path: source_path.clone(),
                },
            );
            return Ok(());
        }

        let extension = Extension::from_file_name(&name);
        let output = match File::create(destination.join(name.as_ref())) {
            Ok(output) => output,
            Err(source) => {
                self.report_failure(
                    &source_path,
                    Error::OutputOpenFailed {
                        path: source_path.clone(),
                        source,
                    },
                );
                return Ok(());
            }
        };

        let size = file.data_size();
        if size == 0 {
            self.summary.files += 1;
            self.summary.empty_files += 1;
            self.notify(&ExtractEvent::FileExtracted {
                path: &source_path,
                size,
            });
            return Ok(());
        }

        let data = self
            .reader
            .read_blob(u64::from(file.data_offset()), u64::from(size))?;
        self.summary.bytes_read += u64::from(size);

        let registry = self.registry;
        let processor = registry.resolve(&extension);
        let mut output = BufWriter::new(output);
        let result = processor
            .process(&source_path, &data, &mut output)
            .and_then(|()| output.flush().map_err(jam_processors::Error::from));

        match result {
            Ok(()) => {
                self.summary.files += 1;
                self.notify(&ExtractEvent::FileExtracted {
                    path: &source_path,
                    size,
                });
            }
            Err(source) => self.report_failure(
                &source_path,
                Error::ProcessorFailed {
                    path: source_path.clone(),
                    processor: processor.name(),
                    source,
                },
            ),
        }

        Ok(())
    }

    fn report_failure(&mut self, path: &str, error: Error) {
        warn!("{}", error);
        self.summary.failed_files += 1;
        self.notify(&ExtractEvent::FileFailed {
            path,
            error: &error,
        });
    }

    fn notify(&mut self, event: &ExtractEvent<'_>) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }
}

impl<R> std::fmt::Debug for JamWalker<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JamWalker")
            .field("dump_folder", &self.dump_folder)
            .field("limits", &self.limits)
            .field("summary", &self.summary)
            .finish()
    }
}
