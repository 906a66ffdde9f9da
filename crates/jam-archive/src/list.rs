//! Read-only listing of an archive's tree.

use std::io::{Read, Seek};

use jam_common::StreamReader;

use crate::directory::{check_subdirectory, logical_path, read_listing};
use crate::records::{DirectoryRecord, JAM_MAGIC};
use crate::{Limits, Result};

/// What an [`ArchiveEntry`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory { data_offset: u32 },
    File { data_offset: u32, data_size: u32 },
}

/// One entry of the archive tree, addressed by its logical `/`-joined path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl ArchiveEntry {
    #[inline]
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    /// Raw content size; zero for directories.
    #[inline]
    pub fn size(&self) -> u32 {
        match self.kind {
            EntryKind::File { data_size, .. } => data_size,
            EntryKind::Directory { .. } => 0,
        }
    }
}

/// List every entry of an archive without writing anything.
///
/// Entries come in walk order: a directory's files, then each subdirectory
/// followed by its own contents. The same count, offset and depth checks as
/// extraction apply. The root directory itself is not listed.
pub fn list_entries<R: Read + Seek>(stream: R, limits: &Limits) -> Result<Vec<ArchiveEntry>> {
    let mut reader = StreamReader::new(stream)?;
    reader.expect_magic(&JAM_MAGIC)?;

    let mut entries = Vec::new();
    list_directory(&mut reader, &DirectoryRecord::root(), "", 0, limits, &mut entries)?;
    Ok(entries)
}

fn list_directory<R: Read + Seek>(
    reader: &mut StreamReader<R>,
    directory: &DirectoryRecord,
    path: &str,
    depth: usize,
    limits: &Limits,
    entries: &mut Vec<ArchiveEntry>,
) -> Result<()> {
    let listing = read_listing(reader, directory, path, limits)?;

    entries.extend(listing.files.iter().map(|file| ArchiveEntry {
        path: logical_path(path, &file.name()),
        kind: EntryKind::File {
            data_offset: file.data_offset(),
            data_size: file.data_size(),
        },
    }));

    for subdirectory in &listing.subdirectories {
        let child_path = logical_path(path, &subdirectory.name());
        check_subdirectory(directory, subdirectory, &child_path, depth + 1, limits)?;

        entries.push(ArchiveEntry {
            path: child_path.clone(),
            kind: EntryKind::Directory {
                data_offset: subdirectory.data_offset(),
            },
        });
        list_directory(reader, subdirectory, &child_path, depth + 1, limits, entries)?;
    }

    Ok(())
}
