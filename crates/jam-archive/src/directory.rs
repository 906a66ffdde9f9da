//! Directory frames: reading a directory's lists and checking its children.

use std::io::{Read, Seek};

use jam_common::StreamReader;

use crate::error::ListKind;
use crate::records::{DirectoryRecord, FileRecord};
use crate::{Error, Limits, Result};

/// The file and subdirectory lists of one directory, in stored order.
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    pub files: Vec<FileRecord>,
    pub subdirectories: Vec<DirectoryRecord>,
}

/// Read both lists of `directory`.
///
/// The file list starts at the directory's data offset and the subdirectory
/// list follows it immediately. Each count is checked against `limits`
/// before any record is read.
pub fn read_listing<R: Read + Seek>(
    reader: &mut StreamReader<R>,
    directory: &DirectoryRecord,
    path: &str,
    limits: &Limits,
) -> Result<DirectoryListing> {
    reader.seek_to(u64::from(directory.data_offset()))?;

    let file_count = read_count(reader, ListKind::Files, path, limits.max_files)?;
    let mut files = Vec::with_capacity(file_count);
    for _ in 0..file_count {
        files.push(reader.read_record::<FileRecord>()?);
    }

    let subdirectory_count =
        read_count(reader, ListKind::Subdirectories, path, limits.max_subdirectories)?;
    let mut subdirectories = Vec::with_capacity(subdirectory_count);
    for _ in 0..subdirectory_count {
        subdirectories.push(reader.read_record::<DirectoryRecord>()?);
    }

    Ok(DirectoryListing {
        files,
        subdirectories,
    })
}

fn read_count<R: Read + Seek>(
    reader: &mut StreamReader<R>,
    list: ListKind,
    path: &str,
    limit: u32,
) -> Result<usize> {
    let count = reader.read_u32_le()?;
    if count > limit {
        return Err(Error::CountTooLarge {
            list,
            path: path.to_string(),
            count,
            limit,
        });
    }
    Ok(count as usize)
}

/// Check that a subdirectory may be entered from `parent`.
///
/// The child's lists must start at or after the end of one directory record
/// past the parent's data offset. Since offsets only move forward, the walk
/// cannot cycle. `depth` is the child's depth (root = 0).
pub fn check_subdirectory(
    parent: &DirectoryRecord,
    child: &DirectoryRecord,
    child_path: &str,
    depth: usize,
    limits: &Limits,
) -> Result<()> {
    let minimum = u64::from(parent.data_offset()) + DirectoryRecord::SIZE as u64;
    if u64::from(child.data_offset()) < minimum {
        return Err(Error::NonMonotonicOffset {
            path: child_path.to_string(),
            offset: child.data_offset(),
            minimum,
        });
    }

    if depth > limits.max_depth {
        return Err(Error::DepthLimitExceeded {
            path: child_path.to_string(),
            limit: limits.max_depth,
        });
    }

    Ok(())
}

/// Logical path of a child: `parent/name`, or just `name` under the root.
pub fn logical_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Archive-internal path of a file, used only in diagnostics.
///
/// Joined with backslashes regardless of host, so a file in the root renders
/// as `\NAME` and a nested one as `DIR\SUB\NAME`.
pub fn diagnostic_path(directory: &str, file_name: &str) -> String {
    format!("{}\\{}", directory, file_name).replace('/', "\\")
}

/// Check if a name can be joined to a destination folder without escaping it.
pub fn is_safe_entry_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', ':', '\0'])
}
