//! On-disk record layouts.
//!
//! All integers are little-endian and records are tightly packed. The
//! little-endian field types fix both width and byte order at the layout
//! level, so use sites never reinterpret raw bytes.

use std::borrow::Cow;

use jam_common::{encode_fixed_name, fixed_name, fixed_name_lossy};
use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Archive signature at offset 0.
pub const JAM_MAGIC: [u8; 4] = *b"LJAM";

/// Capacity of the name buffer in both record kinds.
pub const NAME_CAPACITY: usize = 12;

/// Offset of the root directory's lists, immediately after the magic.
pub const ROOT_DATA_OFFSET: u32 = JAM_MAGIC.len() as u32;

/// A subdirectory entry.
///
/// `data_offset` points at the directory's file list, which is followed by
/// its subdirectory list.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DirectoryRecord {
    /// Directory name, zero-padded, not necessarily terminated
    pub name: [u8; NAME_CAPACITY],
    /// Absolute offset of the directory's lists
    pub data_offset: U32,
}

impl DirectoryRecord {
    /// Size of one record on disk.
    pub const SIZE: usize = 16;

    /// Create a record; names longer than the capacity are cut.
    pub fn new(name: &[u8], data_offset: u32) -> Self {
        Self {
            name: encode_fixed_name(name),
            data_offset: U32::new(data_offset),
        }
    }

    /// The synthesized root: empty name, lists right after the magic.
    pub fn root() -> Self {
        Self::new(b"", ROOT_DATA_OFFSET)
    }

    /// Logical name bytes.
    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        fixed_name(&self.name)
    }

    /// Name decoded for paths and diagnostics.
    #[inline]
    pub fn name(&self) -> Cow<'_, str> {
        fixed_name_lossy(&self.name)
    }

    #[inline]
    pub fn data_offset(&self) -> u32 {
        self.data_offset.get()
    }
}

/// A file entry inside a directory's file list.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct FileRecord {
    /// File name, zero-padded, not necessarily terminated
    pub name: [u8; NAME_CAPACITY],
    /// Absolute offset of the raw content
    pub data_offset: U32,
    /// Length of the raw content; zero means an empty file
    pub data_size: U32,
}

impl FileRecord {
    /// Size of one record on disk.
    pub const SIZE: usize = 20;

    /// Create a record; names longer than the capacity are cut.
    pub fn new(name: &[u8], data_offset: u32, data_size: u32) -> Self {
        Self {
            name: encode_fixed_name(name),
            data_offset: U32::new(data_offset),
            data_size: U32::new(data_size),
        }
    }

    /// Logical name bytes.
    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        fixed_name(&self.name)
    }

    /// Name decoded for paths and diagnostics.
    #[inline]
    pub fn name(&self) -> Cow<'_, str> {
        fixed_name_lossy(&self.name)
    }

    #[inline]
    pub fn data_offset(&self) -> u32 {
        self.data_offset.get()
    }

    #[inline]
    pub fn data_size(&self) -> u32 {
        self.data_size.get()
    }
}

const _: () = assert!(std::mem::size_of::<DirectoryRecord>() == DirectoryRecord::SIZE);
const _: () = assert!(std::mem::size_of::<FileRecord>() == FileRecord::SIZE);
