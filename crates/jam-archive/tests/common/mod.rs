//! Shared helpers for the integration tests: an in-memory archive builder
//! and filesystem fixtures.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use jam_archive::{DirectoryRecord, FileRecord, JAM_MAGIC, NAME_CAPACITY};
use tempfile::TempDir;
use walkdir::WalkDir;
use zerocopy::IntoBytes;

/// A directory tree to serialize into an archive.
#[derive(Debug, Clone, Default)]
pub struct TestDir {
    name: Vec<u8>,
    files: Vec<(Vec<u8>, Vec<u8>)>,
    dirs: Vec<TestDir>,
}

impl TestDir {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.as_bytes().to_vec(),
            ..Self::default()
        }
    }

    pub fn file(mut self, name: &str, data: &[u8]) -> Self {
        self.files.push((name.as_bytes().to_vec(), data.to_vec()));
        self
    }

    pub fn dir(mut self, dir: TestDir) -> Self {
        self.dirs.push(dir);
        self
    }
}

/// Serialize a tree: magic, then directory tables in pre-order, then all
/// file contents.
pub fn build_archive(root: &TestDir) -> Vec<u8> {
    let mut out = JAM_MAGIC.to_vec();
    let mut pending = Vec::new();
    emit_directory(root, &mut out, &mut pending);

    for (slot, data) in pending {
        let offset = out.len() as u32;
        out[slot..slot + 4].copy_from_slice(&offset.to_le_bytes());
        out.extend_from_slice(&data);
    }
    out
}

fn emit_directory(dir: &TestDir, out: &mut Vec<u8>, pending: &mut Vec<(usize, Vec<u8>)>) {
    out.extend_from_slice(&(dir.files.len() as u32).to_le_bytes());
    for (name, data) in &dir.files {
        let slot = out.len() + NAME_CAPACITY;
        out.extend_from_slice(FileRecord::new(name, 0, data.len() as u32).as_bytes());
        if !data.is_empty() {
            pending.push((slot, data.clone()));
        }
    }

    out.extend_from_slice(&(dir.dirs.len() as u32).to_le_bytes());
    let mut slots = Vec::with_capacity(dir.dirs.len());
    for sub in &dir.dirs {
        slots.push(out.len() + NAME_CAPACITY);
        out.extend_from_slice(DirectoryRecord::new(&sub.name, 0).as_bytes());
    }

    for (sub, slot) in dir.dirs.iter().zip(slots) {
        let offset = out.len() as u32;
        out[slot..slot + 4].copy_from_slice(&offset.to_le_bytes());
        emit_directory(sub, out, pending);
    }
}

/// An archive written to a temporary folder next to an output directory.
pub struct Fixture {
    pub temp: TempDir,
    pub archive: PathBuf,
    pub output: PathBuf,
}

impl Fixture {
    pub fn new(bytes: &[u8]) -> Self {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("LEGO.JAM");
        fs::write(&archive, bytes).unwrap();

        let output = temp.path().join("out");
        fs::create_dir(&output).unwrap();

        Self {
            temp,
            archive,
            output,
        }
    }

    /// Where the driver puts the extracted tree.
    pub fn dump_folder(&self) -> PathBuf {
        self.temp.path().join("LEGO")
    }
}

/// Every file below `root`, keyed by its `/`-joined relative path.
pub fn collect_files(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap();
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            (key, fs::read(entry.path()).unwrap())
        })
        .collect()
}

/// Magic plus a root listing with no files and a single subdirectory record.
pub fn archive_with_root_subdirectory(name: &[u8], data_offset: u32) -> Vec<u8> {
    let mut out = JAM_MAGIC.to_vec();
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(DirectoryRecord::new(name, data_offset).as_bytes());
    out
}
