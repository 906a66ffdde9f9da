//! Safety limits for walking untrusted archives.

/// Default bound on the file count and subdirectory count of one directory.
pub const DEFAULT_MAX_ENTRIES: u32 = 100_000;

/// Default bound on directory nesting below the root.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Limits applied while walking an archive.
///
/// These are anti-corruption heuristics rather than properties of the
/// format; a hostile archive is rejected before anything proportional to an
/// oversized count is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of files listed by one directory
    pub max_files: u32,
    /// Maximum number of subdirectories listed by one directory
    pub max_subdirectories: u32,
    /// Maximum nesting depth; the root is depth 0
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_ENTRIES,
            max_subdirectories: DEFAULT_MAX_ENTRIES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    /// Set both per-directory count bounds.
    pub fn with_max_entries(mut self, max_entries: u32) -> Self {
        self.max_files = max_entries;
        self.max_subdirectories = max_entries;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
