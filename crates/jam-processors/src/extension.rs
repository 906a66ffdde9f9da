//! Normalized file extensions used as dispatch keys.

use std::fmt;

/// A file extension normalized for dispatch.
///
/// The extension keeps its leading dot and is upper-cased (ASCII only), so
/// `img.bmp`, `IMG.BMP` and `Img.Bmp` all map to `.BMP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Extension(String);

impl Extension {
    /// Derive the extension from a bare file name.
    ///
    /// The extension starts at the last `.`. A name whose only dot is the
    /// leading one (`.profile`) and a name without any dot have an empty
    /// extension. A trailing dot yields `"."`.
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rfind('.') {
            Some(0) | None => Self::default(),
            Some(pos) => Self::new(&file_name[pos..]),
        }
    }

    /// Normalize an extension given with its leading dot, e.g. `".tdb"`.
    pub fn new(extension: &str) -> Self {
        Self(extension.to_ascii_uppercase())
    }

    /// The normalized extension, including the leading dot.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the file had no extension.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison against an extension literal.
    #[inline]
    pub fn matches(&self, extension: &str) -> bool {
        self.0.eq_ignore_ascii_case(extension)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
