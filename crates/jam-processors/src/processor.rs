//! The content processor contract.

use std::io::Write;

use crate::{Extension, Result};

/// A converter for one family of content types.
///
/// A processor receives the raw bytes of one archived file and writes its
/// on-disk representation to `output`, which is positioned at the start of
/// the freshly created destination file. It may copy, re-encode or convert
/// the bytes into a standard interchange form.
///
/// Failures are reported to the caller, which logs them against
/// `source_path` and moves on to the next file. A failing processor may
/// leave the output empty or partially written.
pub trait ContentProcessor {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Check if this processor handles files with the given extension.
    fn claims(&self, extension: &Extension) -> bool;

    /// Convert `data` and write the result to `output`.
    ///
    /// `source_path` is the archive-internal path of the file and is only
    /// meant for diagnostics.
    fn process(&self, source_path: &str, data: &[u8], output: &mut dyn Write) -> Result<()>;
}
