//! The catch-all processor.

use std::io::Write;

use crate::{ContentProcessor, Extension, Result};

/// Writes file contents unmodified.
///
/// Claims every extension, so it only makes sense as the last processor in
/// dispatch order. [`ProcessorRegistry`](crate::ProcessorRegistry) keeps it
/// there.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughProcessor;

impl ContentProcessor for PassthroughProcessor {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn claims(&self, _extension: &Extension) -> bool {
        true
    }

    fn process(&self, _source_path: &str, data: &[u8], output: &mut dyn Write) -> Result<()> {
        output.write_all(data)?;
        Ok(())
    }
}
