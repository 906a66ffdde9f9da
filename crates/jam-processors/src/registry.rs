//! Ordered processor dispatch.

use std::fmt;

use log::debug;

use crate::{ContentProcessor, Extension, PassthroughProcessor};

/// An ordered list of content processors with a mandatory fallback.
///
/// Processors are consulted in registration order; the first whose
/// [`claims`](ContentProcessor::claims) returns `true` handles the file. The
/// [`PassthroughProcessor`] is held apart from the list and consulted last,
/// so it can neither be removed nor shadow a specialized processor.
///
/// A registry is built explicitly for each extraction run and passed to the
/// extractor.
///
/// # Example
///
/// ```
/// use jam_processors::{Extension, PassthroughProcessor, ProcessorRegistry};
///
/// let registry = ProcessorRegistry::builder()
///     .register(PassthroughProcessor)
///     .build();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.resolve(&Extension::new(".gdb")).name(), "passthrough");
/// ```
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn ContentProcessor>>,
    fallback: PassthroughProcessor,
}

impl ProcessorRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Find the processor for an extension.
    ///
    /// Always returns a processor: the passthrough handles anything nothing
    /// else claims.
    pub fn resolve(&self, extension: &Extension) -> &dyn ContentProcessor {
        let processor = self
            .processors
            .iter()
            .find(|p| p.claims(extension))
            .map(|p| p.as_ref())
            .unwrap_or(&self.fallback);

        debug!("Dispatching {:?} to {}", extension.as_str(), processor.name());
        processor
    }

    /// Number of processors, including the fallback.
    #[inline]
    pub fn len(&self) -> usize {
        self.processors.len() + 1
    }

    /// Always `false`; a registry holds at least the fallback.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Processor names in dispatch order, fallback last.
    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors
            .iter()
            .map(|p| p.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }
}

impl Default for ProcessorRegistry {
    /// A registry that copies every file unmodified.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("processors", &self.processor_names())
            .finish()
    }
}

/// Builder for [`ProcessorRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    processors: Vec<Box<dyn ContentProcessor>>,
}

impl RegistryBuilder {
    /// Append a processor; earlier registrations take priority.
    pub fn register<P: ContentProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Append an already boxed processor.
    pub fn register_boxed(mut self, processor: Box<dyn ContentProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    /// Finish the registry, placing the passthrough last.
    pub fn build(self) -> ProcessorRegistry {
        ProcessorRegistry {
            processors: self.processors,
            fallback: PassthroughProcessor,
        }
    }
}
