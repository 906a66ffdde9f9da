//! Content processors for files extracted from JAM archives.
//!
//! Every extracted file is handed to exactly one [`ContentProcessor`], chosen
//! by its normalized [`Extension`]. Processors are tried in registration
//! order and the first one that claims the extension wins. A
//! [`PassthroughProcessor`] always sits behind them, so a file with no
//! specialized processor is still written out byte-for-byte.
//!
//! # Example
//!
//! ```
//! use jam_processors::{Extension, ProcessorRegistry};
//!
//! let registry = ProcessorRegistry::default();
//! let processor = registry.resolve(&Extension::from_file_name("MENU.BMP"));
//!
//! let mut output: Vec<u8> = Vec::new();
//! processor.process("\\MENU.BMP", b"raw", &mut output)?;
//! assert_eq!(output, b"raw");
//! # Ok::<(), jam_processors::Error>(())
//! ```

mod error;
mod extension;
mod passthrough;
mod processor;
mod registry;

pub use error::{Error, Result};
pub use extension::Extension;
pub use passthrough::PassthroughProcessor;
pub use processor::ContentProcessor;
pub use registry::{ProcessorRegistry, RegistryBuilder};
