//! Common utilities for jamtool.
//!
//! This crate provides the low-level pieces shared by the other jamtool crates:
//!
//! - [`StreamReader`] - exact-length reads of counts and fixed-size records
//!   from a seekable stream
//! - [`fixed_name`] - bounded-length decoding of fixed-capacity name buffers

mod error;
mod name;
mod reader;

pub use error::{Error, Result};
pub use name::{encode_fixed_name, fixed_name, fixed_name_lossy};
pub use reader::StreamReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
