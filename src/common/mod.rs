//! Common types and utilities shared by the package writer.
//!
//! This module holds the leaf building blocks: the unified error type, length
//! unit conversion and the XML escaper/writer.

// Submodule declarations
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use unit::{inches_to_emu, pt_to_hundredths};
pub use xml::{XmlNode, escape_xml};
