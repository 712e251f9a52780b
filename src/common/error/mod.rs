//! Unified error types for slidepress.
//!
//! Every fallible operation in the crate returns [`Result`], whether the fault
//! comes from the presentation model, the XML writer, the filesystem or the
//! archiver.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
