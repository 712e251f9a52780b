//! Office Open XML (OOXML) package writing.
//!
//! 1. **OPC Layer** (`opc`): part names, relationships, content types and the ZIP container
//! 2. **PresentationML** (`pptx`): the deck model and the presentation part builders
pub mod opc;
pub mod pptx;

pub use opc::{Archiver, PartName};
