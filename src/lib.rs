//! Slidepress - a small writer for PowerPoint (.pptx) presentations
//!
//! Build a [`Presentation`] of slides holding text boxes and horizontal rules,
//! then write it as an Office Open XML package that PowerPoint, Keynote and
//! LibreOffice open.
//!
//! # Features
//!
//! - **Typed model**: text and line drawables positioned in inches, validated on insert
//! - **YAML decks**: describe a deck declaratively with [`Presentation::from_yaml_str`]
//! - **Pluggable archiving**: in-process ZIP writer or the external `zip` tool
//! - **Atomic output**: the destination never holds a partial package
//!
//! # Example
//!
//! ```no_run
//! use slidepress::{Presentation, TextStyle};
//!
//! #[tokio::main]
//! async fn main() -> slidepress::Result<()> {
//!     let mut deck = Presentation::new().with_author("Jane").with_subject("Hello");
//!     deck.add_slide().add_text(
//!         "Hello\nWorld",
//!         TextStyle::new().position(0.9, 2.1).size(11.6, 1.2).font_size(22.0),
//!     )?;
//!
//!     let path = slidepress::assemble(&deck, "output/hello.pptx").await?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```

/// Shared building blocks: errors, unit conversion, XML writing
pub mod common;

/// OOXML packaging and the presentation writer
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use ooxml::pptx::{
    ArchiverKind, Drawable, HexColor, LineStyle, PackageWriter, Presentation, Slide, TextStyle,
    Theme, VerticalAlign, WriterOptions, assemble, encode_base64, write_base64_sidecar,
};
