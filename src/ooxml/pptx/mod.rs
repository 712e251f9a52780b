//! PowerPoint (.pptx) package writer.
//!
//! The [`model`] describes a deck; [`shape`] and [`parts`] turn it into XML
//! documents; [`package`] stages those documents and archives them into a
//! `.pptx` file.
//!
//! # Example
//!
//! ```no_run
//! use slidepress::ooxml::pptx::{HexColor, LineStyle, PackageWriter, Presentation, TextStyle};
//!
//! # async fn run() -> slidepress::Result<()> {
//! let mut deck = Presentation::new().with_author("Jane").with_subject("Roadmap");
//! let slide = deck.add_slide();
//! slide.set_background(HexColor::new("F2F2F2")?);
//! slide
//!     .add_line(LineStyle::new().position(0.6, 0.95).width(12.1))?
//!     .add_text("Roadmap", TextStyle::new().position(0.6, 0.2).size(12.1, 0.6).font_size(28.0).bold(true))?;
//!
//! PackageWriter::new().write(&deck, "roadmap.pptx").await?;
//! # Ok(())
//! # }
//! ```
pub mod export;
pub mod model;
pub mod options;
pub mod package;
pub mod parts;
pub mod shape;

pub use export::{encode_base64, sidecar_path, write_base64_sidecar};
pub use model::{
    Drawable, HexColor, LineStyle, Presentation, Slide, TextStyle, Theme, VerticalAlign,
};
pub use options::{ArchiverKind, WriterOptions};
pub use package::{Part, PackageWriter, assemble};
pub use shape::{FIRST_SHAPE_ID, GROUP_SHAPE_ID, render_shape};
