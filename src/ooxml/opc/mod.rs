//! Open Packaging Conventions (OPC) layer.
//!
//! Part naming, content-type and relationship vocabularies, relationship parts,
//! the content-types manifest and the physical ZIP container.

pub mod archive;
pub mod constants;
pub mod content_types;
pub mod packuri;
pub mod rel;

pub use archive::{Archiver, Compression, ExternalZipArchiver, ZipArchiver};
pub use content_types::ContentTypes;
pub use packuri::PartName;
pub use rel::{Relationship, Relationships};
