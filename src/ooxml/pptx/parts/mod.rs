/// Part builders for the presentation package.
///
/// Each builder is a pure function from minimal structured input to the root
/// [`XmlNode`](crate::common::xml::XmlNode) of one complete part. Builders assume
/// a validated model.
pub mod manifest;
pub mod master;
pub mod presentation;
pub mod properties;
pub mod slide;
pub mod theme;

pub use manifest::{content_types, package_rels};
pub use master::{slide_layout, slide_layout_rels, slide_master, slide_master_rels};
pub use presentation::{
    NOTES_HEIGHT_EMU, NOTES_WIDTH_EMU, SLIDE_HEIGHT_EMU, SLIDE_ID_BASE, SLIDE_LAYOUT_ID,
    SLIDE_MASTER_ID, SLIDE_REL_ID_OFFSET, SLIDE_WIDTH_EMU, presentation, presentation_rels,
};
pub use properties::{app_properties, core_properties};
pub use slide::{slide, slide_rels};
pub use theme::theme;
