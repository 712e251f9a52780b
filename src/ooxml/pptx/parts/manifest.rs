//! Package-level parts: the content-types manifest and the root relationships.

use crate::common::xml::XmlNode;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{ContentTypes, PartName, Relationships};

/// `[Content_Types].xml` for a deck of `slide_count` slides.
pub fn content_types(slide_count: usize) -> XmlNode {
    let mut types = ContentTypes::new();
    types
        .add_override(PartName::presentation(), ct::PML_PRESENTATION_MAIN)
        .add_override(PartName::slide_master(), ct::PML_SLIDE_MASTER)
        .add_override(PartName::slide_layout(), ct::PML_SLIDE_LAYOUT)
        .add_override(PartName::theme(), ct::OFC_THEME)
        .add_override(PartName::core_properties(), ct::OPC_CORE_PROPERTIES)
        .add_override(PartName::app_properties(), ct::OFC_EXTENDED_PROPERTIES);
    for number in 1..=slide_count {
        types.add_override(PartName::slide(number), ct::PML_SLIDE);
    }
    types.to_xml()
}

/// `_rels/.rels`: the presentation and the two property parts.
pub fn package_rels() -> XmlNode {
    let mut rels = Relationships::for_source(&PartName::package());
    rels.add("rId1", rt::OFFICE_DOCUMENT, &PartName::presentation())
        .add("rId2", rt::CORE_PROPERTIES, &PartName::core_properties())
        .add("rId3", rt::EXTENDED_PROPERTIES, &PartName::app_properties());
    rels.to_xml()
}
