/// The presentation part (`ppt/presentation.xml`) and its relationships.
///
/// The presentation relates to the master as `rId1`, so slide relationships start
/// at `rId2`; slide ids start at 256, the lowest value the schema allows.
use crate::common::xml::XmlNode;
use crate::ooxml::opc::constants::{namespace as ns, relationship_type as rt};
use crate::ooxml::opc::rel::r_id;
use crate::ooxml::opc::{PartName, Relationships};

/// `p:sldId/@id` of the first slide
pub const SLIDE_ID_BASE: u32 = 256;

/// Slide `i` (0-based) is related as `rId{i + SLIDE_REL_ID_OFFSET}`
pub const SLIDE_REL_ID_OFFSET: usize = 2;

/// `p:sldMasterId/@id`; master and layout ids share a range starting at 2^31
pub const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// `p:sldLayoutId/@id` of the single layout
pub const SLIDE_LAYOUT_ID: u32 = 2_147_483_649;

/// 13.333" × 7.5" widescreen
pub const SLIDE_WIDTH_EMU: i64 = 12_192_000;
pub const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

pub const NOTES_WIDTH_EMU: i64 = 6_858_000;
pub const NOTES_HEIGHT_EMU: i64 = 9_144_000;

/// Relationship id of the 0-based slide `index`.
#[inline]
pub fn slide_rel_id(index: usize) -> String {
    r_id(index + SLIDE_REL_ID_OFFSET)
}

/// `p:sldId/@id` of the 0-based slide `index`.
#[inline]
pub fn slide_id(index: usize) -> u32 {
    SLIDE_ID_BASE + index as u32
}

/// Build `ppt/presentation.xml`.
pub fn presentation(slide_count: usize) -> XmlNode {
    // No sldIdLst at all for an empty deck.
    let slide_ids = (slide_count > 0).then(|| {
        XmlNode::new("p:sldIdLst").children((0..slide_count).map(|index| {
            XmlNode::new("p:sldId")
                .attr("id", slide_id(index))
                .attr("r:id", slide_rel_id(index))
        }))
    });

    XmlNode::new("p:presentation")
        .attr("xmlns:a", ns::DML_MAIN)
        .attr("xmlns:r", ns::OFC_RELATIONSHIPS)
        .attr("xmlns:p", ns::PML_MAIN)
        .child(
            XmlNode::new("p:sldMasterIdLst").child(
                XmlNode::new("p:sldMasterId")
                    .attr("id", SLIDE_MASTER_ID)
                    .attr("r:id", "rId1"),
            ),
        )
        .child_opt(slide_ids)
        .child(
            XmlNode::new("p:sldSz")
                .attr("cx", SLIDE_WIDTH_EMU)
                .attr("cy", SLIDE_HEIGHT_EMU),
        )
        .child(
            XmlNode::new("p:notesSz")
                .attr("cx", NOTES_WIDTH_EMU)
                .attr("cy", NOTES_HEIGHT_EMU),
        )
}

/// Build `ppt/_rels/presentation.xml.rels`.
pub fn presentation_rels(slide_count: usize) -> XmlNode {
    let mut rels = Relationships::for_source(&PartName::presentation());
    rels.add("rId1", rt::SLIDE_MASTER, &PartName::slide_master());
    for index in 0..slide_count {
        rels.add(slide_rel_id(index), rt::SLIDE, &PartName::slide(index + 1));
    }
    rels.to_xml()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_ids_and_rel_ids() {
        let node = presentation(3);
        let ids = node.descendants("p:sldId");
        assert_eq!(ids.len(), 3);
        for (index, id) in ids.iter().enumerate() {
            assert_eq!(id.attribute("id"), Some((256 + index).to_string().as_str()));
            assert_eq!(id.attribute("r:id"), Some(format!("rId{}", index + 2).as_str()));
        }
    }

    #[test]
    fn test_sizes_and_master() {
        let xml = presentation(1).to_document().unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
        assert!(xml.contains(r#"<p:notesSz cx="6858000" cy="9144000"/>"#));
    }

    #[test]
    fn test_empty_deck_omits_slide_list() {
        let node = presentation(0);
        assert!(node.descendants("p:sldIdLst").is_empty());
        assert_eq!(node.descendants("p:sldSz").len(), 1);
    }

    #[test]
    fn test_rels_agree_with_presentation() {
        let rels = presentation_rels(2);
        let entries = rels.descendants("Relationship");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].attribute("Target"), Some("slideMasters/slideMaster1.xml"));
        assert_eq!(entries[1].attribute("Id"), Some("rId2"));
        assert_eq!(entries[1].attribute("Target"), Some("slides/slide1.xml"));
        assert_eq!(entries[2].attribute("Id"), Some("rId3"));
        assert_eq!(entries[2].attribute("Target"), Some("slides/slide2.xml"));
    }
}
