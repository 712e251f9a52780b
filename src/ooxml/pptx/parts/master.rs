//! The single slide master and blank slide layout, with their relationships.

use super::presentation::SLIDE_LAYOUT_ID;
use crate::common::xml::XmlNode;
use crate::ooxml::opc::constants::{namespace as ns, relationship_type as rt};
use crate::ooxml::opc::{PartName, Relationships};
use crate::ooxml::pptx::shape::{shape_tree, solid_fill};

/// Color map from master slots to theme slots.
const COLOR_MAP: [(&str, &str); 12] = [
    ("bg1", "lt1"),
    ("tx1", "dk1"),
    ("bg2", "lt2"),
    ("tx2", "dk2"),
    ("accent1", "accent1"),
    ("accent2", "accent2"),
    ("accent3", "accent3"),
    ("accent4", "accent4"),
    ("accent5", "accent5"),
    ("accent6", "accent6"),
    ("hlink", "hlink"),
    ("folHlink", "folHlink"),
];

/// Build `ppt/slideMasters/slideMaster1.xml`.
pub fn slide_master() -> XmlNode {
    let color_map = COLOR_MAP
        .iter()
        .fold(XmlNode::new("p:clrMap"), |node, (slot, theme_slot)| node.attr(*slot, theme_slot));

    XmlNode::new("p:sldMaster")
        .attr("xmlns:a", ns::DML_MAIN)
        .attr("xmlns:r", ns::OFC_RELATIONSHIPS)
        .attr("xmlns:p", ns::PML_MAIN)
        .child(
            XmlNode::new("p:cSld")
                .child(solid_background("FFFFFF"))
                .child(shape_tree(std::iter::empty())),
        )
        .child(color_map)
        .child(
            XmlNode::new("p:sldLayoutIdLst").child(
                XmlNode::new("p:sldLayoutId")
                    .attr("id", SLIDE_LAYOUT_ID)
                    .attr("r:id", "rId1"),
            ),
        )
}

/// Build `ppt/slideMasters/_rels/slideMaster1.xml.rels`: layout, then theme.
pub fn slide_master_rels() -> XmlNode {
    let mut rels = Relationships::for_source(&PartName::slide_master());
    rels.add("rId1", rt::SLIDE_LAYOUT, &PartName::slide_layout())
        .add("rId2", rt::THEME, &PartName::theme());
    rels.to_xml()
}

/// Build `ppt/slideLayouts/slideLayout1.xml`, a blank layout.
pub fn slide_layout() -> XmlNode {
    XmlNode::new("p:sldLayout")
        .attr("xmlns:a", ns::DML_MAIN)
        .attr("xmlns:r", ns::OFC_RELATIONSHIPS)
        .attr("xmlns:p", ns::PML_MAIN)
        .attr("type", "blank")
        .attr("preserve", 1)
        .child(
            XmlNode::new("p:cSld")
                .attr("name", "Blank")
                .child(shape_tree(std::iter::empty())),
        )
        .child(XmlNode::new("p:clrMapOvr").child(XmlNode::new("a:masterClrMapping")))
}

/// Build `ppt/slideLayouts/_rels/slideLayout1.xml.rels`, pointing back at the master.
pub fn slide_layout_rels() -> XmlNode {
    let mut rels = Relationships::for_source(&PartName::slide_layout());
    rels.add("rId1", rt::SLIDE_MASTER, &PartName::slide_master());
    rels.to_xml()
}

/// `p:bg` with a solid fill, shared by the master and colored slides.
pub(crate) fn solid_background(color: &str) -> XmlNode {
    XmlNode::new("p:bg").child(
        XmlNode::new("p:bgPr")
            .child(solid_fill(color))
            .child(XmlNode::new("a:effectLst")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_structure() {
        let xml = slide_master().to_document().unwrap();
        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#));
        assert!(xml.contains(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1""#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
    }

    #[test]
    fn test_master_rels() {
        let node = slide_master_rels();
        let rels = node.descendants("Relationship");
        assert_eq!(rels[0].attribute("Target"), Some("../slideLayouts/slideLayout1.xml"));
        assert_eq!(rels[1].attribute("Id"), Some("rId2"));
        assert_eq!(rels[1].attribute("Target"), Some("../theme/theme1.xml"));
    }

    #[test]
    fn test_layout_is_blank_and_points_to_master() {
        let layout = slide_layout();
        assert_eq!(layout.attribute("type"), Some("blank"));
        assert_eq!(layout.descendants("a:masterClrMapping").len(), 1);
        assert_eq!(layout.descendants("p:sp").len(), 0);

        let rels = slide_layout_rels();
        let rel = rels.descendants("Relationship")[0];
        assert_eq!(rel.attribute("Type"), Some(rt::SLIDE_MASTER));
        assert_eq!(rel.attribute("Target"), Some("../slideMasters/slideMaster1.xml"));
    }
}
