//! Slide parts (`ppt/slides/slideN.xml`) and their relationships.

use super::master::solid_background;
use crate::common::xml::XmlNode;
use crate::ooxml::opc::constants::{namespace as ns, relationship_type as rt};
use crate::ooxml::opc::{PartName, Relationships};
use crate::ooxml::pptx::model::{Slide, Theme};
use crate::ooxml::pptx::shape::{render_shape, shape_ids, shape_tree};

/// Build one slide document.
///
/// Drawables are rendered in z-order; the `i`-th one gets id `FIRST_SHAPE_ID + i`.
pub fn slide(slide: &Slide, theme: &Theme) -> XmlNode {
    let shapes = slide
        .drawables()
        .iter()
        .zip(shape_ids(slide.len()))
        .map(|(drawable, id)| render_shape(drawable, id, theme));

    let background = slide.background().map(|color| solid_background(color.as_str()));

    XmlNode::new("p:sld")
        .attr("xmlns:a", ns::DML_MAIN)
        .attr("xmlns:r", ns::OFC_RELATIONSHIPS)
        .attr("xmlns:p", ns::PML_MAIN)
        .child(
            XmlNode::new("p:cSld")
                .child_opt(background)
                .child(shape_tree(shapes)),
        )
        .child(XmlNode::new("p:clrMapOvr").child(XmlNode::new("a:masterClrMapping")))
}

/// Relationships of slide `number` (1-based): `rId1` to the blank layout.
pub fn slide_rels(number: usize) -> XmlNode {
    let mut rels = Relationships::for_source(&PartName::slide(number));
    rels.add("rId1", rt::SLIDE_LAYOUT, &PartName::slide_layout());
    rels.to_xml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::model::{HexColor, LineStyle, TextStyle};

    #[test]
    fn test_ids_follow_drawable_order() {
        let mut content = Slide::new();
        content
            .add_line(LineStyle::new())
            .unwrap()
            .add_text("Title", TextStyle::new())
            .unwrap()
            .add_text("a\nb", TextStyle::new())
            .unwrap();

        let node = slide(&content, &Theme::default());
        let ids: Vec<u32> = node
            .descendants("p:cNvPr")
            .into_iter()
            .filter_map(|n| n.attribute("id"))
            .map(|id| id.parse().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(node.descendants("p:sp").len(), 3);
    }

    #[test]
    fn test_background_is_optional() {
        let mut content = Slide::new();
        assert!(slide(&content, &Theme::default()).descendants("p:bg").is_empty());

        content.set_background(HexColor::new("F2F2F2").unwrap());
        let xml = slide(&content, &Theme::default()).to_document().unwrap();
        assert!(xml.contains(r#"<p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="F2F2F2"/>"#));
        assert!(xml.ends_with("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"));
    }

    #[test]
    fn test_slide_rels_target_layout() {
        let node = slide_rels(7);
        let rel = node.descendants("Relationship")[0];
        assert_eq!(rel.attribute("Id"), Some("rId1"));
        assert_eq!(rel.attribute("Target"), Some("../slideLayouts/slideLayout1.xml"));
    }
}
