/// Shape rendering: one drawable to one `p:sp` element.
///
/// Ids are handed in by the caller. Within a slide the group shape owns
/// [`GROUP_SHAPE_ID`] and drawable `i` gets `FIRST_SHAPE_ID + i`, whatever its kind.
use super::model::{Drawable, HexColor, LineStyle, SOFT_BREAK, TextStyle, Theme};
use crate::common::unit::{inches_to_emu, pt_to_hundredths};
use crate::common::xml::XmlNode;

/// Id of the shape tree's own group shape
pub const GROUP_SHAPE_ID: u32 = 1;

/// Id of the first drawable on a slide
pub const FIRST_SHAPE_ID: u32 = 2;

/// Thickness of a line drawn without an explicit height
pub const HAIRLINE_INCHES: f64 = 0.02;

pub const DEFAULT_FONT_SIZE_PT: f64 = 18.0;

/// Text color when the style names none
pub const DEFAULT_TEXT_COLOR: &str = "000000";

/// Line fill when the style names none (theme accent1)
pub const DEFAULT_LINE_COLOR: &str = "2B6CB0";

/// Render `drawable` as a shape carrying the given id.
///
/// # Arguments
///
/// * `drawable` - Validated drawable
/// * `id` - Non-visual id, unique within the slide
/// * `theme` - Supplies the fallback typeface and the run language
pub fn render_shape(drawable: &Drawable, id: u32, theme: &Theme) -> XmlNode {
    match drawable {
        Drawable::Text { text, style } => render_text(text, style, id, theme),
        Drawable::Line { style } => render_line(style, id),
    }
}

/// Ids assigned to `count` drawables in z-order.
pub fn shape_ids(count: usize) -> impl Iterator<Item = u32> {
    (FIRST_SHAPE_ID..).take(count)
}

/// The `p:spTree` of a slide, master or layout: the group envelope followed by `shapes`.
pub fn shape_tree(shapes: impl IntoIterator<Item = XmlNode>) -> XmlNode {
    let zero_xfrm = XmlNode::new("a:xfrm")
        .child(XmlNode::new("a:off").attr("x", 0).attr("y", 0))
        .child(XmlNode::new("a:ext").attr("cx", 0).attr("cy", 0))
        .child(XmlNode::new("a:chOff").attr("x", 0).attr("y", 0))
        .child(XmlNode::new("a:chExt").attr("cx", 0).attr("cy", 0));

    XmlNode::new("p:spTree")
        .child(
            XmlNode::new("p:nvGrpSpPr")
                .child(XmlNode::new("p:cNvPr").attr("id", GROUP_SHAPE_ID).attr("name", ""))
                .child(XmlNode::new("p:cNvGrpSpPr"))
                .child(XmlNode::new("p:nvPr")),
        )
        .child(XmlNode::new("p:grpSpPr").child(zero_xfrm))
        .children(shapes)
}

/// `a:solidFill` with an sRGB color.
pub fn solid_fill(color: &str) -> XmlNode {
    XmlNode::new("a:solidFill").child(XmlNode::new("a:srgbClr").attr("val", color))
}

fn render_text(text: &str, style: &TextStyle, id: u32, theme: &Theme) -> XmlNode {
    let size = pt_to_hundredths(style.font_size.unwrap_or(DEFAULT_FONT_SIZE_PT));
    let color = style.color.as_ref().map_or(DEFAULT_TEXT_COLOR, HexColor::as_str);
    let typeface = style.font_face.as_deref().unwrap_or_else(|| theme.body_font());

    let paragraphs = text.split(['\n', SOFT_BREAK]).map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        XmlNode::new("a:p").child(
            XmlNode::new("a:r")
                .child(
                    XmlNode::new("a:rPr")
                        .attr("lang", &theme.lang)
                        .attr("sz", size)
                        .attr("b", if style.bold { 1 } else { 0 })
                        .child(solid_fill(color))
                        .child(XmlNode::new("a:latin").attr("typeface", typeface)),
                )
                .child(XmlNode::new("a:t").text(line)),
        )
    });

    XmlNode::new("p:sp")
        .child(non_visual(id, format!("Text {}", id), true))
        .child(
            XmlNode::new("p:spPr")
                .child(transform(style.x, style.y, style.w, style.h))
                .child(rect_geometry())
                .child(XmlNode::new("a:noFill")),
        )
        .child(
            XmlNode::new("p:txBody")
                .child(
                    XmlNode::new("a:bodyPr")
                        .attr("wrap", "square")
                        .attr("anchor", style.valign.anchor()),
                )
                .child(XmlNode::new("a:lstStyle"))
                .children(paragraphs),
        )
}

fn render_line(style: &LineStyle, id: u32) -> XmlNode {
    let height = match style.h {
        Some(h) if h > 0.0 => h,
        _ => HAIRLINE_INCHES,
    };
    let color = style.color.as_ref().map_or(DEFAULT_LINE_COLOR, HexColor::as_str);

    XmlNode::new("p:sp")
        .child(non_visual(id, format!("Line {}", id), false))
        .child(
            XmlNode::new("p:spPr")
                .child(transform(style.x, style.y, style.w, height))
                .child(rect_geometry())
                .child(solid_fill(color))
                .child(
                    XmlNode::new("a:ln")
                        .attr("w", 0)
                        .child(XmlNode::new("a:noFill")),
                ),
        )
}

fn non_visual(id: u32, name: String, text_box: bool) -> XmlNode {
    XmlNode::new("p:nvSpPr")
        .child(XmlNode::new("p:cNvPr").attr("id", id).attr("name", name))
        .child(XmlNode::new("p:cNvSpPr").attr_opt("txBox", text_box.then_some(1)))
        .child(XmlNode::new("p:nvPr"))
}

fn transform(x: f64, y: f64, w: f64, h: f64) -> XmlNode {
    XmlNode::new("a:xfrm")
        .child(
            XmlNode::new("a:off")
                .attr("x", inches_to_emu(x))
                .attr("y", inches_to_emu(y)),
        )
        .child(
            XmlNode::new("a:ext")
                .attr("cx", inches_to_emu(w))
                .attr("cy", inches_to_emu(h)),
        )
}

fn rect_geometry() -> XmlNode {
    XmlNode::new("a:prstGeom")
        .attr("prst", "rect")
        .child(XmlNode::new("a:avLst"))
}
