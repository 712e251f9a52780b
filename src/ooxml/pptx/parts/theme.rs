//! The theme part (`ppt/theme/theme1.xml`).
//!
//! Colors are fixed; fonts come from the deck [`Theme`]. The format scheme is the
//! smallest one consumers accept: three entries per list, all painted with the
//! placeholder color.

use crate::common::xml::XmlNode;
use crate::ooxml::opc::constants::namespace as ns;
use crate::ooxml::pptx::model::Theme;

/// The twelve color-scheme slots in schema order.
pub const COLOR_SCHEME: [(&str, &str); 12] = [
    ("dk1", "000000"),
    ("lt1", "FFFFFF"),
    ("dk2", "1F1F1F"),
    ("lt2", "F2F2F2"),
    ("accent1", "2B6CB0"),
    ("accent2", "6366F1"),
    ("accent3", "10B981"),
    ("accent4", "F59E0B"),
    ("accent5", "EF4444"),
    ("accent6", "8B5CF6"),
    ("hlink", "2B6CB0"),
    ("folHlink", "1D4ED8"),
];

/// Build the theme document.
pub fn theme(theme: &Theme) -> XmlNode {
    XmlNode::new("a:theme")
        .attr("xmlns:a", ns::DML_MAIN)
        .attr("name", &theme.name)
        .child(
            XmlNode::new("a:themeElements")
                .child(color_scheme(&theme.name))
                .child(font_scheme(theme))
                .child(format_scheme()),
        )
        .child(XmlNode::new("a:objectDefaults"))
        .child(XmlNode::new("a:extraClrSchemeLst"))
}

fn color_scheme(name: &str) -> XmlNode {
    XmlNode::new("a:clrScheme")
        .attr("name", name)
        .children(COLOR_SCHEME.iter().map(|(slot, rgb)| {
            XmlNode::new(format!("a:{}", slot)).child(XmlNode::new("a:srgbClr").attr("val", rgb))
        }))
}

fn font_scheme(theme: &Theme) -> XmlNode {
    let font_set = |tag: &'static str, typeface: &str| {
        XmlNode::new(tag)
            .child(XmlNode::new("a:latin").attr("typeface", typeface))
            .child(XmlNode::new("a:ea").attr("typeface", ""))
            .child(XmlNode::new("a:cs").attr("typeface", ""))
    };

    XmlNode::new("a:fontScheme")
        .attr("name", &theme.name)
        .child(font_set("a:majorFont", theme.head_font()))
        .child(font_set("a:minorFont", theme.body_font()))
}

fn format_scheme() -> XmlNode {
    let placeholder_fill =
        || XmlNode::new("a:solidFill").child(XmlNode::new("a:schemeClr").attr("val", "phClr"));
    let line = || {
        XmlNode::new("a:ln")
            .attr("w", 9525)
            .attr("cap", "flat")
            .attr("cmpd", "sng")
            .attr("algn", "ctr")
            .child(placeholder_fill())
    };
    let effect = || XmlNode::new("a:effectStyle").child(XmlNode::new("a:effectLst"));

    XmlNode::new("a:fmtScheme")
        .attr("name", "Office")
        .child(XmlNode::new("a:fillStyleLst").children((0..3).map(|_| placeholder_fill())))
        .child(XmlNode::new("a:lnStyleLst").children((0..3).map(|_| line())))
        .child(XmlNode::new("a:effectStyleLst").children((0..3).map(|_| effect())))
        .child(XmlNode::new("a:bgFillStyleLst").children((0..3).map(|_| placeholder_fill())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_slots() {
        let node = theme(&Theme::default());
        let scheme = node.descendants("a:clrScheme")[0];
        let slots: Vec<&str> = scheme.child_elements().map(XmlNode::name).collect();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0], "a:dk1");
        assert_eq!(slots[11], "a:folHlink");

        let xml = node.to_document().unwrap();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="2B6CB0"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:folHlink><a:srgbClr val="1D4ED8"/></a:folHlink>"#));
    }

    #[test]
    fn test_font_scheme_fallbacks() {
        let deck_theme = Theme {
            body_font: Some("Pretendard".to_string()),
            ..Theme::default()
        };
        let node = theme(&deck_theme);
        let latins: Vec<&str> = node
            .descendants("a:latin")
            .into_iter()
            .filter_map(|n| n.attribute("typeface"))
            .collect();
        assert_eq!(latins, vec!["Pretendard", "Pretendard"]);
        assert_eq!(node.descendants("a:ea").len(), 2);
        assert_eq!(node.descendants("a:cs").len(), 2);

        let default_fonts = theme(&Theme::default());
        assert_eq!(
            default_fonts.descendants("a:latin")[0].attribute("typeface"),
            Some("Arial")
        );
    }

    #[test]
    fn test_head_font_is_major() {
        let deck_theme = Theme {
            head_font: Some("Georgia".to_string()),
            body_font: Some("Verdana".to_string()),
            ..Theme::default()
        };
        let node = theme(&deck_theme);
        let major = node.descendants("a:majorFont")[0];
        let minor = node.descendants("a:minorFont")[0];
        assert_eq!(major.descendants("a:latin")[0].attribute("typeface"), Some("Georgia"));
        assert_eq!(minor.descendants("a:latin")[0].attribute("typeface"), Some("Verdana"));
    }

    #[test]
    fn test_format_scheme_has_three_of_each() {
        let node = theme(&Theme::default());
        for list in ["a:fillStyleLst", "a:lnStyleLst", "a:effectStyleLst", "a:bgFillStyleLst"] {
            assert_eq!(node.descendants(list)[0].child_elements().count(), 3, "{list}");
        }
        assert_eq!(node.descendants("a:ln")[0].attribute("w"), Some("9525"));
    }
}
