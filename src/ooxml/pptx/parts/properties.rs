/// Document property parts: `docProps/core.xml` and `docProps/app.xml`.
use crate::common::xml::XmlNode;
use crate::ooxml::opc::constants::namespace as ns;
use crate::ooxml::pptx::model::Presentation;
use chrono::{DateTime, SecondsFormat, Utc};

/// Value of the `Application` extended property
pub const APPLICATION_NAME: &str = "slidepress";

/// Value of the `AppVersion` extended property (`XX.YYYY` form)
pub const APP_VERSION: &str = "16.0000";

/// Build `docProps/core.xml`.
///
/// `created` and `modified` both carry `timestamp` in W3CDTF form,
/// e.g. `2026-10-16T09:30:00Z`.
pub fn core_properties(presentation: &Presentation, timestamp: DateTime<Utc>) -> XmlNode {
    let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    let dated = |tag: &'static str| {
        XmlNode::new(tag)
            .attr("xsi:type", "dcterms:W3CDTF")
            .text(stamp.clone())
    };

    XmlNode::new("cp:coreProperties")
        .attr("xmlns:cp", ns::OPC_CORE_PROPERTIES)
        .attr("xmlns:dc", ns::DC_ELEMENTS)
        .attr("xmlns:dcterms", ns::DC_TERMS)
        .attr("xmlns:dcmitype", ns::DC_MITYPE)
        .attr("xmlns:xsi", ns::XSI)
        .child(XmlNode::new("dc:title").text(presentation.title()))
        .child(XmlNode::new("dc:subject").text(presentation.subject()))
        .child(XmlNode::new("dc:creator").text(presentation.author()))
        .child(XmlNode::new("cp:lastModifiedBy").text(presentation.author()))
        .child(dated("dcterms:created"))
        .child(dated("dcterms:modified"))
}

/// Build `docProps/app.xml`.
pub fn app_properties(presentation: &Presentation, slide_count: usize) -> XmlNode {
    let element = |tag: &'static str, value: String| XmlNode::new(tag).text(value);

    XmlNode::new("Properties")
        .attr("xmlns", ns::OFC_EXTENDED_PROPERTIES)
        .attr("xmlns:vt", ns::OFC_DOC_PROPS_VTYPES)
        .child(element("Application", APPLICATION_NAME.to_string()))
        .child(element("Slides", slide_count.to_string()))
        .child(element("Notes", "0".to_string()))
        .child(element("HiddenSlides", "0".to_string()))
        .child(element("PresentationFormat", "Widescreen".to_string()))
        .child(element("Company", presentation.company().to_string()))
        .child(element("AppVersion", APP_VERSION.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_core_properties() {
        let deck = Presentation::new()
            .with_author("AntonAI")
            .with_subject("ChatGPT Deep Dive");
        let xml = core_properties(&deck, fixed_time()).to_document().unwrap();

        assert!(xml.contains("<dc:title>ChatGPT Deep Dive</dc:title>"));
        assert!(xml.contains("<dc:creator>AntonAI</dc:creator>"));
        assert!(xml.contains("<cp:lastModifiedBy>AntonAI</cp:lastModifiedBy>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2026-10-16T09:30:00Z</dcterms:created>"#
        ));
        assert!(xml.contains(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">2026-10-16T09:30:00Z</dcterms:modified>"#
        ));
    }

    #[test]
    fn test_core_properties_escape_metadata() {
        let deck = Presentation::new().with_title("R&D <2026>").with_author("O'Neil");
        let xml = core_properties(&deck, fixed_time()).to_document().unwrap();
        assert!(xml.contains("<dc:title>R&amp;D &lt;2026&gt;</dc:title>"));
        assert!(xml.contains("<dc:creator>O&apos;Neil</dc:creator>"));
    }

    #[test]
    fn test_app_properties() {
        let deck = Presentation::new().with_company("AntonAI");
        let node = app_properties(&deck, 9);

        let text_of = |tag: &str| node.descendants(tag)[0].text_content();
        assert_eq!(text_of("Application"), APPLICATION_NAME);
        assert_eq!(text_of("Slides"), "9");
        assert_eq!(text_of("Notes"), "0");
        assert_eq!(text_of("HiddenSlides"), "0");
        assert_eq!(text_of("PresentationFormat"), "Widescreen");
        assert_eq!(text_of("Company"), "AntonAI");
    }
}
