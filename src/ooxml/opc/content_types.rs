//! Builder for the `[Content_Types].xml` manifest.

use super::constants::{content_type as ct, namespace};
use super::packuri::PartName;
use crate::common::xml::XmlNode;
use std::collections::BTreeMap;

/// Default (per extension) and Override (per part) content type mappings.
///
/// Overrides keep insertion order, so slides stay in slide order instead of the
/// lexical order that would put `slide10` before `slide2`.
#[derive(Debug, Clone)]
pub struct ContentTypes {
    defaults: BTreeMap<&'static str, &'static str>,
    overrides: Vec<(PartName, &'static str)>,
}

impl ContentTypes {
    /// A manifest with the standard `rels` and `xml` defaults and no overrides.
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels", ct::OPC_RELATIONSHIPS);
        defaults.insert("xml", ct::XML);
        Self {
            defaults,
            overrides: Vec::new(),
        }
    }

    /// Map one part to its content type.
    pub fn add_override(&mut self, partname: PartName, content_type: &'static str) -> &mut Self {
        self.overrides.push((partname, content_type));
        self
    }

    /// Build the `<Types>` element.
    pub fn to_xml(&self) -> XmlNode {
        XmlNode::new("Types")
            .attr("xmlns", namespace::OPC_CONTENT_TYPES)
            .children(self.defaults.iter().map(|(ext, content_type)| {
                XmlNode::new("Default")
                    .attr("Extension", ext)
                    .attr("ContentType", content_type)
            }))
            .children(self.overrides.iter().map(|(partname, content_type)| {
                XmlNode::new("Override")
                    .attr("PartName", partname)
                    .attr("ContentType", content_type)
            }))
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}
