//! Structured XML element tree and its serializer.
//!
//! Part builders describe documents as [`XmlNode`] trees. One writer turns a tree
//! into text, escaping every attribute value and text node exactly once through
//! [`escape_xml`]. No builder interpolates markup by hand.

use super::escape::escape_xml;
use crate::common::error::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::fmt::Display;
use std::io::Write;

/// A child of an element: either a nested element or raw (unescaped) text.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlChild {
    Element(XmlNode),
    Text(String),
}

/// An XML element with ordered attributes and children.
///
/// # Examples
///
/// ```
/// use slidepress::common::xml::XmlNode;
///
/// let node = XmlNode::new("a:off").attr("x", 0).attr("y", 914400);
/// assert_eq!(node.to_fragment().unwrap(), r#"<a:off x="0" y="914400"/>"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    name: Cow<'static, str>,
    attributes: Vec<(Cow<'static, str>, String)>,
    children: Vec<XmlChild>,
}

impl XmlNode {
    /// Create an empty element.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Values are stored raw and escaped on output.
    pub fn attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.attributes.push((key.into(), value.to_string()));
        self
    }

    /// Append an attribute only when a value is present.
    pub fn attr_opt<V: Display>(self, key: impl Into<Cow<'static, str>>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// Append a child element.
    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(XmlChild::Element(child));
        self
    }

    /// Append a child element only when present.
    pub fn child_opt(self, child: Option<XmlNode>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append every element yielded by `children`, in order.
    pub fn children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children
            .extend(children.into_iter().map(XmlChild::Element));
        self
    }

    /// Append a text node. The text is stored raw and escaped on output.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlChild::Text(text.into()));
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by qualified name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlNode> {
        self.children.iter().filter_map(|child| match child {
            XmlChild::Element(node) => Some(node),
            XmlChild::Text(_) => None,
        })
    }

    /// Concatenated raw text of the direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlChild::Text(text) => Some(text.as_str()),
                XmlChild::Element(_) => None,
            })
            .collect()
    }

    /// Collect every descendant element (depth-first, document order) with the given name.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a XmlNode> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlNode>) {
        for child in self.child_elements() {
            if child.name() == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Serialize as a standalone document with the OOXML XML declaration.
    pub fn to_document(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::with_capacity(4096));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(|e| Error::Xml(format!("Failed to write XML declaration: {}", e)))?;
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Serialize this element alone, without an XML declaration.
    pub fn to_fragment(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::with_capacity(512));
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_ref());
        for (key, value) in &self.attributes {
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Owned(escape_xml(value).into_bytes()),
            });
        }

        if self.children.is_empty() {
            return writer
                .write_event(Event::Empty(start))
                .map_err(|e| Error::Xml(format!("Failed to write <{}/>: {}", self.name, e)));
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| Error::Xml(format!("Failed to write <{}>: {}", self.name, e)))?;

        for child in &self.children {
            match child {
                XmlChild::Element(node) => node.write_to(writer)?,
                XmlChild::Text(text) => writer
                    .write_event(Event::Text(BytesText::from_escaped(escape_xml(text))))
                    .map_err(|e| Error::Xml(format!("Failed to write text: {}", e)))?,
            }
        }

        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_ref())))
            .map_err(|e| Error::Xml(format!("Failed to close <{}>: {}", self.name, e)))
    }
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Xml(format!("Invalid UTF-8 in generated XML: {}", e)))
}
