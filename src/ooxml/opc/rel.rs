//! Relationship parts (`.rels`).
//!
//! A relationships part lists the outgoing references of one source part. Ids are
//! assigned by the caller because several of them are fixed by convention (the
//! presentation's slides start at `rId2`, for example).

use super::constants::namespace;
use super::packuri::PartName;
use crate::common::xml::XmlNode;

/// A single internal relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,
    /// Relationship type URI
    reltype: &'static str,
    /// Target reference relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: impl Into<String>, reltype: &'static str, target_ref: impl Into<String>) -> Self {
        Self {
            r_id: r_id.into(),
            reltype,
            target_ref: target_ref.into(),
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered relationships of one source part.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Directory of the source part, used to relativize targets
    base_uri: String,
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Relationships whose source is `source`.
    pub fn for_source(source: &PartName) -> Self {
        Self {
            base_uri: source.base_uri().to_string(),
            rels: Vec::new(),
        }
    }

    /// Add a relationship to `target`, stored relative to the source directory.
    pub fn add(&mut self, r_id: impl Into<String>, reltype: &'static str, target: &PartName) -> &mut Self {
        let target_ref = target.relative_ref(&self.base_uri);
        self.rels.push(Relationship::new(r_id, reltype, target_ref));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Build the `<Relationships>` element.
    pub fn to_xml(&self) -> XmlNode {
        XmlNode::new("Relationships")
            .attr("xmlns", namespace::OPC_RELATIONSHIPS)
            .children(self.rels.iter().map(|rel| {
                XmlNode::new("Relationship")
                    .attr("Id", rel.r_id())
                    .attr("Type", rel.reltype())
                    .attr("Target", rel.target_ref())
            }))
    }
}

/// Format relationship id `rId{n}`.
#[inline]
pub fn r_id(n: usize) -> String {
    format!("rId{}", n)
}
