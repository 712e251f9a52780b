//! XML utilities: escaping and the element-tree writer used by every part builder.

pub mod escape;
pub mod node;

pub use escape::{escape_xml, find_invalid_xml_char, is_xml_char};
pub use node::{XmlChild, XmlNode};
