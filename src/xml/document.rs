//! XML document loading
//!
//! Builds an [`XmlDocument`] tree from a file or string using quick-xml.
//! Surrounding whitespace in character data is trimmed, entities are
//! decoded, and comments and processing instructions are discarded.

use crate::xml::node::{XmlElement, XmlNode};
use crate::xml::{XmlError, XmlResult};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// A parsed XML document
///
/// Unlike a schema-validated DOM this keeps every top-level node, so a
/// document with stray content next to its root element can still be
/// inspected by callers that want to reject it themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    /// Top-level nodes in document order
    pub children: Vec<XmlNode>,
}

impl XmlDocument {
    /// Read and parse the file at `path`
    pub fn load(path: impl AsRef<Path>) -> XmlResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a document from a string
    pub fn parse(text: &str) -> XmlResult<Self> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut top_level: Vec<XmlNode> = Vec::new();
        let mut open: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    open.push(Self::element_from(&e));
                }
                Event::Empty(e) => {
                    let element = Self::element_from(&e);
                    Self::attach(XmlNode::Element(element), &mut open, &mut top_level);
                }
                Event::End(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    let element = match open.pop() {
                        Some(element) if element.name == name => element,
                        _ => return Err(XmlError::MismatchedTag(name)),
                    };
                    Self::attach(XmlNode::Element(element), &mut open, &mut top_level);
                }
                Event::Text(e) => {
                    let raw_text = String::from_utf8_lossy(e.as_ref()).to_string();
                    let text = match unescape(&raw_text) {
                        Ok(unescaped) => unescaped.to_string(),
                        Err(_) => raw_text,
                    };
                    if !text.is_empty() {
                        Self::attach(XmlNode::Text(text), &mut open, &mut top_level);
                    }
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(e.as_ref()).to_string();
                    if !text.is_empty() {
                        Self::attach(XmlNode::Text(text), &mut open, &mut top_level);
                    }
                }
                Event::Eof => break,
                // Declarations, comments, doctypes, and processing
                // instructions carry nothing the tree needs.
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = open.pop() {
            return Err(XmlError::UnclosedTag(unclosed.name));
        }

        Ok(Self {
            children: top_level,
        })
    }

    /// Iterate over top-level elements, skipping other node kinds
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    fn element_from(e: &BytesStart<'_>) -> XmlElement {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let mut element = XmlElement::new(name);
        element.attributes = e
            .attributes()
            .flatten()
            .map(|attr| {
                let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
                let raw_value = String::from_utf8_lossy(attr.value.as_ref());
                let value = match unescape(&raw_value) {
                    Ok(unescaped) => unescaped.to_string(),
                    Err(_) => raw_value.to_string(),
                };
                (key, value)
            })
            .collect();
        element
    }

    fn attach(node: XmlNode, open: &mut [XmlElement], top_level: &mut Vec<XmlNode>) {
        if let Some(parent) = open.last_mut() {
            parent.children.push(node);
        } else {
            top_level.push(node);
        }
    }
}
