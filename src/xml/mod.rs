//! Minimal XML document tree
//!
//! This module supplies the document model the manifest parser walks:
//! loading a file into a tree of elements and text, child iteration in
//! document order, attribute lookup, and verbatim subtree serialization.

pub mod document;
pub mod node;

pub use document::XmlDocument;
pub use node::{XmlElement, XmlNode};

use thiserror::Error;

/// Error types for XML tree operations
#[derive(Debug, Error)]
pub enum XmlError {
    /// IO error while reading a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML input
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// A closing tag did not match the innermost open element
    #[error("mismatched closing tag </{0}>")]
    MismatchedTag(String),

    /// The document ended while elements were still open
    #[error("unexpected end of document inside <{0}>")]
    UnclosedTag(String),

    /// Serialized bytes were not valid UTF-8
    #[error("UTF-8 encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type alias for XML tree operations
pub type XmlResult<T> = Result<T, XmlError>;
