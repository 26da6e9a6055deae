//! Error types for manifest operations
//!
//! This module defines all error types used throughout the toolkit. Fatal
//! parse failures carry the offending tag, attribute, value, and source
//! path as structured data so callers can decide how to present them.

use crate::xml::XmlError;
use std::path::PathBuf;
use thiserror::Error;

/// Error raised when a version string is not three dot-separated integers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version string '{0}', expected MAJOR.MINOR.PATCH")]
pub struct InvalidVersionError(pub String);

/// Error types for manifest parsing
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read or is not well-formed XML
    #[error("failed to load package manifest {}: {source}", .path.display())]
    DocumentLoad {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    /// A top-level element other than `<package>` came first
    #[error("unknown tag <{tag}> in {}", .path.display())]
    UnknownTopLevelTag { tag: String, path: PathBuf },

    /// No `<package>` element exists at the top level
    #[error("failed to find <package> tag in {}", .path.display())]
    MissingPackageTag { path: PathBuf },

    /// More than one top-level element exists
    #[error(
        "found top-level tag <{tag}> in {}, but only one top-level <package> tag is allowed",
        .path.display()
    )]
    DuplicatePackageTag { tag: String, path: PathBuf },

    /// The `format` attribute is not a number
    #[error("invalid value in <package> tag's format attribute: '{value}' in {}", .path.display())]
    InvalidFormatAttribute { value: String, path: PathBuf },

    /// The manifest format version is not supported
    #[error("cannot parse package manifests of format version {format} in {}", .path.display())]
    UnsupportedFormat { format: u32, path: PathBuf },

    /// A required tag has no text content
    #[error("no content in <{tag}> tag of {}", .path.display())]
    MissingContent { tag: String, path: PathBuf },

    /// The `<version>` tag does not hold a version triplet
    #[error("invalid <version> tag '{value}' in {}", .path.display())]
    InvalidVersion { value: String, path: PathBuf },

    /// A dependency version-bound attribute does not hold a version triplet
    #[error(
        "failed to parse version from the '{attribute}' attribute of the \
         '<{tag}>{dependency}</{tag}>' tag in {}: '{value}'",
        .path.display()
    )]
    InvalidVersionBound {
        attribute: &'static str,
        tag: String,
        dependency: String,
        value: String,
        path: PathBuf,
    },

    /// The `type` attribute of a `<url>` tag holds an unrecognized value
    #[error("unknown url type '{value}' in {}", .path.display())]
    UnknownUrlType { value: String, path: PathBuf },

    /// The `<export>` subtree could not be serialized
    #[error("failed to capture contents of <export> in {}: {source}", .path.display())]
    ExportCapture {
        path: PathBuf,
        #[source]
        source: XmlError,
    },
}

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;
