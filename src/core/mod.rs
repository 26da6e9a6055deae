//! Manifest core module
//!
//! This module contains the core functionality for package manifest
//! processing: the entity model, the parser, and the diagnostic printer.

pub mod error;
pub mod manifest;
pub mod parser;
pub mod printer;

pub use error::{InvalidVersionError, ManifestError, ManifestResult};
pub use manifest::{
    Dependency, DependencyKind, Package, Person, Url, UrlKind, Version, VersionBound,
};
pub use parser::ManifestParser;
pub use printer::print;
