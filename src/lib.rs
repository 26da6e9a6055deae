//! # pkgkit
//!
//! Pure Rust parser and printer for XML package manifests.
//!
//! A manifest describes one package: its name, version, description,
//! maintainers, licenses, urls, authors, and four kinds of dependency
//! edges, each optionally constrained by version bounds. This crate loads
//! such a file into a [`Package`] model and can render the model back in
//! human-readable form.
//!
//! Example:
//!
//! ```no_run
//! use pkgkit::{ManifestParser, ManifestResult};
//!
//! fn main() -> ManifestResult<()> {
//!     let pkg = ManifestParser::parse_file("package.xml")?;
//!     pkgkit::print(&pkg);
//!     Ok(())
//! }
//! ```
//!
//! Parsing failures are structured [`ManifestError`] values naming the
//! offending tag, attribute, and source path. Unknown child tags inside
//! `<package>` are logged as warnings and skipped, so manifests that add
//! fields this parser does not understand still load.

pub mod core;
pub mod xml;

pub use crate::core::error::{InvalidVersionError, ManifestError, ManifestResult};
pub use crate::core::manifest::{
    Dependency, DependencyKind, Package, Person, Url, UrlKind, Version, VersionBound,
};
pub use crate::core::parser::ManifestParser;
pub use crate::core::printer::print;
pub use crate::xml::{XmlDocument, XmlElement, XmlError, XmlNode, XmlResult};
