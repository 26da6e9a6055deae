//! Package manifest parser
//!
//! This module walks an XML document tree and populates a [`Package`]:
//! structural validation of the single top-level `<package>` element,
//! format-attribute handling, per-tag dispatch over the element's children,
//! and extraction of dependency version-bound attributes.

use crate::core::error::{ManifestError, ManifestResult};
use crate::core::manifest::{
    Dependency, DependencyKind, Package, Person, Url, UrlKind, Version, VersionBound,
};
use crate::xml::{XmlDocument, XmlElement};
use std::path::{Path, PathBuf};

/// The only manifest format this parser understands.
const SUPPORTED_FORMAT: u32 = 1;

/// Parser for package manifest documents
///
/// A parser is bound to the source path of the manifest it reads; every
/// failure it reports names that path.
pub struct ManifestParser {
    path: PathBuf,
}

impl ManifestParser {
    /// Create a parser for a manifest at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the manifest file at `path` into a fresh package
    pub fn parse_file(path: impl AsRef<Path>) -> ManifestResult<Package> {
        let mut pkg = Package::new();
        Self::parse_into(path, &mut pkg)?;
        Ok(pkg)
    }

    /// Parse the manifest file at `path` into `pkg`
    ///
    /// On failure `pkg` may be left partially populated; whatever was set
    /// before the failing tag stays set, and dropping it releases it.
    pub fn parse_into(path: impl AsRef<Path>, pkg: &mut Package) -> ManifestResult<()> {
        let path = path.as_ref();
        let parser = Self::new(path);
        let doc = XmlDocument::load(path).map_err(|source| ManifestError::DocumentLoad {
            path: path.to_path_buf(),
            source,
        })?;
        pkg.path = Some(path.to_path_buf());
        parser.parse_document(&doc, pkg)
    }

    /// Walk an already-loaded document tree and populate `pkg`
    pub fn parse_document(&self, doc: &XmlDocument, pkg: &mut Package) -> ManifestResult<()> {
        let package_el = self.find_package_element(doc)?;

        pkg.format = self.manifest_format(package_el)?;
        if pkg.format != SUPPORTED_FORMAT {
            return Err(ManifestError::UnsupportedFormat {
                format: pkg.format,
                path: self.path.clone(),
            });
        }

        for child in package_el.elements() {
            self.dispatch_tag(child, pkg)?;
        }
        Ok(())
    }

    /// Locate the single top-level `<package>` element
    ///
    /// The first top-level element must be `<package>`, and no further
    /// top-level element of any name may follow it.
    fn find_package_element<'doc>(
        &self,
        doc: &'doc XmlDocument,
    ) -> ManifestResult<&'doc XmlElement> {
        let mut elements = doc.elements();
        let package_el = match elements.next() {
            Some(element) if element.name == "package" => element,
            Some(element) => {
                return Err(ManifestError::UnknownTopLevelTag {
                    tag: element.name.clone(),
                    path: self.path.clone(),
                })
            }
            None => {
                return Err(ManifestError::MissingPackageTag {
                    path: self.path.clone(),
                })
            }
        };

        if let Some(extra) = elements.next() {
            return Err(ManifestError::DuplicatePackageTag {
                tag: extra.name.clone(),
                path: self.path.clone(),
            });
        }
        Ok(package_el)
    }

    /// Determine the manifest format from the `format` attribute
    ///
    /// An absent attribute means format 1. An all-zeros value is format 0,
    /// kept distinct from non-numeric text so the two rejections stay
    /// separately diagnosable.
    fn manifest_format(&self, package_el: &XmlElement) -> ManifestResult<u32> {
        let Some(value) = package_el.attribute("format") else {
            return Ok(1);
        };
        if !value.is_empty() && value.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| ManifestError::InvalidFormatAttribute {
                value: value.to_string(),
                path: self.path.clone(),
            })
    }

    /// Dispatch one child element of `<package>` by tag name
    fn dispatch_tag(&self, element: &XmlElement, pkg: &mut Package) -> ManifestResult<()> {
        match element.name.as_str() {
            "name" => pkg.name = Some(self.required_content(element)?),
            "version" => pkg.version = self.parse_version_tag(element)?,
            "description" => pkg.description = Some(self.required_content(element)?),
            "maintainer" => pkg.maintainers.push(self.parse_person(element)?),
            "author" => pkg.authors.push(self.parse_person(element)?),
            "license" => pkg.licenses.push(self.required_content(element)?),
            "url" => pkg.urls.push(self.parse_url(element)?),
            "export" => pkg.exports = Some(self.capture_export(element)?),
            tag => {
                if let Some(kind) = DependencyKind::from_tag(tag) {
                    let dep = self.parse_dependency(element)?;
                    pkg.depends_mut(kind).push(dep);
                } else {
                    log::warn!(
                        "unknown tag <{}> in {} with content '{}'",
                        tag,
                        self.path.display(),
                        element.text_content()
                    );
                }
            }
        }
        Ok(())
    }

    /// Extract required text content, failing on an empty tag
    fn required_content(&self, element: &XmlElement) -> ManifestResult<String> {
        let content = element.text_content();
        if content.is_empty() {
            return Err(ManifestError::MissingContent {
                tag: element.name.clone(),
                path: self.path.clone(),
            });
        }
        Ok(content)
    }

    fn parse_version_tag(&self, element: &XmlElement) -> ManifestResult<Version> {
        let text = self.required_content(element)?;
        text.parse().map_err(|_| ManifestError::InvalidVersion {
            value: text.clone(),
            path: self.path.clone(),
        })
    }

    fn parse_person(&self, element: &XmlElement) -> ManifestResult<Person> {
        Ok(Person {
            name: self.required_content(element)?,
            email: element.attribute("email").map(str::to_owned),
        })
    }

    fn parse_url(&self, element: &XmlElement) -> ManifestResult<Url> {
        let url = self.required_content(element)?;
        let kind = match element.attribute("type") {
            None => UrlKind::Unset,
            Some(value) => UrlKind::from_type_attr(value).ok_or_else(|| {
                ManifestError::UnknownUrlType {
                    value: value.to_string(),
                    path: self.path.clone(),
                }
            })?,
        };
        Ok(Url { url, kind })
    }

    /// Build a dependency from a `*_depend` tag and its bound attributes
    fn parse_dependency(&self, element: &XmlElement) -> ManifestResult<Dependency> {
        let mut dep = Dependency::new(self.required_content(element)?);
        for bound in VersionBound::ALL {
            let Some(value) = element.attribute(bound.attribute()) else {
                continue;
            };
            let version =
                value
                    .parse()
                    .map_err(|_| ManifestError::InvalidVersionBound {
                        attribute: bound.attribute(),
                        tag: element.name.clone(),
                        dependency: dep.name.clone(),
                        value: value.to_string(),
                        path: self.path.clone(),
                    })?;
            dep.set_bound(bound, version);
        }
        Ok(dep)
    }

    fn capture_export(&self, element: &XmlElement) -> ManifestResult<String> {
        element
            .to_xml()
            .map_err(|source| ManifestError::ExportCapture {
                path: self.path.clone(),
                source,
            })
    }
}
