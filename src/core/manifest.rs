//! Package manifest entity model
//!
//! This module defines the data model a parsed manifest populates:
//! - Version: a major.minor.patch triplet
//! - Person: a named maintainer or author with an optional email
//! - Url: a link annotated with its kind
//! - Dependency: a named edge with optional version bounds
//! - Package: the aggregate owning every list
//!
//! The model carries no parsing logic beyond `Version: FromStr`; entities
//! are default-constructed empty and populated field by field.

use crate::core::error::InvalidVersionError;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A version triplet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a version from its three components
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Version {
    type Err = InvalidVersionError;

    /// Parse a `"MAJOR.MINOR.PATCH"` string; partial triplets are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        let &[major, minor, patch] = parts.as_slice() else {
            return Err(InvalidVersionError(s.to_string()));
        };
        let component =
            |part: &str| part.parse::<u32>().map_err(|_| InvalidVersionError(s.to_string()));
        Ok(Self {
            major: component(major)?,
            minor: component(minor)?,
            patch: component(patch)?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A maintainer or author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    /// Display name, required in a valid manifest
    pub name: String,
    /// Contact address from the `email` attribute, if given
    pub email: Option<String>,
}

impl Person {
    /// Create a person with no email
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.name, email),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The kind of a manifest URL, from the `type` attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlKind {
    /// No `type` attribute was given
    #[default]
    Unset,
    Website,
    Bugtracker,
    Repository,
}

impl UrlKind {
    /// Map a `type` attribute value to its kind; unknown values are `None`
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "website" => Some(UrlKind::Website),
            "bugtracker" => Some(UrlKind::Bugtracker),
            "repository" => Some(UrlKind::Repository),
            _ => None,
        }
    }

    /// Attribute spelling of this kind, if it has one
    pub fn label(self) -> Option<&'static str> {
        match self {
            UrlKind::Unset => None,
            UrlKind::Website => Some("website"),
            UrlKind::Bugtracker => Some("bugtracker"),
            UrlKind::Repository => Some("repository"),
        }
    }
}

/// A URL listed by the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Url {
    pub url: String,
    pub kind: UrlKind,
}

/// One of the five optional version constraints a dependency may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionBound {
    LessThan,
    LessOrEqual,
    Equal,
    GreaterThan,
    GreaterOrEqual,
}

impl VersionBound {
    /// Every bound, in attribute-scan order
    pub const ALL: [VersionBound; 5] = [
        VersionBound::LessThan,
        VersionBound::LessOrEqual,
        VersionBound::Equal,
        VersionBound::GreaterThan,
        VersionBound::GreaterOrEqual,
    ];

    /// The manifest attribute name carrying this bound
    pub fn attribute(self) -> &'static str {
        match self {
            VersionBound::LessThan => "version_lt",
            VersionBound::LessOrEqual => "version_lte",
            VersionBound::Equal => "version_eq",
            VersionBound::GreaterThan => "version_gt",
            VersionBound::GreaterOrEqual => "version_gte",
        }
    }
}

/// A dependency edge with optional version bounds
///
/// An absent bound means unconstrained in that direction. Bounds are not
/// checked against each other; an unsatisfiable pair is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependency {
    /// Name of the depended-on package
    pub name: String,
    /// Present version constraints, keyed by bound kind
    pub bounds: BTreeMap<VersionBound, Version>,
}

impl Dependency {
    /// Create an unconstrained dependency
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: BTreeMap::new(),
        }
    }

    /// Get the version constraint for one bound, if present
    pub fn bound(&self, bound: VersionBound) -> Option<&Version> {
        self.bounds.get(&bound)
    }

    /// Set the version constraint for one bound
    pub fn set_bound(&mut self, bound: VersionBound, version: Version) {
        self.bounds.insert(bound, version);
    }
}

/// The role of a dependency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    BuildTool,
    Build,
    Run,
    Test,
}

impl DependencyKind {
    /// Every kind, in manifest order
    pub const ALL: [DependencyKind; 4] = [
        DependencyKind::BuildTool,
        DependencyKind::Build,
        DependencyKind::Run,
        DependencyKind::Test,
    ];

    /// The manifest tag declaring a dependency of this kind
    pub fn tag(self) -> &'static str {
        match self {
            DependencyKind::BuildTool => "buildtool_depend",
            DependencyKind::Build => "build_depend",
            DependencyKind::Run => "run_depend",
            DependencyKind::Test => "test_depend",
        }
    }

    /// Map a tag name to its dependency kind
    pub fn from_tag(tag: &str) -> Option<Self> {
        DependencyKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Plural label used when listing dependencies of this kind
    pub fn label(self) -> &'static str {
        match self {
            DependencyKind::BuildTool => "buildtool_depends",
            DependencyKind::Build => "build_depends",
            DependencyKind::Run => "run_depends",
            DependencyKind::Test => "test_depends",
        }
    }
}

/// The contents of one package manifest
///
/// Default construction yields the all-empty state a parse populates.
/// Every list is owned by the package and preserves document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    /// Manifest format version
    pub format: u32,
    /// Path of the manifest file this was created from
    pub path: Option<PathBuf>,
    /// Package name
    pub name: Option<String>,
    /// Package version triplet
    pub version: Version,
    /// ABI version triplet
    pub abi_version: Version,
    /// Package description
    pub description: Option<String>,
    /// Package maintainers
    pub maintainers: Vec<Person>,
    /// Package licenses
    pub licenses: Vec<String>,
    /// Package urls
    pub urls: Vec<Url>,
    /// Package authors
    pub authors: Vec<Person>,
    /// Build-tool dependencies
    pub buildtool_depends: Vec<Dependency>,
    /// Build dependencies
    pub build_depends: Vec<Dependency>,
    /// Run dependencies
    pub run_depends: Vec<Dependency>,
    /// Test dependencies
    pub test_depends: Vec<Dependency>,
    /// Verbatim `<export>` subtree, if the manifest carried one
    pub exports: Option<String>,
}

impl Package {
    /// Create an empty package
    pub fn new() -> Self {
        Self::default()
    }

    /// The dependency list for one role
    pub fn depends(&self, kind: DependencyKind) -> &[Dependency] {
        match kind {
            DependencyKind::BuildTool => &self.buildtool_depends,
            DependencyKind::Build => &self.build_depends,
            DependencyKind::Run => &self.run_depends,
            DependencyKind::Test => &self.test_depends,
        }
    }

    /// Mutable dependency list for one role
    pub fn depends_mut(&mut self, kind: DependencyKind) -> &mut Vec<Dependency> {
        match kind {
            DependencyKind::BuildTool => &mut self.buildtool_depends,
            DependencyKind::Build => &mut self.build_depends,
            DependencyKind::Run => &mut self.run_depends,
            DependencyKind::Test => &mut self.test_depends,
        }
    }
}
