//! Human-readable manifest dump
//!
//! Renders a populated [`Package`] in a fixed order for diagnostics:
//! scalars first, then each list in document order, then any non-empty
//! dependency list labeled by its role, then the export block.

use crate::core::manifest::{Dependency, DependencyKind, Package};
use std::fmt;

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Package:")?;
        writeln!(f, " name: {}", self.name.as_deref().unwrap_or_default())?;
        writeln!(f, " version: {}", self.version)?;
        writeln!(
            f,
            " description: {}",
            self.description.as_deref().unwrap_or_default()
        )?;

        writeln!(f, " maintainers:")?;
        for maintainer in &self.maintainers {
            writeln!(f, "  {maintainer}")?;
        }

        writeln!(f, " licenses:")?;
        for license in &self.licenses {
            writeln!(f, "  {license}")?;
        }

        writeln!(f, " urls:")?;
        for url in &self.urls {
            match url.kind.label() {
                Some(label) => writeln!(f, "  {} ({label})", url.url)?,
                None => writeln!(f, "  {}", url.url)?,
            }
        }

        writeln!(f, " authors:")?;
        for author in &self.authors {
            writeln!(f, "  {author}")?;
        }

        for kind in DependencyKind::ALL {
            let deps = self.depends(kind);
            if deps.is_empty() {
                continue;
            }
            writeln!(f, " {}:", kind.label())?;
            for dep in deps {
                write_dependency(f, dep)?;
            }
        }

        if let Some(exports) = &self.exports {
            writeln!(f, " export:")?;
            writeln!(f, "  {exports}")?;
        }
        Ok(())
    }
}

fn write_dependency(f: &mut fmt::Formatter<'_>, dep: &Dependency) -> fmt::Result {
    writeln!(f, "  {}", dep.name)?;
    for (bound, version) in &dep.bounds {
        writeln!(f, "   {}: {version}", bound.attribute())?;
    }
    Ok(())
}

/// Print a package to standard output
pub fn print(pkg: &Package) {
    print!("{pkg}");
}
