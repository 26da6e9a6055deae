//! Integration tests for manifest parsing
//!
//! These tests exercise the whole pipeline against real files: a manifest
//! is written to a temporary path, loaded, and the resulting model checked.

use pkgkit::{
    ManifestError, ManifestParser, Package, UrlKind, Version, VersionBound,
};
use std::io::Write;
use tempfile::NamedTempFile;

const FULL_MANIFEST: &str = r#"<?xml version="1.0"?>
<package format="1">
  <name>nav_stack</name>
  <version>2.14.0</version>
  <description>Navigation stack metadata</description>
  <maintainer email="ada@example.com">Ada</maintainer>
  <maintainer>Grace</maintainer>
  <license>BSD</license>
  <license>Apache-2.0</license>
  <url type="website">https://example.com</url>
  <url type="bugtracker">https://example.com/issues</url>
  <url>https://example.com/extra</url>
  <author email="linus@example.com">Linus</author>
  <buildtool_depend>cmake</buildtool_depend>
  <build_depend version_gte="1.0.0" version_lt="2.0.0">libfoo</build_depend>
  <run_depend version_eq="3.1.4">libbar</run_depend>
  <test_depend>testlib</test_depend>
  <export><build_type>cmake</build_type></export>
</package>
"#;

fn manifest_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write manifest fixture");
    file
}

fn parse(content: &str) -> Result<Package, ManifestError> {
    let file = manifest_file(content);
    ManifestParser::parse_file(file.path())
}

#[test]
fn full_manifest_populates_every_field() {
    let file = manifest_file(FULL_MANIFEST);
    let pkg = ManifestParser::parse_file(file.path()).unwrap();

    assert_eq!(pkg.format, 1);
    assert_eq!(pkg.path.as_deref(), Some(file.path()));
    assert_eq!(pkg.name.as_deref(), Some("nav_stack"));
    assert_eq!(pkg.version, Version::new(2, 14, 0));
    assert_eq!(pkg.description.as_deref(), Some("Navigation stack metadata"));

    assert_eq!(pkg.maintainers.len(), 2);
    assert_eq!(pkg.maintainers[0].name, "Ada");
    assert_eq!(pkg.maintainers[0].email.as_deref(), Some("ada@example.com"));
    assert_eq!(pkg.maintainers[1].name, "Grace");
    assert_eq!(pkg.maintainers[1].email, None);

    assert_eq!(pkg.licenses, vec!["BSD", "Apache-2.0"]);

    assert_eq!(pkg.urls.len(), 3);
    assert_eq!(pkg.urls[0].kind, UrlKind::Website);
    assert_eq!(pkg.urls[1].kind, UrlKind::Bugtracker);
    assert_eq!(pkg.urls[2].kind, UrlKind::Unset);

    assert_eq!(pkg.authors.len(), 1);
    assert_eq!(pkg.authors[0].name, "Linus");

    assert_eq!(pkg.buildtool_depends[0].name, "cmake");
    let libfoo = &pkg.build_depends[0];
    assert_eq!(
        libfoo.bound(VersionBound::GreaterOrEqual),
        Some(&Version::new(1, 0, 0))
    );
    assert_eq!(
        libfoo.bound(VersionBound::LessThan),
        Some(&Version::new(2, 0, 0))
    );
    assert_eq!(
        pkg.run_depends[0].bound(VersionBound::Equal),
        Some(&Version::new(3, 1, 4))
    );
    assert!(pkg.test_depends[0].bounds.is_empty());

    assert_eq!(
        pkg.exports.as_deref(),
        Some("<export><build_type>cmake</build_type></export>")
    );
}

#[test]
fn missing_file_is_a_load_failure() {
    let result = ManifestParser::parse_file("/nonexistent/package.xml");
    assert!(matches!(result, Err(ManifestError::DocumentLoad { .. })));
}

#[test]
fn malformed_xml_is_a_load_failure() {
    let result = parse("<package><name>oops</package>");
    assert!(matches!(result, Err(ManifestError::DocumentLoad { .. })));
}

mod format_versions {
    use super::*;

    #[test]
    fn absent_format_defaults_to_one() {
        let pkg = parse("<package><name>p</name></package>").unwrap();
        assert_eq!(pkg.format, 1);
    }

    #[test]
    fn explicit_format_one_parses_identically() {
        let absent = parse("<package><name>p</name></package>").unwrap();
        let explicit = parse("<package format=\"1\"><name>p</name></package>").unwrap();
        assert_eq!(absent.format, explicit.format);
        assert_eq!(absent.name, explicit.name);
    }

    #[test]
    fn format_zero_is_unsupported() {
        assert!(matches!(
            parse("<package format=\"0\"/>"),
            Err(ManifestError::UnsupportedFormat { format: 0, .. })
        ));
    }

    #[test]
    fn format_two_is_unsupported() {
        assert!(matches!(
            parse("<package format=\"2\"/>"),
            Err(ManifestError::UnsupportedFormat { format: 2, .. })
        ));
    }

    #[test]
    fn non_numeric_format_is_invalid() {
        assert!(matches!(
            parse("<package format=\"latest\"/>"),
            Err(ManifestError::InvalidFormatAttribute { ref value, .. }) if value == "latest"
        ));
    }
}

mod structure {
    use super::*;

    #[test]
    fn second_top_level_element_fails_and_leaves_package_empty() {
        let file = manifest_file("<package><name>p</name></package><stray/>");
        let mut pkg = Package::new();
        let result = ManifestParser::parse_into(file.path(), &mut pkg);

        assert!(matches!(
            result,
            Err(ManifestError::DuplicatePackageTag { ref tag, .. }) if tag == "stray"
        ));
        // Only the source path was recorded before the structural check.
        assert_eq!(pkg.path.as_deref(), Some(file.path()));
        assert_eq!(pkg.name, None);
        assert_eq!(pkg.format, 0);
        assert!(pkg.maintainers.is_empty());
    }

    #[test]
    fn leading_unknown_top_level_tag_fails() {
        assert!(matches!(
            parse("<metadata/><package/>"),
            Err(ManifestError::UnknownTopLevelTag { ref tag, .. }) if tag == "metadata"
        ));
    }

    #[test]
    fn document_without_package_tag_fails() {
        assert!(matches!(
            parse("<?xml version=\"1.0\"?><!-- nothing here -->"),
            Err(ManifestError::MissingPackageTag { .. })
        ));
    }
}

mod dependencies {
    use super::*;

    #[test]
    fn range_bounds_coexist_and_others_stay_absent() {
        let pkg = parse(
            "<package>\
               <build_depend version_gte=\"1.0.0\" version_lt=\"2.0.0\">ranged</build_depend>\
             </package>",
        )
        .unwrap();

        let dep = &pkg.build_depends[0];
        assert_eq!(dep.bounds.len(), 2);
        assert_eq!(
            dep.bound(VersionBound::GreaterOrEqual),
            Some(&Version::new(1, 0, 0))
        );
        assert_eq!(
            dep.bound(VersionBound::LessThan),
            Some(&Version::new(2, 0, 0))
        );
        assert_eq!(dep.bound(VersionBound::LessOrEqual), None);
        assert_eq!(dep.bound(VersionBound::Equal), None);
        assert_eq!(dep.bound(VersionBound::GreaterThan), None);
    }

    #[test]
    fn contradictory_bounds_are_stored_without_complaint() {
        let pkg = parse(
            "<package>\
               <run_depend version_gt=\"2.0.0\" version_lt=\"1.0.0\">odd</run_depend>\
             </package>",
        )
        .unwrap();

        let dep = &pkg.run_depends[0];
        assert_eq!(
            dep.bound(VersionBound::GreaterThan),
            Some(&Version::new(2, 0, 0))
        );
        assert_eq!(
            dep.bound(VersionBound::LessThan),
            Some(&Version::new(1, 0, 0))
        );
    }

    #[test]
    fn malformed_bound_reports_dependency_and_attribute() {
        let result = parse(
            "<package>\
               <test_depend version_lte=\"2.0\">libbaz</test_depend>\
             </package>",
        );

        match result {
            Err(ManifestError::InvalidVersionBound {
                attribute,
                tag,
                dependency,
                value,
                ..
            }) => {
                assert_eq!(attribute, "version_lte");
                assert_eq!(tag, "test_depend");
                assert_eq!(dependency, "libbaz");
                assert_eq!(value, "2.0");
            }
            other => panic!("expected InvalidVersionBound, got {other:?}"),
        }
    }
}

mod export_block {
    use super::*;

    #[test]
    fn nested_children_are_captured_verbatim() {
        let pkg = parse(
            "<package>\
               <export>\
                 <build_type>cmake</build_type>\
                 <plugin path=\"lib/libplugin\"/>\
               </export>\
             </package>",
        )
        .unwrap();

        assert_eq!(
            pkg.exports.as_deref(),
            Some("<export><build_type>cmake</build_type><plugin path=\"lib/libplugin\"/></export>")
        );
    }

    #[test]
    fn export_without_children_is_captured() {
        let pkg = parse("<package><export/></package>").unwrap();
        assert_eq!(pkg.exports.as_deref(), Some("<export/>"));
    }
}

#[test]
fn unknown_child_tags_do_not_abort_the_parse() {
    let pkg = parse(
        "<package>\
           <name>p</name>\
           <future_field attr=\"1\">future content</future_field>\
           <version>0.1.0</version>\
         </package>",
    )
    .unwrap();

    assert_eq!(pkg.name.as_deref(), Some("p"));
    assert_eq!(pkg.version, Version::new(0, 1, 0));
}

#[test]
fn releasing_a_fresh_package_succeeds() {
    drop(Package::new());
}

#[test]
fn releasing_a_partially_populated_package_succeeds() {
    let file = manifest_file("<package><name>p</name><version>bad</version></package>");
    let mut pkg = Package::new();
    let result = ManifestParser::parse_into(file.path(), &mut pkg);

    assert!(result.is_err());
    assert_eq!(pkg.name.as_deref(), Some("p"));
    drop(pkg);
}
