//! npm manifest support
//!
//! Reads the `dependencies` table of a package.json so the dependency
//! list can be sourced straight from the host project's manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: IndexMap<String, String>,
}

/// Extract dependency names from a package.json, in document order.
///
/// Only the keys of the `dependencies` object are used; version strings
/// and every other manifest field are ignored. A manifest without a
/// `dependencies` object yields an empty list.
pub fn manifest_dependencies<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    let manifest: PackageManifest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(manifest.dependencies.into_keys().collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_manifest(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_dependency_names_in_document_order() {
        let file = write_manifest(
            r#"{
                "name": "demo",
                "dependencies": {
                    "react": "^18.0.0",
                    "@babel/core": "^7.0.0",
                    "lodash": "^4.0.0"
                },
                "devDependencies": {
                    "vitest": "^1.0.0"
                }
            }"#,
        );

        let names = manifest_dependencies(file.path()).unwrap();
        assert_eq!(names, ["react", "@babel/core", "lodash"]);
    }

    #[test]
    fn test_missing_dependencies_table_yields_empty_list() {
        let file = write_manifest(r#"{ "name": "demo" }"#);

        let names = manifest_dependencies(file.path()).unwrap();
        assert_eq!(names, Vec::<String>::new());
    }

    #[test]
    fn test_unreadable_manifest_is_an_error() {
        assert!(manifest_dependencies("does/not/exist.json").is_err());
    }
}
