//! Diagnostic trouble-code catalog.
//!
//! The catalog is a JSON object mapping a code to its description:
//!
//! ```json
//! { "P0301": "Cylinder 1 Misfire Detected", "P0420": "Catalyst System Efficiency Below Threshold" }
//! ```
//!
//! It is loaded once at startup. Codes are matched case-insensitively.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::StartupFault;

#[derive(Deserialize)]
#[serde(transparent)]
struct CatalogFile(BTreeMap<String, String>);

/// Code → description lookup table.
#[derive(Clone, Debug, Default)]
pub struct CodeCatalog {
    entries: BTreeMap<String, String>,
}

impl CodeCatalog {
    /// Load and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, StartupFault> {
        let text = fs::read_to_string(path).map_err(|source| StartupFault::CatalogUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let CatalogFile(raw) = serde_json::from_str(&text).map_err(|source| StartupFault::CatalogMalformed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_entries(raw))
    }

    pub(crate) fn from_entries(raw: BTreeMap<String, String>) -> Self {
        let entries = raw
            .into_iter()
            .map(|(code, description)| (normalize(&code), description))
            .collect();
        Self { entries }
    }

    /// Description of `code`, if the catalog knows it.
    pub fn describe(
        &self,
        code: &str,
    ) -> Option<&str> {
        self.entries.get(&normalize(code)).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

fn normalize(code: &str) -> String { code.trim().to_ascii_uppercase() }

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_describe() {
        let file = catalog_file(r#"{"P0301": "Cylinder 1 Misfire Detected", "P0420": "Catalyst Efficiency"}"#);
        let catalog = CodeCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.describe("P0301"), Some("Cylinder 1 Misfire Detected"));
        assert_eq!(catalog.describe("P9999"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let file = catalog_file(r#"{"p0171": "System Too Lean (Bank 1)"}"#);
        let catalog = CodeCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.describe("P0171"), Some("System Too Lean (Bank 1)"));
        assert_eq!(catalog.describe(" p0171 "), Some("System Too Lean (Bank 1)"));
    }

    #[test]
    fn test_empty_object_is_valid() {
        let file = catalog_file("{}");
        let catalog = CodeCatalog::load(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = CodeCatalog::load(&path).unwrap_err();
        assert!(matches!(err, StartupFault::CatalogUnreadable { .. }), "{err}");
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let file = catalog_file("{ not json");
        let err = CodeCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, StartupFault::CatalogMalformed { .. }), "{err}");
    }

    #[test]
    fn test_non_string_description_is_malformed() {
        let file = catalog_file(r#"{"P0301": 17}"#);
        let err = CodeCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, StartupFault::CatalogMalformed { .. }), "{err}");
    }

    #[test]
    fn test_shipped_catalog_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(crate::config::DEFAULT_CATALOG_PATH);
        let catalog = CodeCatalog::load(&path).unwrap();
        assert!(catalog.describe("P0301").is_some());
        assert!(catalog.describe("P0420").is_some());
    }
}
