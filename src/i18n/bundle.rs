//! The two-level translation bundle and its JSON form.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Translated strings of one path, keyed by sub-path, in file order.
pub type PathEntries = IndexMap<String, String>;

/// All translated strings of one language, keyed by path then sub-path.
///
/// Keys keep the order they were read or inserted in, so a generated bundle
/// lists its strings in the same order as its source.
///
/// On disk a bundle is a JSON object of objects:
///
/// ```json
/// { "greet": { "hello": "Hi", "bye": "Bye" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    paths: IndexMap<String, PathEntries>,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bundle from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read and parse a bundle file.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| Error::BundleRead { path: path.to_path_buf(), source })?;

        Self::from_json(&contents)
            .map_err(|source| Error::BundleParse { path: path.to_path_buf(), source })
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get the entries of a path.
    pub fn path(&self, path: &str) -> Option<&PathEntries> {
        self.paths.get(path)
    }

    /// Get a single translated string.
    pub fn get(&self, path: &str, sub_path: &str) -> Option<&str> {
        self.paths.get(path)?.get(sub_path).map(String::as_str)
    }

    /// Insert a translated string, returning the previous value if any.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        sub_path: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<String> {
        self.paths.entry(path.into()).or_default().insert(sub_path.into(), text.into())
    }

    /// Make sure `path` exists, even without strings.
    pub fn ensure_path(&mut self, path: impl Into<String>) -> &mut PathEntries {
        self.paths.entry(path.into()).or_default()
    }

    /// Iterate over paths and their entries, in order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &PathEntries)> {
        self.paths.iter().map(|(path, entries)| (path.as_str(), entries))
    }

    /// Iterate over every `(path, sub_path, text)` leaf, in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.paths.iter().flat_map(|(path, entries)| {
            entries
                .iter()
                .map(move |(sub_path, text)| (path.as_str(), sub_path.as_str(), text.as_str()))
        })
    }

    /// Number of paths.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of translated strings across all paths.
    pub fn len(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }

    /// Whether the bundle holds no strings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_levels() {
        let bundle =
            Bundle::from_json(r#"{"greet":{"hello":"Hi","bye":"Bye"},"menu":{}}"#).unwrap();

        assert_eq!(bundle.get("greet", "hello"), Some("Hi"));
        assert_eq!(bundle.get("greet", "missing"), None);
        assert_eq!(bundle.get("missing", "hello"), None);
        assert_eq!(bundle.path_count(), 2);
        assert_eq!(bundle.len(), 2);
        assert!(bundle.path("menu").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_string_leaves() {
        assert!(Bundle::from_json(r#"{"greet":{"count":3}}"#).is_err());
        assert!(Bundle::from_json(r#"{"greet":"flat"}"#).is_err());
        assert!(Bundle::from_json(r#"["greet"]"#).is_err());
    }

    #[test]
    fn test_entries_in_insertion_order() {
        let mut bundle = Bundle::new();
        bundle.insert("b", "y", "2");
        bundle.insert("a", "z", "1");
        bundle.insert("b", "x", "3");

        let leaves: Vec<_> = bundle.entries().collect();
        assert_eq!(leaves, vec![("b", "y", "2"), ("b", "x", "3"), ("a", "z", "1")]);
    }

    #[test]
    fn test_json_keeps_file_order() {
        let json = r#"{"zeta":{"second":"2","first":"1"},"alpha":{"only":"x"}}"#;
        let bundle = Bundle::from_json(json).unwrap();

        assert_eq!(bundle.paths().map(|(path, _)| path).collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(bundle.to_json().unwrap(), json);
    }

    #[test]
    fn test_compact_json() {
        let mut bundle = Bundle::new();
        bundle.insert("greet", "hello", "Hola");
        assert_eq!(bundle.to_json().unwrap(), r#"{"greet":{"hello":"Hola"}}"#);
    }

    #[test]
    fn test_read_reports_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("en.json");
        std::fs::write(&path, "{not json").unwrap();

        match Bundle::read(&path) {
            Err(Error::BundleParse { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
