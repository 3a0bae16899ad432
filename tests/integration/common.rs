//! Common test utilities.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

/// Write a bundle file into `dir`.
pub fn write_bundle(dir: &Path, code: &str, json: &str) {
    std::fs::write(dir.join(format!("{code}.json")), json).expect("Failed to write bundle");
}

/// Create a project directory with `messages/en.json` and `messages/es.json`.
pub fn project() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let messages = dir.path().join("messages");
    std::fs::create_dir_all(&messages).expect("Failed to create messages dir");

    write_bundle(&messages, "en", r#"{"greet":{"hello":"Hi","bye":"Bye"},"menu":{"open":"Open"}}"#);
    write_bundle(&messages, "es", r#"{"greet":{"hello":"Hola","bye":"Adiós"}}"#);
    dir
}
