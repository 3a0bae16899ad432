//! Integration tests for unprefixed-intl.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;
mod generation;
mod store;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the unprefixed-intl binary, isolated from
/// the caller's environment.
fn intl_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("unprefixed-intl"));
    cmd.env_remove("UNPREFIXED_INTL_MESSAGES_PATH")
        .env_remove("UNPREFIXED_INTL_DEFAULT_LANG")
        .env_remove("UNPREFIXED_INTL_LOCALE")
        .env_remove("LIBRETRANSLATE_URL")
        .env("LANG", "C")
        .env("LC_ALL", "C")
        .arg("--dir")
        .arg(dir);
    cmd
}

/// Test that the CLI shows help.
#[test]
fn test_help() {
    let dir = common::project();
    intl_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("translation bundles"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    let dir = common::project();
    intl_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail.
#[test]
fn test_unknown_command() {
    let dir = common::project();
    intl_cmd(dir.path()).arg("unknown-command").assert().failure();
}

#[test]
fn test_languages() {
    let dir = common::project();
    intl_cmd(dir.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("LANGUAGE"))
        .stdout(predicate::str::contains("es"))
        .stdout(predicate::str::contains("yes"));
}

#[test]
fn test_resolve() {
    let dir = common::project();
    intl_cmd(dir.path()).args(["resolve", "fr", "es"]).assert().success().stdout("es\n");
    intl_cmd(dir.path()).args(["resolve", "fr-FR"]).assert().success().stdout("en\n");
    intl_cmd(dir.path())
        .args(["resolve", "--header", "de;q=0.9, es-MX"])
        .assert()
        .success()
        .stdout("es\n");
}

#[test]
fn test_resolve_searches_every_accepted_language() {
    let dir = common::project();
    intl_cmd(dir.path()).args(["resolve", "fr", "de", "it", "es"]).assert().success().stdout("es\n");
    intl_cmd(dir.path())
        .args(["resolve", "--header", "fr-CH, fr;q=0.9, de;q=0.8, it;q=0.7, es-MX;q=0.6"])
        .assert()
        .success()
        .stdout("es\n");
}

#[test]
fn test_resolve_json() {
    let dir = common::project();
    intl_cmd(dir.path())
        .args(["-o", "json", "resolve", "es-AR"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "es""#))
        .stdout(predicate::str::contains(r#""default": false"#));
}

#[test]
fn test_lookup() {
    let dir = common::project();
    intl_cmd(dir.path()).args(["lookup", "greet", "hello", "es"]).assert().success().stdout("Hola\n");
    intl_cmd(dir.path())
        .args(["lookup", "greet", "missing", "es"])
        .assert()
        .success()
        .stdout("greet.missing\n");
}

#[test]
fn test_config_file_is_used() {
    let dir = common::project();
    std::fs::rename(dir.path().join("messages"), dir.path().join("i18n")).unwrap();
    std::fs::write(
        dir.path().join("unprefixed-intl.config.json"),
        r#"{"messagesPath":"i18n","defaultLang":"es","maxAcceptedLanguageSearch":3,"allowLanguageCode":false}"#,
    )
    .unwrap();

    intl_cmd(dir.path()).args(["resolve", "fr"]).assert().success().stdout("es\n");
    intl_cmd(dir.path()).args(["resolve", "en-GB"]).assert().success().stdout("es\n");
}

#[test]
fn test_missing_default_is_fatal() {
    let dir = common::project();
    intl_cmd(dir.path())
        .args(["--default-lang", "de", "languages"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("default language: [de]"));
}

#[test]
fn test_generate_copy() {
    let dir = common::project();
    intl_cmd(dir.path())
        .args(["generate", "--source", "en", "--target", "fr", "--target", "pt:pt-BR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("written"));

    let pt = std::fs::read_to_string(dir.path().join("messages").join("pt-BR.json")).unwrap();
    let pt: serde_json::Value = serde_json::from_str(&pt).unwrap();
    assert_eq!(pt["greet"]["hello"], "Hi");
    assert!(dir.path().join("messages").join("fr.json").exists());
}

#[test]
fn test_generate_unknown_source() {
    let dir = common::project();
    intl_cmd(dir.path())
        .args(["generate", "--source", "xx", "--target", "fr"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Source language 'xx'"));

    assert!(!dir.path().join("messages").join("fr.json").exists());
}

#[test]
fn test_config_show() {
    let dir = common::project();
    intl_cmd(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""defaultLang": "en""#))
        .stdout(predicate::str::contains(r#""messagesPath": "messages""#));
}
