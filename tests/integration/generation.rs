//! Bundle generation through the public API.

use std::cell::RefCell;

use tokio::sync::Notify;
use unprefixed_intl::{
    Error,
    i18n::{Bundle, BundleStore, GenerationObserver, MatchOptions, Target},
};

use crate::common;

fn open(dir: &std::path::Path) -> BundleStore {
    BundleStore::open(dir.join("messages"), MatchOptions::default()).unwrap()
}

/// Stops the run on the first error and releases the gated translator.
struct StopOnError<'a> {
    gate: &'a Notify,
}

impl GenerationObserver for StopOnError<'_> {
    fn on_error(&self, _target: &str, _error: &Error) -> bool {
        self.gate.notify_one();
        false
    }
}

#[tokio::test]
async fn test_identity_generation_round_trips() {
    let dir = common::project();
    let store = open(dir.path());
    let identity = |text: String, _target: String| async move { Ok::<_, Error>(text) };

    let report = store.generate("en", &[Target::same_name("copy")], &identity, &()).await.unwrap();
    assert!(report.is_complete());

    // The store reloads after writing, so the copy is served right away.
    let catalog = store.snapshot();
    assert_eq!(catalog.bundle("copy"), catalog.bundle("en"));
    assert_eq!(catalog.translate("menu", "open", ["copy"]), "Open");
}

#[tokio::test]
async fn test_generated_file_matches_bundle_format() {
    let dir = common::project();
    let store = open(dir.path());
    let upper = |text: String, _target: String| async move { Ok::<_, Error>(text.to_uppercase()) };

    store.generate("es", &[Target::new("es", "es-UP")], &upper, &()).await.unwrap();

    let written = Bundle::read(&dir.path().join("messages").join("es-UP.json")).unwrap();
    assert_eq!(written.get("greet", "bye"), Some("ADIÓS"));
    assert_eq!(written.path_count(), 1);
    assert_eq!(written.len(), 2);
}

#[tokio::test]
async fn test_unknown_source_translates_nothing() {
    let dir = common::project();
    let store = open(dir.path());
    let calls = RefCell::new(0);
    let translate = |text: String, _target: String| {
        *calls.borrow_mut() += 1;
        async move { Ok::<_, Error>(text) }
    };

    let err = store.generate("xx", &[Target::same_name("fr")], &translate, &()).await.unwrap_err();

    assert!(matches!(err, Error::SourceBundleMissing(_)));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(*calls.borrow(), 0);
    assert!(!store.snapshot().contains("fr"));
}

#[tokio::test]
async fn test_cancel_stops_in_flight_target() {
    let dir = common::project();
    let store = open(dir.path());
    let gate = Notify::new();
    let calls = RefCell::new(Vec::new());

    // "fr" finishes at once, "es" waits on its first string until "de" fails.
    let translate = |text: String, target: String| {
        calls.borrow_mut().push(target.clone());
        let gate = &gate;
        async move {
            match target.as_str() {
                "es" => {
                    gate.notified().await;
                    Ok(text)
                },
                "de" => Err(Error::translation("service unavailable")),
                _ => Ok(text),
            }
        }
    };
    let observer = StopOnError { gate: &gate };

    let targets = [Target::same_name("fr"), Target::new("es", "es-ES"), Target::same_name("de")];
    let report = store.generate("en", &targets, &translate, &observer).await.unwrap();

    let calls = calls.take();
    assert_eq!(calls.iter().filter(|code| *code == "es").count(), 1);
    assert_eq!(calls.iter().filter(|code| *code == "de").count(), 1);

    assert_eq!(report.written().map(|(t, _)| t.code.as_str()).collect::<Vec<_>>(), vec!["fr"]);
    assert_eq!(report.failed().map(|(t, _)| t.code.as_str()).collect::<Vec<_>>(), vec!["de"]);
    assert_eq!(report.cancelled().map(|t| t.code.as_str()).collect::<Vec<_>>(), vec!["es"]);
    assert!(!report.is_complete());

    let messages = dir.path().join("messages");
    assert!(messages.join("fr.json").exists());
    assert!(!messages.join("es-ES.json").exists());
    assert!(!messages.join("de.json").exists());
}
