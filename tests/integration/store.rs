//! Bundle store and lookup scenarios through the public API.

use unprefixed_intl::{
    Error,
    i18n::{self, BundleStore, MatchOptions},
};

use crate::common;

fn open(dir: &std::path::Path, options: MatchOptions) -> BundleStore {
    BundleStore::open(dir.join("messages"), options).unwrap()
}

#[test]
fn test_scenario_lookup() {
    let dir = common::project();
    let store = open(dir.path(), MatchOptions::default());
    let catalog = store.snapshot();

    assert_eq!(catalog.best_match(["fr", "es"]), "es");
    assert_eq!(catalog.best_match(["fr-FR"]), "en");

    let t = catalog.translator("greet", ["es"]);
    assert_eq!(t.get("hello"), "Hola");
    assert_eq!(t.get("bye"), "Adiós");
    assert_eq!(t.get("nope"), "greet.nope");

    // Path present in the default bundle only.
    assert_eq!(catalog.translator("menu", ["es"]).get("open"), "menu.open");
    assert_eq!(catalog.translator("menu", ["de"]).get("open"), "Open");
}

#[test]
fn test_accept_language_header_to_lookup() {
    let dir = common::project();
    let store = open(dir.path(), MatchOptions::default());
    let catalog = store.snapshot();

    let accepted = i18n::parse_accept_language("fr-CH, fr;q=0.9, es-MX;q=0.8, en;q=0.7");
    assert_eq!(catalog.translate("greet", "hello", &accepted), "Hola");
}

#[test]
fn test_region_prefix_can_be_disabled() {
    let dir = common::project();
    let options = MatchOptions { allow_language_code: false, ..MatchOptions::default() };
    let store = open(dir.path(), options);

    assert_eq!(store.snapshot().best_match(["es-MX"]), "en");
}

#[test]
fn test_reload_publishes_new_bundles() {
    let dir = common::project();
    let store = open(dir.path(), MatchOptions::default());
    let before = store.snapshot();

    common::write_bundle(&dir.path().join("messages"), "de", r#"{"greet":{"hello":"Hallo"}}"#);
    assert!(!store.snapshot().contains("de"));

    store.reload().unwrap();
    assert_eq!(store.snapshot().translate("greet", "hello", ["de-AT"]), "Hallo");
    assert_eq!(before.translate("greet", "hello", ["de-AT"]), "Hi");
}

#[test]
fn test_broken_bundle_aborts_load() {
    let dir = common::project();
    common::write_bundle(&dir.path().join("messages"), "it", r#"{"greet":{"hello":1}}"#);

    let err = BundleStore::open(dir.path().join("messages"), MatchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::BundleParse { ref path, .. } if path.ends_with("it.json")));
    assert!(err.is_fatal_load());
}

/// The only test that publishes the process-wide store.
#[test]
fn test_process_wide_store() {
    let dir = common::project();

    let store = i18n::init(open(dir.path(), MatchOptions::default())).unwrap();
    assert!(std::ptr::eq(store, i18n::get()));
    assert!(i18n::try_get().is_some());

    assert_eq!(unprefixed_intl::t!(&["es"], "greet", "hello"), "Hola");
    assert_eq!(unprefixed_intl::t!(&["es"], "greet", "gone"), "greet.gone");

    let again = i18n::init(open(dir.path(), MatchOptions::default()));
    assert!(matches!(again, Err(Error::AlreadyInitialized)));
}
