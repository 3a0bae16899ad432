//! Translation bundles, language matching and bundle generation.
//!
//! Bundles are JSON files named after their language code (`en.json`,
//! `es-MX.json`), each holding `{ path: { subPath: text } }`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use unprefixed_intl::i18n::{self, BundleStore, MatchOptions};
//! use unprefixed_intl::t;
//!
//! // Publish the store once at startup
//! i18n::init(BundleStore::open("messages", MatchOptions::default())?)?;
//!
//! // Look up strings for a request
//! let accepted = i18n::parse_accept_language("es-MX,es;q=0.9");
//! let msg = t!(&accepted, "greet", "hello");
//! ```

mod bundle;
pub mod generator;
mod locales;
mod resolver;
mod store;

pub use bundle::{Bundle, PathEntries};
pub use generator::{GenerationObserver, GenerationReport, Target, TargetOutcome, Translate};
pub use locales::{detect_locale, normalize_locale, parse_accept_language};
pub use resolver::{MatchOptions, Translator, placeholder};
pub use store::{BUNDLE_EXTENSION, BundleStore, Catalog};

use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Process-wide store, published once at startup.
static STORE: OnceLock<BundleStore> = OnceLock::new();

/// Publish the process-wide store.
///
/// Fails with [`Error::AlreadyInitialized`] if a store was already published.
pub fn init(store: BundleStore) -> Result<&'static BundleStore> {
    STORE.set(store).map_err(|_| Error::AlreadyInitialized)?;
    Ok(get())
}

/// Get the process-wide store.
///
/// # Panics
///
/// Panics if `init()` has not been called.
pub fn get() -> &'static BundleStore {
    STORE.get().expect("i18n not initialized - call i18n::init() first")
}

/// Try to get the process-wide store without panicking.
pub fn try_get() -> Option<&'static BundleStore> {
    STORE.get()
}

/// Look up `path.sub_path` in the process-wide store.
///
/// Prefer using the `t!()` macro for ergonomic access.
pub fn translate<S: AsRef<str>>(accepted: &[S], path: &str, sub_path: &str) -> String {
    get().snapshot().translate(path, sub_path, accepted)
}

/// Translation macro for the process-wide store.
///
/// # Examples
///
/// ```rust,ignore
/// let msg = t!(&["es-MX", "en"], "greet", "hello");
/// ```
#[macro_export]
macro_rules! t {
    ($accepted:expr, $path:expr, $sub_path:expr $(,)?) => {
        $crate::i18n::translate($accepted, $path, $sub_path)
    };
}
