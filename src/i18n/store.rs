//! Loading bundles from disk and publishing them to readers.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use super::{
    bundle::Bundle,
    generator::{self, GenerationObserver, GenerationReport, Target, Translate},
    resolver::MatchOptions,
};
use crate::error::{Error, Result};

/// Extension of bundle files inside the bundle directory.
pub const BUNDLE_EXTENSION: &str = "json";

/// An immutable set of loaded bundles, keyed by language code.
///
/// A catalog always contains the bundle of its default language.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(super) bundles: HashMap<String, Bundle>,
    pub(super) options: MatchOptions,
}

impl Catalog {
    /// Scan `dir` and load every `*.json` file as a bundle.
    ///
    /// Any unreadable or malformed file aborts the load, as does a missing
    /// bundle for the default language.
    pub fn load(dir: &Path, options: MatchOptions) -> Result<Self> {
        let entries = std::fs::read_dir(dir)
            .map_err(|source| Error::BundleRead { path: dir.to_path_buf(), source })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|source| Error::BundleRead { path: dir.to_path_buf(), source })?;
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some(BUNDLE_EXTENSION)
                || !path.is_file()
            {
                continue;
            }

            let Some(code) = path.file_stem().and_then(|stem| stem.to_str()) else {
                tracing::warn!(path = %path.display(), "Skipping bundle with non UTF-8 name");
                continue;
            };

            files.push((code.to_string(), path));
        }
        files.sort();

        let mut bundles = HashMap::with_capacity(files.len());
        for (code, path) in files {
            let bundle = Bundle::read(&path)?;
            tracing::debug!(lang = %code, strings = bundle.len(), "Loaded bundle");
            bundles.insert(code, bundle);
        }

        Self::from_bundles(bundles, options).map_err(|err| match err {
            Error::DefaultBundleMissing { lang, .. } => {
                Error::DefaultBundleMissing { lang, dir: dir.to_path_buf() }
            },
            other => other,
        })
    }

    /// Build a catalog from bundles already in memory.
    pub fn from_bundles(bundles: HashMap<String, Bundle>, options: MatchOptions) -> Result<Self> {
        if !bundles.contains_key(&options.default_lang) {
            return Err(Error::DefaultBundleMissing {
                lang: options.default_lang,
                dir: PathBuf::new(),
            });
        }

        Ok(Self { bundles, options })
    }

    /// Loaded language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Get the bundle of a language.
    pub fn bundle(&self, code: &str) -> Option<&Bundle> {
        self.bundles.get(code)
    }

    /// Whether a bundle exists for the language.
    pub fn contains(&self, code: &str) -> bool {
        self.bundles.contains_key(code)
    }

    /// The default language code. Its bundle is always present.
    pub fn default_language(&self) -> &str {
        &self.options.default_lang
    }

    /// Matching options the catalog was loaded with.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }
}

/// Bundle store backed by a directory, reloadable at runtime.
///
/// Readers take a [`Catalog`] snapshot; a reload builds a fresh catalog
/// first and then swaps it in, so a snapshot is never half built.
#[derive(Debug)]
pub struct BundleStore {
    dir: PathBuf,
    options: MatchOptions,
    current: RwLock<Arc<Catalog>>,
}

impl BundleStore {
    /// Open a store by loading `dir`.
    pub fn open(dir: impl Into<PathBuf>, options: MatchOptions) -> Result<Self> {
        let dir = dir.into();
        let catalog = Catalog::load(&dir, options.clone())?;

        tracing::debug!(
            dir = %dir.display(),
            languages = catalog.bundles.len(),
            "Bundle store opened"
        );

        Ok(Self { dir, options, current: RwLock::new(Arc::new(catalog)) })
    }

    /// Directory the store loads from and generates into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The currently published catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Rescan the directory and publish the result.
    ///
    /// On failure the previous catalog stays published.
    pub fn reload(&self) -> Result<Arc<Catalog>> {
        let catalog = Arc::new(Catalog::load(&self.dir, self.options.clone())?);

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&catalog);
        tracing::debug!(languages = catalog.bundles.len(), "Bundle store reloaded");

        Ok(catalog)
    }

    /// Generate bundles into the store directory, then reload.
    pub async fn generate<T, O>(
        &self,
        source: &str,
        targets: &[Target],
        translator: &T,
        observer: &O,
    ) -> Result<GenerationReport>
    where
        T: Translate,
        O: GenerationObserver,
    {
        let catalog = self.snapshot();
        let report =
            generator::generate(&catalog, &self.dir, source, targets, translator, observer).await?;

        if report.written().next().is_some()
            && let Err(err) = self.reload()
        {
            tracing::warn!(error = %err, "Reload after generation failed");
        }

        Ok(report)
    }
}
