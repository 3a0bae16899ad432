//! Generating new bundles by translating a source bundle.
//!
//! Every target runs concurrently on the calling task. A target walks the
//! source bundle, translates each string, and writes
//! `<dir>/<file_name>.json` once all strings are done. Observers can stop
//! the whole run by returning `false` from a callback; targets check the
//! shared flag before each string and stop without writing anything.

use std::{
    collections::HashSet,
    fmt,
    future::Future,
    path::{Path, PathBuf},
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};

use futures::future::join_all;

use super::{bundle::Bundle, store::Catalog};
use crate::error::{Error, Result};

/// Translates one string into a target language.
///
/// Implemented for closures `Fn(String, String) -> impl Future<Output = Result<String>>`
/// taking the text and the target language code.
pub trait Translate {
    /// Translate `text` into `target`.
    fn translate(&self, text: &str, target: &str) -> impl Future<Output = Result<String>>;
}

impl<F, Fut> Translate for F
where
    F: Fn(String, String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    fn translate(&self, text: &str, target: &str) -> impl Future<Output = Result<String>> {
        self(text.to_string(), target.to_string())
    }
}

/// Receives per-target outcomes while a generation runs.
///
/// Returning `false` from either callback cancels the remaining work of
/// every target.
pub trait GenerationObserver {
    /// Called after a target's file was written.
    fn on_success(&self, target: &str) -> bool {
        let _ = target;
        true
    }

    /// Called when translating or writing a target failed.
    fn on_error(&self, target: &str, error: &Error) -> bool {
        let _ = (target, error);
        true
    }
}

/// Observer that never cancels.
impl GenerationObserver for () {}

/// A language to generate and the file base name to write it to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// Language code passed to the translator.
    pub code: String,
    /// Output file name without the `.json` extension.
    pub file_name: String,
}

impl Target {
    /// Create a target writing to `<file_name>.json`.
    pub fn new(code: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self { code: code.into(), file_name: file_name.into() }
    }

    /// Create a target whose file is named after its code.
    pub fn same_name(code: impl Into<String>) -> Self {
        let code = code.into();
        Self { file_name: code.clone(), code }
    }
}

impl FromStr for Target {
    type Err = Error;

    /// Parse `code` or `code:file_name`.
    fn from_str(s: &str) -> Result<Self> {
        let (code, file_name) = s.split_once(':').unwrap_or((s, s));

        if code.is_empty() || file_name.is_empty() {
            return Err(Error::invalid_arg(format!(
                "Invalid target '{s}'. Use <code> or <code>:<file-name>"
            )));
        }
        validate_file_name(file_name)?;

        Ok(Self::new(code, file_name))
    }
}

/// Reject file names that would land outside the bundle directory.
fn validate_file_name(file_name: &str) -> Result<()> {
    if file_name.is_empty() || file_name == "." || file_name == ".." {
        return Err(Error::invalid_arg(format!("Invalid target file name '{file_name}'")));
    }
    if file_name.contains(['/', '\\']) {
        return Err(Error::invalid_arg(format!(
            "Target file name '{file_name}' must not contain path separators"
        )));
    }
    Ok(())
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code == self.file_name {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}:{}", self.code, self.file_name)
        }
    }
}

/// What happened to one target.
#[derive(Debug)]
pub enum TargetOutcome {
    /// The bundle was written.
    Written {
        /// The target.
        target: Target,
        /// File that was written.
        path: PathBuf,
    },
    /// Translating or writing failed.
    Failed {
        /// The target.
        target: Target,
        /// The failure, as passed to the observer.
        error: Error,
    },
    /// The run was cancelled before this target finished translating.
    Cancelled {
        /// The target.
        target: Target,
    },
}

impl TargetOutcome {
    /// The target this outcome belongs to.
    pub fn target(&self) -> &Target {
        match self {
            Self::Written { target, .. } | Self::Failed { target, .. } | Self::Cancelled { target } => {
                target
            },
        }
    }
}

/// Outcomes of a generation run, in target order.
#[derive(Debug)]
pub struct GenerationReport {
    outcomes: Vec<TargetOutcome>,
}

impl GenerationReport {
    /// All outcomes, in the order targets were given.
    pub fn outcomes(&self) -> &[TargetOutcome] {
        &self.outcomes
    }

    /// Targets whose files were written, with their paths.
    pub fn written(&self) -> impl Iterator<Item = (&Target, &Path)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            TargetOutcome::Written { target, path } => Some((target, path.as_path())),
            _ => None,
        })
    }

    /// Targets that failed, with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (&Target, &Error)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            TargetOutcome::Failed { target, error } => Some((target, error)),
            _ => None,
        })
    }

    /// Targets that stopped because of cancellation.
    pub fn cancelled(&self) -> impl Iterator<Item = &Target> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            TargetOutcome::Cancelled { target } => Some(target),
            _ => None,
        })
    }

    /// Whether every target was written.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|outcome| matches!(outcome, TargetOutcome::Written { .. }))
    }
}

/// Translate the `source` bundle of `catalog` into every target and write
/// the results into `dir`.
///
/// Fails before translating anything when `source` has no bundle. Per-target
/// failures are reported to `observer` and in the returned report.
pub async fn generate<T, O>(
    catalog: &Catalog,
    dir: &Path,
    source: &str,
    targets: &[Target],
    translator: &T,
    observer: &O,
) -> Result<GenerationReport>
where
    T: Translate,
    O: GenerationObserver,
{
    let bundle =
        catalog.bundle(source).ok_or_else(|| Error::SourceBundleMissing(source.to_string()))?;

    warn_collisions(source, targets);
    tracing::debug!(
        source,
        targets = targets.len(),
        strings = bundle.len(),
        "Starting bundle generation"
    );

    let cancelled = AtomicBool::new(false);
    let runs = targets
        .iter()
        .map(|target| run_target(bundle, dir, target, translator, observer, &cancelled));

    Ok(GenerationReport { outcomes: join_all(runs).await })
}

async fn run_target<T, O>(
    source: &Bundle,
    dir: &Path,
    target: &Target,
    translator: &T,
    observer: &O,
    cancelled: &AtomicBool,
) -> TargetOutcome
where
    T: Translate,
    O: GenerationObserver,
{
    let translated = match translate_bundle(source, &target.code, translator, cancelled).await {
        Ok(Some(bundle)) => bundle,
        Ok(None) => {
            tracing::debug!(lang = %target, "Generation cancelled");
            return TargetOutcome::Cancelled { target: target.clone() };
        },
        Err(error) => return fail(target, error, observer, cancelled),
    };

    match write_bundle(dir, &target.file_name, &translated).await {
        Ok(path) => {
            tracing::info!(lang = %target, path = %path.display(), "Bundle written");
            if !observer.on_success(&target.code) {
                cancelled.store(true, Ordering::SeqCst);
            }
            TargetOutcome::Written { target: target.clone(), path }
        },
        Err(error) => fail(target, error, observer, cancelled),
    }
}

fn fail<O: GenerationObserver>(
    target: &Target,
    error: Error,
    observer: &O,
    cancelled: &AtomicBool,
) -> TargetOutcome {
    tracing::warn!(lang = %target, error = %error, "Generation failed");
    if !observer.on_error(&target.code, &error) {
        cancelled.store(true, Ordering::SeqCst);
    }
    TargetOutcome::Failed { target: target.clone(), error }
}

/// Translate every string of `source`. Returns `None` once cancelled.
async fn translate_bundle<T: Translate>(
    source: &Bundle,
    target: &str,
    translator: &T,
    cancelled: &AtomicBool,
) -> Result<Option<Bundle>> {
    let mut translated = Bundle::new();

    for (path, entries) in source.paths() {
        // A path without strings keeps its place in the output.
        let out = translated.ensure_path(path);

        for (sub_path, text) in entries {
            if cancelled.load(Ordering::SeqCst) {
                return Ok(None);
            }
            let text = translator.translate(text, target).await?;
            out.insert(sub_path.clone(), text);
        }
    }

    Ok(Some(translated))
}

async fn write_bundle(dir: &Path, file_name: &str, bundle: &Bundle) -> Result<PathBuf> {
    validate_file_name(file_name)?;
    let path = dir.join(format!("{file_name}.{}", super::store::BUNDLE_EXTENSION));
    tokio::fs::write(&path, bundle.to_json()?).await?;
    Ok(path)
}

fn warn_collisions(source: &str, targets: &[Target]) {
    let mut seen = HashSet::new();
    for target in targets {
        if target.file_name == source {
            tracing::warn!(lang = %target, "Target overwrites the source bundle");
        }
        if !seen.insert(target.file_name.as_str()) {
            tracing::warn!(lang = %target, "Target file name used more than once");
        }
    }
}
