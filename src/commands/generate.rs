//! The `generate` command.

use serde::Serialize;

use crate::{
    backend::{Backend, LibreTranslateClient},
    cli::BackendKind,
    context::Context,
    error::{Error, Result},
    i18n::{GenerationObserver, Target, TargetOutcome},
    output::{Displayable, Output},
};

/// Reports progress as targets finish and applies `--stop-on-error`.
struct ProgressObserver<'a> {
    output: &'a Output,
    stop_on_error: bool,
}

impl GenerationObserver for ProgressObserver<'_> {
    fn on_success(&self, target: &str) -> bool {
        self.output.success(&format!("Generated {target}"));
        true
    }

    fn on_error(&self, target: &str, error: &Error) -> bool {
        self.output.error(&format!("Failed to generate {target}: {error}"));
        if self.stop_on_error {
            self.output.warn("Stopping remaining targets");
        }
        !self.stop_on_error
    }
}

/// One row of the generation summary.
#[derive(Debug, Serialize)]
struct OutcomeRow {
    language: String,
    file: String,
    status: &'static str,
    detail: String,
}

impl From<&TargetOutcome> for OutcomeRow {
    fn from(outcome: &TargetOutcome) -> Self {
        let target = outcome.target();
        let (status, detail) = match outcome {
            TargetOutcome::Written { path, .. } => ("written", path.display().to_string()),
            TargetOutcome::Failed { error, .. } => ("failed", error.to_string()),
            TargetOutcome::Cancelled { .. } => ("cancelled", String::new()),
        };

        Self {
            language: target.code.clone(),
            file: format!("{}.{}", target.file_name, crate::i18n::BUNDLE_EXTENSION),
            status,
            detail,
        }
    }
}

impl Displayable for OutcomeRow {
    fn table_row(&self) -> Vec<String> {
        vec![self.language.clone(), self.file.clone(), self.status.to_string(), self.detail.clone()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["LANGUAGE", "FILE", "STATUS", "DETAIL"]
    }
}

fn build_backend(
    kind: BackendKind,
    source: &str,
    endpoint: Option<&str>,
    api_key: Option<String>,
) -> Result<Backend> {
    match kind {
        BackendKind::Copy => Ok(Backend::Copy),
        BackendKind::Libretranslate => {
            let endpoint = endpoint.ok_or_else(|| {
                Error::invalid_arg("--endpoint (or LIBRETRANSLATE_URL) is required for libretranslate")
            })?;
            Ok(Backend::LibreTranslate(LibreTranslateClient::new(endpoint, source, api_key)?))
        },
    }
}

/// Generate bundles for every target from the source bundle.
pub async fn generate(
    ctx: &Context,
    source: Option<&str>,
    targets: &[Target],
    backend: BackendKind,
    endpoint: Option<&str>,
    api_key: Option<String>,
    stop_on_error: bool,
) -> Result<()> {
    let source = source.unwrap_or(&ctx.config.default_lang);
    let backend = build_backend(backend, source, endpoint, api_key)?;
    let store = ctx.open_store()?;

    ctx.output.info(&format!(
        "Generating {} bundle(s) from '{}' with the {} backend...",
        targets.len(),
        source,
        backend.name()
    ));

    let observer = ProgressObserver { output: &ctx.output, stop_on_error };
    let report = store.generate(source, targets, &backend, &observer).await?;

    let rows: Vec<OutcomeRow> = report.outcomes().iter().map(OutcomeRow::from).collect();
    ctx.output.table(&rows)?;

    if report.is_complete() {
        Ok(())
    } else {
        let incomplete = report.failed().count() + report.cancelled().count();
        Err(Error::other(format!("{incomplete} of {} target(s) were not generated", targets.len())))
    }
}
