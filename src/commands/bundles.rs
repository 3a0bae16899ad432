//! Read-only commands over the loaded bundles.

use serde::Serialize;

use super::accepted_languages;
use crate::{
    context::Context,
    error::Result,
    output::{Displayable, OutputFormat},
};

/// A loaded language, as listed by `languages`.
#[derive(Debug, Serialize)]
struct LanguageRow {
    language: String,
    paths: usize,
    strings: usize,
    default: bool,
}

impl Displayable for LanguageRow {
    fn table_row(&self) -> Vec<String> {
        vec![
            self.language.clone(),
            self.paths.to_string(),
            self.strings.to_string(),
            if self.default { "yes".to_string() } else { String::new() },
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["LANGUAGE", "PATHS", "STRINGS", "DEFAULT"]
    }
}

/// List loaded languages.
pub fn languages(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let catalog = store.snapshot();

    let rows: Vec<LanguageRow> = catalog
        .languages()
        .into_iter()
        .filter_map(|code| {
            let bundle = catalog.bundle(code)?;
            Some(LanguageRow {
                language: code.to_string(),
                paths: bundle.path_count(),
                strings: bundle.len(),
                default: code == catalog.default_language(),
            })
        })
        .collect();

    ctx.output.table(&rows)
}

/// Show the language served for the accepted languages.
pub fn resolve(ctx: &Context, langs: &[String], header: Option<&str>) -> Result<()> {
    #[derive(Serialize)]
    struct ResolveOutput<'a> {
        language: &'a str,
        accepted: &'a [String],
        default: bool,
    }

    let store = ctx.open_store()?;
    let catalog = store.snapshot();
    let accepted = accepted_languages(langs, header);
    let language = catalog.best_match(&accepted);

    if ctx.output.format() == OutputFormat::Table {
        ctx.output.line(language);
        Ok(())
    } else {
        ctx.output.value(&ResolveOutput {
            language,
            accepted: &accepted,
            default: language == catalog.default_language(),
        })
    }
}

/// Look up a translated string.
pub fn lookup(
    ctx: &Context,
    path: &str,
    sub_path: &str,
    langs: &[String],
    header: Option<&str>,
) -> Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct LookupOutput<'a> {
        language: &'a str,
        path: &'a str,
        sub_path: &'a str,
        text: &'a str,
        found: bool,
    }

    let store = ctx.open_store()?;
    let catalog = store.snapshot();
    let translator = catalog.translator(path, accepted_languages(langs, header));
    let found = catalog.bundle(translator.language()).and_then(|b| b.get(path, sub_path)).is_some();
    let text = translator.get(sub_path);

    if ctx.output.format() == OutputFormat::Table {
        if !found {
            ctx.output.warn(&format!("No translation for {path}.{sub_path} in {}", translator.language()));
        }
        ctx.output.line(&text);
        Ok(())
    } else {
        ctx.output.value(&LookupOutput {
            language: translator.language(),
            path,
            sub_path,
            text: &text,
            found,
        })
    }
}

/// Show the effective configuration.
pub fn config(ctx: &Context) -> Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ConfigOutput<'a> {
        #[serde(flatten)]
        config: &'a crate::config::Config,
        config_file: Option<String>,
        bundle_dir: String,
    }

    let config_file = ctx.config_file();
    ctx.output.value(&ConfigOutput {
        config: &ctx.config,
        config_file: config_file.exists().then(|| config_file.display().to_string()),
        bundle_dir: ctx.bundle_dir().display().to_string(),
    })
}
