//! Context for CLI command execution.

use std::path::PathBuf;

use crate::{
    config::{CONFIG_FILE, Config},
    error::Result,
    i18n::BundleStore,
    output::Output,
};

/// Everything a command needs: resolved configuration and output settings.
#[derive(Debug)]
pub struct Context {
    /// Directory the config file and relative bundle paths resolve against.
    pub working_dir: PathBuf,

    /// Effective configuration after applying overrides.
    pub config: Config,

    /// Output configuration.
    pub output: Output,
}

impl Context {
    /// Create a new context from CLI options.
    pub fn new(
        working_dir: Option<PathBuf>,
        messages_path: Option<PathBuf>,
        default_lang: Option<String>,
        output_format: &str,
        color: &str,
        quiet: bool,
    ) -> Result<Self> {
        let working_dir = match working_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        let mut config = Config::load(&working_dir);
        if let Some(path) = messages_path {
            config.messages_path = path;
        }
        if let Some(lang) = default_lang {
            config.default_lang = lang;
        }

        let output = Output::from_cli(output_format, color, quiet)?;

        tracing::debug!(
            working_dir = %working_dir.display(),
            messages_path = %config.messages_path.display(),
            default_lang = %config.default_lang,
            "Context created"
        );

        Ok(Self { working_dir, config, output })
    }

    /// The resolved bundle directory.
    pub fn bundle_dir(&self) -> PathBuf {
        self.config.bundle_dir(&self.working_dir)
    }

    /// Load the bundle store from the configured directory.
    pub fn open_store(&self) -> Result<BundleStore> {
        BundleStore::open(self.bundle_dir(), self.config.match_options())
    }

    /// Path of the config file for this working directory.
    pub fn config_file(&self) -> PathBuf {
        self.working_dir.join(CONFIG_FILE)
    }
}
