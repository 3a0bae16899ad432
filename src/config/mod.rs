//! Configuration for unprefixed-intl.
//!
//! Resolution order (highest to lowest):
//! 1. Command-line flags (handled by the CLI)
//! 2. Environment variables: `UNPREFIXED_INTL_*`
//! 3. `unprefixed-intl.config.json` in the working directory
//! 4. Convention defaults (`src/messages` if present, else `messages`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{Error, Result},
    i18n::MatchOptions,
};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "unprefixed-intl.config.json";

/// Bundle directory used when `src/messages` exists.
const SRC_MESSAGES_DIR: &str = "src/messages";

/// Bundle directory used otherwise.
const MESSAGES_DIR: &str = "messages";

/// Runtime configuration.
///
/// Every field is required in the config file; a file missing any of them
/// is rejected as a whole and the convention defaults are used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Folder holding the `<lang>.json` bundles, relative to the working
    /// directory unless absolute.
    pub messages_path: PathBuf,

    /// Language used when no preferred language is available.
    pub default_lang: String,

    /// Advisory bound on how many preferred languages a lookup searches.
    ///
    /// Any JSON number is accepted; negative values mean no bound and
    /// fractions are truncated.
    #[serde(deserialize_with = "deserialize_search_bound")]
    pub max_accepted_language_search: usize,

    /// Fall back from `en-US` to `en` when only `en.json` exists.
    pub allow_language_code: bool,
}

fn deserialize_search_bound<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let bound = f64::deserialize(deserializer)?;
    Ok(if bound.is_finite() && bound >= 1.0 { bound as usize } else { 0 })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_path: PathBuf::from(MESSAGES_DIR),
            default_lang: "en".to_string(),
            max_accepted_language_search: 3,
            allow_language_code: true,
        }
    }
}

impl Config {
    /// Load configuration for `working_dir`.
    ///
    /// A missing or invalid config file is not an error: it is logged and
    /// the convention defaults are used.
    pub fn load(working_dir: &Path) -> Self {
        let path = working_dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            match Self::load_from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "Falling back to default configuration");
                    Self::fallback(working_dir)
                },
            }
        } else {
            tracing::debug!(path = %path.display(), "Config file not found");
            Self::fallback(working_dir)
        };

        config.apply_env_overrides();
        config
    }

    /// Load configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Convention defaults for `working_dir`.
    pub fn fallback(working_dir: &Path) -> Self {
        let messages_path = if working_dir.join(SRC_MESSAGES_DIR).is_dir() {
            SRC_MESSAGES_DIR
        } else {
            MESSAGES_DIR
        };

        Self { messages_path: PathBuf::from(messages_path), ..Self::default() }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("UNPREFIXED_INTL_MESSAGES_PATH")
            && !path.is_empty()
        {
            self.messages_path = PathBuf::from(path);
        }

        if let Ok(lang) = std::env::var("UNPREFIXED_INTL_DEFAULT_LANG")
            && !lang.is_empty()
        {
            self.default_lang = lang;
        }
    }

    /// The bundle directory, resolved against `working_dir`.
    #[must_use]
    pub fn bundle_dir(&self, working_dir: &Path) -> PathBuf {
        if self.messages_path.is_absolute() {
            self.messages_path.clone()
        } else {
            working_dir.join(&self.messages_path)
        }
    }

    /// Language matching options derived from this configuration.
    #[must_use]
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            default_lang: self.default_lang.clone(),
            max_accepted_language_search: self.max_accepted_language_search,
            allow_language_code: self.allow_language_code,
        }
    }
}
