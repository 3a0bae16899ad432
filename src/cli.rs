//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::i18n::Target;

/// unprefixed-intl - JSON translation bundles
#[derive(Parser, Debug)]
#[command(name = "unprefixed-intl")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Working directory holding the config file (defaults to the current directory)
    #[arg(long, global = true, env = "UNPREFIXED_INTL_DIR")]
    pub dir: Option<PathBuf>,

    /// Override the bundle folder
    #[arg(long, global = true)]
    pub messages_path: Option<PathBuf>,

    /// Override the default language
    #[arg(long, global = true)]
    pub default_lang: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "table", value_parser = ["table", "json", "yaml"])]
    pub output: String,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_parser = ["auto", "always", "never"])]
    pub color: String,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List loaded languages
    #[command(alias = "langs")]
    Languages,

    /// Show which language is served for a list of accepted languages
    Resolve {
        /// Accepted languages, most preferred first (e.g., es-MX es)
        langs: Vec<String>,

        /// Accept-Language header to parse, tried after LANGS
        #[arg(long)]
        header: Option<String>,
    },

    /// Look up a translated string
    Lookup {
        /// Path of the string (e.g., greet)
        path: String,

        /// Sub-path within the path (e.g., hello)
        sub_path: String,

        /// Accepted languages, most preferred first
        langs: Vec<String>,

        /// Accept-Language header to parse, tried after LANGS
        #[arg(long)]
        header: Option<String>,
    },

    /// Generate bundles by translating a source bundle
    Generate {
        /// Source language (defaults to the default language)
        #[arg(long, short)]
        source: Option<String>,

        /// Target as <code> or <code>:<file-name> (repeatable)
        #[arg(long = "target", short, required = true)]
        targets: Vec<Target>,

        /// Translation backend
        #[arg(long, value_enum, default_value = "copy")]
        backend: BackendKind,

        /// Base URL of the translation service
        #[arg(long, env = "LIBRETRANSLATE_URL")]
        endpoint: Option<String>,

        /// API key for the translation service
        #[arg(long, env = "LIBRETRANSLATE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Stop all targets after the first failure
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Translation backends for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Copy source strings unchanged.
    Copy,
    /// LibreTranslate-compatible HTTP service (needs --endpoint).
    Libretranslate,
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}
