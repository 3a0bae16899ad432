//! Error types for unprefixed-intl.
//!
//! Errors fall into three tiers:
//! - fatal at startup (the store cannot be built, generation cannot start),
//! - recoverable per generation target (reported, never propagated),
//! - soft misses, which are not errors at all: lookups return a placeholder.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (invalid config file, bad override values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The default language has no bundle after a load.
    #[error("The default language was not found, default language: [{lang}], folder: {}", dir.display())]
    DefaultBundleMissing {
        /// Configured default language code.
        lang: String,
        /// Directory that was scanned.
        dir: PathBuf,
    },

    /// The source language of a generation run has no bundle.
    #[error("Source language '{0}' has no bundle")]
    SourceBundleMissing(String),

    /// A bundle file or directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    BundleRead {
        /// File or directory that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A bundle file is not a `{path: {subPath: string}}` JSON object.
    #[error("Failed to parse bundle {}: {source}", path.display())]
    BundleParse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The translation callback failed for a string.
    #[error("Translation failed: {0}")]
    Translation(String),

    /// The process-wide store was already published.
    #[error("Bundle store already initialized")]
    AlreadyInitialized,

    /// HTTP error from a translation backend.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error (file writes, working directory, etc.).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments or configuration
    /// - 3: Bundle store could not be loaded
    /// - 4: Generation could not start
    /// - 10: IO/network error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArgument(_) => 2,

            Self::DefaultBundleMissing { .. } | Self::BundleRead { .. } | Self::BundleParse { .. } => 3,

            Self::SourceBundleMissing(_) => 4,

            Self::Io(_) | Self::Http(_) => 10,

            Self::Translation(_)
            | Self::AlreadyInitialized
            | Self::Json(_)
            | Self::Yaml(_)
            | Self::Other(_) => 1,
        }
    }

    /// Returns true for errors that prevent the store from being used at all.
    pub fn is_fatal_load(&self) -> bool {
        matches!(
            self,
            Self::DefaultBundleMissing { .. } | Self::BundleRead { .. } | Self::BundleParse { .. }
        )
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a translation error.
    pub fn translation(msg: impl Into<String>) -> Self {
        Self::Translation(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
