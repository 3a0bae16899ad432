//! Translation backends used by the `generate` command.
//!
//! The library accepts any [`Translate`] implementation; these are the ones
//! the CLI can build from its flags.

mod libretranslate;

pub use libretranslate::LibreTranslateClient;

use crate::{error::Result, i18n::Translate};

/// A translation backend selected on the command line.
#[derive(Debug)]
pub enum Backend {
    /// Copy the source strings unchanged, to scaffold a new bundle.
    Copy,
    /// A LibreTranslate-compatible HTTP service.
    LibreTranslate(LibreTranslateClient),
}

impl Backend {
    /// Short name for logs and output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::LibreTranslate(_) => "libretranslate",
        }
    }
}

impl Translate for Backend {
    async fn translate(&self, text: &str, target: &str) -> Result<String> {
        match self {
            Self::Copy => Ok(text.to_string()),
            Self::LibreTranslate(client) => client.translate(text, target).await,
        }
    }
}
