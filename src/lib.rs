//! unprefixed-intl
//!
//! Runtime translations from a folder of JSON bundles, one file per
//! language (`en.json`, `es-MX.json`), each shaped
//! `{ path: { subPath: text } }`.
//!
//! ## Library
//!
//! ```rust,ignore
//! use unprefixed_intl::i18n::{BundleStore, MatchOptions};
//!
//! let store = BundleStore::open("messages", MatchOptions::default())?;
//! let catalog = store.snapshot();
//!
//! let t = catalog.translator("greet", ["es-MX", "en"]);
//! assert_eq!(t.get("hello"), "Hola");
//! assert_eq!(t.get("missing"), "greet.missing");
//! ```
//!
//! ## CLI
//!
//! ```bash
//! unprefixed-intl languages
//! unprefixed-intl resolve --header "es-MX,es;q=0.9,en;q=0.8"
//! unprefixed-intl lookup greet hello es-MX
//! unprefixed-intl generate --source en --target de --target pt:pt-BR
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod output;

pub use cli::Cli;
pub use error::{Error, Result};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments and
/// dispatching to the appropriate command handler.
pub async fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            // Exit successfully for help/version, otherwise return error
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::other("")),
            }
        },
    };

    // Initialize logging if debug mode
    if cli_args.debug {
        init_logging();
    }

    let ctx = context::Context::new(
        cli_args.dir,
        cli_args.messages_path,
        cli_args.default_lang,
        &cli_args.output,
        &cli_args.color,
        cli_args.quiet,
    )?;

    commands::execute(&ctx, &cli_args.command).await
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("unprefixed_intl=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
