//! Command implementations for the unprefixed-intl CLI.
//!
//! Each submodule implements a group of related commands.

mod bundles;
mod generate;

pub use bundles::{config, languages, lookup, resolve};
pub use generate::generate;

use crate::{cli::Commands, context::Context, error::Result, i18n};

/// Execute a CLI command.
pub async fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Languages => languages(ctx),
        Commands::Resolve { langs, header } => resolve(ctx, langs, header.as_deref()),
        Commands::Lookup { path, sub_path, langs, header } => {
            lookup(ctx, path, sub_path, langs, header.as_deref())
        },
        Commands::Generate { source, targets, backend, endpoint, api_key, stop_on_error } => {
            generate(
                ctx,
                source.as_deref(),
                targets,
                *backend,
                endpoint.as_deref(),
                api_key.clone(),
                *stop_on_error,
            )
            .await
        },
        Commands::Config => config(ctx),
        Commands::Completion { shell } => completion(shell),
    }
}

/// Build the ordered candidate list from positional languages and an
/// optional Accept-Language header. Falls back to the environment locale.
pub(crate) fn accepted_languages(langs: &[String], header: Option<&str>) -> Vec<String> {
    let mut accepted = langs.to_vec();
    if let Some(header) = header {
        accepted.extend(i18n::parse_accept_language(header));
    }

    if accepted.is_empty()
        && let Some(locale) = i18n::detect_locale()
    {
        tracing::debug!(locale = %locale, "Using locale from environment");
        accepted.push(locale);
    }

    accepted
}

fn completion(shell: &crate::cli::Shell) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Generator, generate};

    let mut cmd = crate::cli::Cli::command();

    fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
        generate(generator, cmd, cmd.get_name().to_string(), &mut std::io::stdout());
    }

    match shell {
        crate::cli::Shell::Bash => print_completions(clap_complete::shells::Bash, &mut cmd),
        crate::cli::Shell::Zsh => print_completions(clap_complete::shells::Zsh, &mut cmd),
        crate::cli::Shell::Fish => print_completions(clap_complete::shells::Fish, &mut cmd),
        crate::cli::Shell::PowerShell => {
            print_completions(clap_complete::shells::PowerShell, &mut cmd);
        },
    }

    Ok(())
}
