//! unprefixed-intl CLI
//!
//! Command-line interface for JSON translation bundles.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match unprefixed_intl::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Don't print if it's an empty error (e.g., from clap parse failures)
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {e}");

                if e.is_fatal_load() {
                    eprintln!();
                    eprintln!("Run 'unprefixed-intl config' to check the bundle folder.");
                }
            }

            let code = e.exit_code();
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        },
    }
}
