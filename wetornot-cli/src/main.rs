//! Binary crate for the `wetornot` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Mapping failures to console messages and exit codes
//! - Logging setup

use std::io;
use std::process::ExitCode;

use clap::Parser;
use wetornot_core::{Clock, OpenMeteoConfig, provider_from_config};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    let provider = provider_from_config(&OpenMeteoConfig::default());

    match cmd.run(provider.as_ref(), &Clock::system(), &mut io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(e) = cli::print_error(&err, &mut io::stdout(), &mut io::stderr()) {
                tracing::error!("Failed to print error message: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
