//! warikan: weighted bill splitting from the command line.
//!
//! State lives in a small data directory (see [`config`]), so rosters
//! survive between invocations and a computed schedule can be copied or
//! re-printed later.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::clipboard::SystemClipboard;
use crate::commands::WarikanCli;
use crate::config::CliConfig;

mod clipboard;
mod commands;
mod config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = WarikanCli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::load();
    debug!(data_dir = %config.storage.data_dir.display(), "Configuration loaded");

    match cli.execute(&config, &SystemClipboard).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(category = err.category(), error = %err, "Command failed");
            eprintln!("Error: {err}");
            // User mistakes exit like usage errors; environment failures
            // exit with a plain failure code.
            if err.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warikan_cli=debug,warikan_core=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Logs go to stderr so piped schedule output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
