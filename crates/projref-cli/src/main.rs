//! Project reference auditor CLI
//!
//! Thin driver around projref-core: finds descriptors under the target
//! path, runs each scan to completion, and renders the reports.

mod cli;
mod error;
mod output;
mod scan;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

/// Alternate help spellings kept from the tool's original surface. clap
/// would read `/?` as a path and reject `-?` outright, so they are handled
/// before parsing.
const HELP_TOKENS: [&str; 3] = ["-?", "/?", "/help"];

fn main() {
    if std::env::args()
        .skip(1)
        .any(|arg| HELP_TOKENS.contains(&arg.as_str()))
    {
        let _ = Cli::command().print_help();
        return;
    }

    match run() {
        Ok(()) => {}
        Err(e @ CliError::UnexpectedArgument { .. }) => {
            eprintln!("{e}\n");
            let _ = Cli::command().print_help();
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    scan::run_scan(&cli)
}
