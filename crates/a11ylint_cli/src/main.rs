//! a11ylint CLI
//!
//! Checks HTML document trees against WCAG success criteria.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Check {
            files,
            format,
            summary,
        } => commands::check::run_check(&cli, files, *format, *summary),
        Commands::Init { force } => {
            commands::init::run_init(cli.config.as_deref(), *force).map(|_| false)
        }
        Commands::Rules { json } => commands::rules::run_rules(*json).map(|_| false),
    }
}
