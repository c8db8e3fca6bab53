//! # axiomor
//!
//! Command line front end for the Axiomor provider comparison site.
//!
//! ## Usage
//!
//! ```bash
//! # Export the static site
//! axiomor render --out dist
//!
//! # Inspect the provider catalog
//! axiomor catalog --json
//!
//! # Watch the popup controller run in real time
//! axiomor preview --dismiss-after-ms 4000 --dismiss-with decline
//! ```

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Command};

fn run(cli: Cli) -> Result<()> {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("axiomor v{}", env!("CARGO_PKG_VERSION"));

    let sources = cli.sources;
    match cli.command {
        Command::Render(args) => commands::render::run(&sources, &args),
        Command::Catalog(args) => commands::catalog::run(&sources, &args),
        Command::Preview(args) => commands::preview::run(&sources, &args),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[axiomor] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
