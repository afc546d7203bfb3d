//! Store Search - search the iTunes Store catalog from the command line.
//!
//! Results from the Search API are normalized into one display model and
//! sorted by name. Only one search is active at a time; starting a new one
//! supersedes the previous request.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays clean for --json output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("store_search=info")),
        )
        .init();

    cli::run_command(&args)
}
