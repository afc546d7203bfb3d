//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `search`: Catalog search
//! - `config`: Configuration inspection

mod config;
mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use config::cmd_config;
pub use search::cmd_search;

use crate::catalog::Category;

/// Store Search CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the standard location
    #[arg(long, global = true, env = "STORE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog
    Search {
        /// Search text (multiple words are joined with spaces)
        #[arg(required = true)]
        term: Vec<String>,
        /// Category: all, music, software, ebook (unrecognized values mean all)
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,
        /// Storefront country code (e.g. us, gb)
        #[arg(long)]
        country: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the parsed command
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => crate::config::load_from(path),
        None => crate::config::load(),
    };

    match &cli.command {
        Commands::Search {
            term,
            category,
            limit,
            country,
            json,
        } => {
            let rt = Runtime::new()?;
            let category = category
                .as_deref()
                .map(Category::parse_lenient)
                .unwrap_or_else(|| config.search.category());
            let options = search::SearchOptions {
                term: term.join(" "),
                category,
                limit: limit.unwrap_or(config.catalog.limit),
                country: country.clone().or_else(|| config.catalog.country.clone()),
                json: *json,
            };
            cmd_search(&rt, &config, &options)
        }
        Commands::Config { init } => cmd_config(&config, cli.config.as_deref(), *init),
    }
}
