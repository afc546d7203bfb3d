//! Command-line interface for store-search.
//!
//! Runs catalog searches through the search controller and prints the
//! results, and inspects the configuration file.

mod commands;

pub use commands::{Cli, Commands, run_command};
