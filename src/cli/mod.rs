//! CLI module for gridquery
//!
//! Provides command-line interface for:
//! - serve: Load the dataset in the background and answer HTTP queries
//! - query: One-shot question against the dataset
//! - explain: Show the parsed intent for a question
//! - info: Print the dataset summary

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{explain, info, query, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
