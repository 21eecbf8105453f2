//! CLI argument definitions using clap
//!
//! Commands:
//! - gridquery serve --config <path>
//! - gridquery query --config <path> <text>
//! - gridquery explain <text>
//! - gridquery info --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration path, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "./gridquery.json";

/// gridquery - natural-language questions over transmission line data
#[derive(Parser, Debug)]
#[command(name = "gridquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP query service
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Answer a single question and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// The question, e.g. "show me 345kv lines"
        text: String,
    },

    /// Show how a question is interpreted, without touching the data
    Explain {
        /// The question to interpret
        text: String,
    },

    /// Load the dataset and print its summary
    Info {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_takes_positional_text() {
        let cli = Cli::try_parse_from(["gridquery", "query", "show 500kv lines"]).unwrap();
        match cli.command {
            Command::Query { config, text } => {
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert_eq!(text, "show 500kv lines");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_accepts_config() {
        let cli = Cli::try_parse_from(["gridquery", "serve", "--config", "/etc/grid.json"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { config } if config == PathBuf::from("/etc/grid.json")));
    }

    #[test]
    fn test_explain_requires_text() {
        assert!(Cli::try_parse_from(["gridquery", "explain"]).is_err());
    }
}
