//! gridquery CLI entry point
//!
//! Installs the log subscriber, then delegates everything to `cli::run`.
//! Errors go to stderr and the process exits non-zero.

use gridquery::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
