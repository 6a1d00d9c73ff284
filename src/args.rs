//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Movie search and rating from the terminal.
#[derive(Debug, Parser)]
#[command(name = "reelfind", version, about)]
pub struct Args {
    /// Run a single search for this term and exit.
    pub query: Option<String>,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Provider API key; overrides config and environment.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}
