mod run;

use clap::{Parser, Subcommand};

pub use run::*;

#[derive(Parser)]
#[command(name = "cmdpat", version, about = "Match command lines against command patterns")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Commands {
    /// Extract the arguments of an input line using a pattern
    Match(MatchArgs),
    /// List configured commands starting with the given text
    Complete(CompleteArgs),
    /// Load and validate the configuration
    Validate,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct MatchArgs {
    /// Command pattern, e.g. "create stream <stream-id> [ttl <ttl>]"
    #[arg(long, short)]
    pub pattern: String,

    /// Input line to match
    #[arg(allow_hyphen_values = true)]
    pub input: String,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct CompleteArgs {
    /// Partially typed command
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub buffer: String,
}
