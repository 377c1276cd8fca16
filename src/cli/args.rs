//! CLI argument definitions using clap
//!
//! Commands:
//! - predsql translate --mapping <path> [--input <path>]
//! - predsql resolve --mapping <path> <member-path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// predsql - translate predicate trees into parameterized SQL
#[derive(Parser, Debug)]
#[command(name = "predsql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log every translation event to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate one expression document into a SQL predicate
    Translate {
        /// Path to mapping configuration file
        #[arg(long, default_value = "./mapping.json")]
        mapping: PathBuf,

        /// Expression document; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print the identifier a dotted member path resolves to
    Resolve {
        /// Path to mapping configuration file
        #[arg(long, default_value = "./mapping.json")]
        mapping: PathBuf,

        /// Dotted member path, e.g. `SubModel.Name`
        path: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
