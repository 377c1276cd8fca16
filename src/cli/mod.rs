//! CLI module for predsql
//!
//! Provides command-line interface for:
//! - translate: One-shot expression document to SQL predicate
//! - resolve: Show the identifier a member path maps to

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{resolve, resolve_path, run, run_command, translate, translate_document};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, read_document, write_error, write_response};
