//! CLI command implementations
//!
//! Mapping configuration problems are fatal and reported on stderr by
//! `main`. Expression and translation failures are additionally written to
//! stdout as an error response so callers always get one JSON line back.

use std::path::Path;

use serde_json::{json, Value};

use crate::expr::Expr;
use crate::mapping::{MappingConfig, QueryMapping};
use crate::observability::{Logger, Severity};
use crate::render::SqlPredicate;
use crate::translate::Translator;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    if cli.verbose {
        Logger::set_min_severity(Severity::Trace);
    }
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Translate { mapping, input } => translate(&mapping, input.as_deref()),
        Command::Resolve { mapping, path } => resolve(&mapping, &path),
    }
}

/// Translate one expression document against the mapping file
pub fn translate(mapping_path: &Path, input: Option<&Path>) -> CliResult<()> {
    let mapping = load_mapping(mapping_path)?;

    let result = read_document(input).and_then(|document| translate_document(&mapping, &document));

    respond(result.map(|predicate| predicate_json(&predicate)))
}

/// Print the identifier `path` resolves to
pub fn resolve(mapping_path: &Path, path: &str) -> CliResult<()> {
    let mapping = load_mapping(mapping_path)?;

    let result = resolve_path(&mapping, path);

    respond(result)
}

fn load_mapping(path: &Path) -> CliResult<QueryMapping> {
    Ok(MappingConfig::load(path)?.build())
}

/// Parse an expression document and translate it
pub fn translate_document(mapping: &QueryMapping, document: &str) -> CliResult<SqlPredicate> {
    let expr: Expr = serde_json::from_str(document)?;
    Ok(Translator::new(mapping).translate(&expr)?)
}

/// `{"path":..,"identifier":..,"mapped":..}` for one dotted path
pub fn resolve_path(mapping: &QueryMapping, path: &str) -> CliResult<Value> {
    let mapped = mapping.contains(path);
    let identifier = mapping.resolve(path)?;

    Ok(json!({
        "path": path,
        "identifier": identifier,
        "mapped": mapped
    }))
}

fn predicate_json(predicate: &SqlPredicate) -> Value {
    json!({
        "text": predicate.text,
        "parameters": predicate.parameters
    })
}

fn respond(result: CliResult<Value>) -> CliResult<()> {
    match result {
        Ok(data) => write_response(data),
        Err(err) => {
            write_error(err.code_str(), err.message())?;
            Err(err)
        }
    }
}
