//! CLI-specific error types

use std::fmt;
use std::io;

use crate::mapping::MappingError;
use crate::translate::TranslateError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// I/O error (stdin/stdout/input file)
    IoError,
    /// Expression document is not valid JSON or not a known shape
    InvalidInput,
    /// Mapping configuration error, carrying the mapping code
    Mapping(&'static str),
    /// Translation failure, carrying the translate code
    Translate(&'static str),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "PREDSQL_CLI_IO_ERROR",
            Self::InvalidInput => "PREDSQL_CLI_INVALID_INPUT",
            Self::Mapping(code) | Self::Translate(code) => code,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Unreadable expression document
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<MappingError> for CliError {
    fn from(e: MappingError) -> Self {
        Self::new(CliErrorCode::Mapping(e.code()), e.to_string())
    }
}

impl From<TranslateError> for CliError {
    fn from(e: TranslateError) -> Self {
        Self::new(CliErrorCode::Translate(e.code()), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
