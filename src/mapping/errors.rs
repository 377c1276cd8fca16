//! # Mapping Errors
//!
//! Failures while loading or validating a mapping configuration.

use thiserror::Error;

/// Result type for mapping configuration
pub type MappingResult<T> = Result<T, MappingError>;

/// Mapping configuration errors
#[derive(Debug, Error)]
pub enum MappingError {
    /// Configuration file could not be read
    #[error("Failed to read mapping config: {0}")]
    Read(#[from] std::io::Error),

    /// Configuration is not valid JSON for the expected layout
    #[error("Invalid mapping config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but violates a constraint
    #[error("Invalid mapping config: {0}")]
    Invalid(String),
}

impl MappingError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        MappingError::Invalid(reason.into())
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            MappingError::Read(_) => "PREDSQL_MAPPING_READ",
            MappingError::Json(_) => "PREDSQL_MAPPING_JSON",
            MappingError::Invalid(_) => "PREDSQL_MAPPING_INVALID",
        }
    }
}
