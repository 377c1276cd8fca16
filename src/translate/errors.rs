//! # Translation Errors
//!
//! Every failure aborts the current translation; no partial SQL is returned.

use thiserror::Error;

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Predicate translation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The front-end produced a node kind the parser does not accept
    #[error("Unsupported expression shape: {0}")]
    UnsupportedExpressionShape(String),

    /// Predicate method name or arity not recognised
    #[error("Unsupported operation: {name} with {arity} operand(s)")]
    UnsupportedOperation { name: String, arity: usize },

    /// Operator has no SQL token
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// Renderer reached a node pairing the parser never produces
    #[error("Malformed predicate tree: {0}")]
    MalformedTree(String),

    /// Member path not registered while the mapping rejects unmapped paths
    #[error("Unmapped member path: {0}")]
    UnmappedMember(String),
}

impl TranslateError {
    pub fn shape(detail: impl Into<String>) -> Self {
        TranslateError::UnsupportedExpressionShape(detail.into())
    }

    pub fn operation(name: impl Into<String>, arity: usize) -> Self {
        TranslateError::UnsupportedOperation {
            name: name.into(),
            arity,
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        TranslateError::MalformedTree(detail.into())
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TranslateError::UnsupportedExpressionShape(_) => "PREDSQL_UNSUPPORTED_SHAPE",
            TranslateError::UnsupportedOperation { .. } => "PREDSQL_UNSUPPORTED_OPERATION",
            TranslateError::UnsupportedOperator(_) => "PREDSQL_UNSUPPORTED_OPERATOR",
            TranslateError::MalformedTree(_) => "PREDSQL_MALFORMED_TREE",
            TranslateError::UnmappedMember(_) => "PREDSQL_UNMAPPED_MEMBER",
        }
    }

    /// Malformed trees point at a parser/expander bug rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, TranslateError::MalformedTree(_))
    }
}
