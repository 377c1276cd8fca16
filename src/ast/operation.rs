//! Predicate operators and their SQL tokens

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operators a predicate node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Equality: `=`
    Eq,
    /// Inequality: `!=`
    Ne,
    /// Greater than: `>`
    Gt,
    /// Greater than or equal: `>=`
    Ge,
    /// Less than: `<`
    Lt,
    /// Less than or equal: `<=`
    Le,
    /// Logical conjunction
    And,
    /// Logical disjunction
    Or,
    /// Pattern match
    Like,
    /// Set membership
    In,
    /// Arithmetic negation
    Negate,
    /// Checked arithmetic negation
    NegateChecked,
    /// Logical negation
    Not,
    /// Null coalescing. Has no SQL token.
    Coalesce,
}

impl Operation {
    /// Returns the SQL token for this operator, if it has one
    pub fn sql_token(&self) -> Option<&'static str> {
        match self {
            Operation::Eq => Some("="),
            Operation::Ne => Some("!="),
            Operation::Gt => Some(">"),
            Operation::Ge => Some(">="),
            Operation::Lt => Some("<"),
            Operation::Le => Some("<="),
            Operation::And => Some("AND"),
            Operation::Or => Some("OR"),
            Operation::Like => Some("LIKE"),
            Operation::In => Some("IN"),
            Operation::Negate | Operation::NegateChecked => Some("-"),
            Operation::Not => Some("!"),
            Operation::Coalesce => None,
        }
    }

    /// Returns true for `And` / `Or`
    pub fn is_logical(&self) -> bool {
        matches!(self, Operation::And | Operation::Or)
    }

    /// Returns the operator that keeps the meaning when operands swap sides
    pub fn mirrored(&self) -> Self {
        match self {
            Operation::Gt => Operation::Lt,
            Operation::Ge => Operation::Le,
            Operation::Lt => Operation::Gt,
            Operation::Le => Operation::Ge,
            other => *other,
        }
    }

    /// Returns true if swapping the operands can be expressed by `mirrored`
    pub fn is_mirrorable(&self) -> bool {
        matches!(
            self,
            Operation::Eq
                | Operation::Ne
                | Operation::Gt
                | Operation::Ge
                | Operation::Lt
                | Operation::Le
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
