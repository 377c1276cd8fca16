//! Front-end predicate expressions
//!
//! The boundary between whatever captures a caller's filter and the
//! translator. An `Expr` is built with the constructor functions in
//! `builder`, or deserialized from JSON (tagged by `shape`).
//!
//! Shapes:
//! - `Constant`: a value, including captured caller variables
//! - `Subject`: the model instance being filtered
//! - `Lambda`: wrapper, unwraps to its body
//! - `Convert`: type coercion, unwraps to its operand
//! - `Member`: named member of a receiver
//! - `Binary`: comparison or logical combination
//! - `Call`: named predicate method with one or two operands

mod builder;
mod method;

pub use method::Method;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ast::{Operation, ValueKind};
use crate::translate::{TranslateError, TranslateResult};

/// Primitive expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Expr {
    Constant {
        value: Value,
        #[serde(default)]
        kind: ValueKind,
    },
    Subject,
    Lambda {
        body: Box<Expr>,
    },
    Convert {
        operand: Box<Expr>,
    },
    Member {
        receiver: Box<Expr>,
        name: String,
        #[serde(default)]
        kind: ValueKind,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        method: Method,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receiver: Option<Box<Expr>>,
        #[serde(default)]
        args: Vec<Expr>,
    },
}

/// Binary operators a front-end can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    AndAlso,
    OrElse,
    Coalesce,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Maps to a predicate operator; arithmetic has no predicate form
    pub fn to_operation(self) -> TranslateResult<Operation> {
        match self {
            BinaryOperator::Equal => Ok(Operation::Eq),
            BinaryOperator::NotEqual => Ok(Operation::Ne),
            BinaryOperator::GreaterThan => Ok(Operation::Gt),
            BinaryOperator::GreaterThanOrEqual => Ok(Operation::Ge),
            BinaryOperator::LessThan => Ok(Operation::Lt),
            BinaryOperator::LessThanOrEqual => Ok(Operation::Le),
            BinaryOperator::AndAlso => Ok(Operation::And),
            BinaryOperator::OrElse => Ok(Operation::Or),
            BinaryOperator::Coalesce => Ok(Operation::Coalesce),
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Err(TranslateError::UnsupportedOperator(format!(
                "{:?}",
                self
            ))),
        }
    }
}
