//! Predicate AST
//!
//! The closed set of node shapes a translation works on:
//! - `Literal`: compile-time-known value
//! - `MemberPath`: model member chain, or a synthetic bind-parameter reference
//! - `Logical`: `And` / `Or` over two predicates
//! - `Comparison`: member path against a literal
//!
//! Every composite renders as exactly one parenthesised group.

mod node;
mod operation;
mod value;

pub use node::{BinaryNode, Literal, MemberPath, Node};
pub use operation::Operation;
pub use value::{LikePattern, ValueKind};
