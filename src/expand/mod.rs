//! Semantic macro expansion
//!
//! Rewrites sugared predicates into canonical comparison / logical trees.
//! Operands arrive already parsed, so member paths are final and the
//! rewrites never consult the mapping.
//!
//! The "OrNull" forms pair the real comparison with an `@param IS NULL`
//! check against the same bind name, so the clause holds whenever the caller
//! binds no value.

mod membership;
mod null_safe;

pub use membership::{contains_in_collection, contains_or_null};
pub use null_safe::{equals_or_null, like_or_null, string_match};

use crate::ast::{Literal, MemberPath, Node};
use crate::translate::{TranslateError, TranslateResult};

fn expect_member(node: Node, method: &str) -> TranslateResult<MemberPath> {
    match node {
        Node::Member(member) => Ok(member),
        other => Err(TranslateError::shape(format!(
            "{} expects a member path, got {}",
            method,
            other.shape_name()
        ))),
    }
}

fn expect_literal(node: Node, method: &str) -> TranslateResult<Literal> {
    match node {
        Node::Literal(literal) => Ok(literal),
        other => Err(TranslateError::shape(format!(
            "{} expects a constant value, got {}",
            method,
            other.shape_name()
        ))),
    }
}
