//! Collection membership

use serde_json::Value;

use super::null_safe::or_unbound;
use super::{expect_literal, expect_member};
use crate::ast::{LikePattern, Literal, Node, Operation};
use crate::translate::{TranslateError, TranslateResult};

/// `collection.Contains(member)` → `member IN @collection`
pub fn contains_in_collection(collection: Node, member: Node) -> TranslateResult<Node> {
    let collection = expect_collection(collection, "Contains")?;
    let member = expect_member(member, "Contains")?;

    Ok(Node::binary(
        Operation::In,
        Node::Member(member),
        Node::Literal(collection),
    ))
}

/// `ContainsOrNull` in either of its forms:
/// - `collection.ContainsOrNull(member)`: `(member IN @c) OR (@c IS NULL)`,
///   or `(1 = 1)` when the collection is null or empty
/// - `member.ContainsOrNull(text)`: same as `LikeOrNull`
pub fn contains_or_null(first: Node, second: Node) -> TranslateResult<Node> {
    match (first, second) {
        (collection @ Node::Literal(_), member @ Node::Member(_)) => {
            let collection = expect_collection(collection, "ContainsOrNull")?;
            let member = expect_member(member, "ContainsOrNull")?;

            if is_empty_set(&collection.value) {
                // An empty IN list is rejected or misread by some engines.
                return Ok(Node::tautology());
            }

            Ok(or_unbound(Operation::In, member, collection))
        }
        (member @ Node::Member(_), value @ Node::Literal(_)) => {
            let mut member = expect_member(member, "ContainsOrNull")?;
            let value = expect_literal(value, "ContainsOrNull")?;

            member.formatter = Some(LikePattern::Contains);

            Ok(or_unbound(Operation::Like, member, value))
        }
        (first, second) => Err(TranslateError::shape(format!(
            "ContainsOrNull over {} and {}",
            first.shape_name(),
            second.shape_name()
        ))),
    }
}

fn expect_collection(node: Node, method: &str) -> TranslateResult<Literal> {
    let literal = expect_literal(node, method)?;

    if literal.is_null() || literal.kind.is_collection() {
        Ok(literal)
    } else {
        Err(TranslateError::shape(format!(
            "{} expects a collection, got {:?}",
            method, literal.kind
        )))
    }
}

fn is_empty_set(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
