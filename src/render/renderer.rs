//! Predicate tree → SQL text
//!
//! Depth-first; each composite node matches on the shapes of its children:
//! 1. composite / composite: `(<left> <op> <right>)`
//! 2. member path / literal: comparison clause
//! 3. literal / literal: `(<a> <op> <b>)`, only the `(1 = 1)` tautology
//!
//! Any other pairing is `MalformedTree`.

use serde_json::Value;

use super::output::SqlPredicate;
use crate::ast::{BinaryNode, Literal, MemberPath, Node, Operation, ValueKind};
use crate::mapping::QueryMapping;
use crate::translate::{TranslateError, TranslateResult};

/// Renders predicate trees against one mapping
pub struct SqlRenderer<'a> {
    mapping: &'a QueryMapping,
}

impl<'a> SqlRenderer<'a> {
    pub fn new(mapping: &'a QueryMapping) -> Self {
        Self { mapping }
    }

    /// Renders a composite node. Rendering never mutates the tree, so the
    /// same tree renders to identical output every time.
    pub fn render(&self, node: &Node) -> TranslateResult<SqlPredicate> {
        let mut out = SqlPredicate::default();
        self.write_node(node, &mut out)?;
        Ok(out)
    }

    fn write_node(&self, node: &Node, out: &mut SqlPredicate) -> TranslateResult<()> {
        let binary = node.as_binary().ok_or_else(|| {
            TranslateError::malformed(format!("{} in predicate position", node.shape_name()))
        })?;

        match (binary.left.as_ref(), binary.right.as_ref()) {
            (left, right) if left.is_composite() && right.is_composite() => {
                let token = sql_token(binary.op)?;
                out.push('(');
                self.write_node(left, out)?;
                out.push(' ');
                out.push_str(token);
                out.push(' ');
                self.write_node(right, out)?;
                out.push(')');
                Ok(())
            }
            (Node::Member(member), Node::Literal(literal)) => {
                self.write_clause(binary.op, member, literal, out)
            }
            (Node::Literal(a), Node::Literal(b)) => {
                let token = sql_token(binary.op)?;
                out.push_str(&format!(
                    "({} {} {})",
                    sql_constant(&a.value),
                    token,
                    sql_constant(&b.value)
                ));
                Ok(())
            }
            _ => Err(malformed_pair(binary)),
        }
    }

    fn write_clause(
        &self,
        op: Operation,
        member: &MemberPath,
        literal: &Literal,
        out: &mut SqlPredicate,
    ) -> TranslateResult<()> {
        let token = sql_token(op)?;
        let name = parameter_name(&member.segments, literal.kind);

        out.push('(');

        if member.synthetic_null_ref {
            out.push('@');
            out.push_str(&name);
        } else {
            let path = member.dotted();
            out.push_str(self.mapping.resolve(&path)?);
        }

        if literal.is_null() && !literal.forced_param {
            match op {
                Operation::Eq => out.push_str(" IS NULL"),
                Operation::Ne => out.push_str(" IS NOT NULL"),
                other => {
                    return Err(TranslateError::UnsupportedOperator(format!(
                        "{} against null",
                        other
                    )))
                }
            }
            out.push(')');
            return Ok(());
        }

        let placeholder = format!("@{}", name);
        let placeholder = match member.formatter {
            Some(pattern) => pattern.apply(&placeholder),
            None => placeholder,
        };

        out.push(' ');
        out.push_str(token);
        out.push(' ');
        out.push_str(&placeholder);
        out.push(')');

        out.bind(name, literal.value.clone());
        Ok(())
    }
}

/// Bind name for a member path: segments concatenated, `Collection` appended
/// for set-valued binds so `Id` and `IdCollection` never collide.
pub fn parameter_name(segments: &[String], kind: ValueKind) -> String {
    let mut name = segments.concat();
    if kind.is_collection() {
        name.push_str("Collection");
    }
    name
}

fn sql_token(op: Operation) -> TranslateResult<&'static str> {
    op.sql_token()
        .ok_or_else(|| TranslateError::UnsupportedOperator(op.to_string()))
}

/// Inline constant for literal / literal clauses
fn sql_constant(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        other => other.to_string(),
    }
}

fn malformed_pair(binary: &BinaryNode) -> TranslateError {
    TranslateError::malformed(format!(
        "{} {} {}",
        binary.left.shape_name(),
        binary.op,
        binary.right.shape_name()
    ))
}
