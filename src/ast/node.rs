//! Canonical predicate nodes
//!
//! Produced by the parser and macro expander, consumed by the renderer.
//! A tree is built fresh for every translation and is never shared.

use serde_json::Value;

use super::operation::Operation;
use super::value::{LikePattern, ValueKind};

/// A compile-time-known value
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// Declared kind
    pub kind: ValueKind,
    /// The value; `Value::Null` is the null marker
    pub value: Value,
    /// Always bind as a parameter, even when the value is null
    pub forced_param: bool,
}

impl Literal {
    /// Creates a literal that renders as `IS [NOT] NULL` when null
    pub fn new(kind: ValueKind, value: Value) -> Self {
        Self {
            kind,
            value,
            forced_param: false,
        }
    }

    /// Creates a literal with its kind inferred from the value
    pub fn inferred(value: Value) -> Self {
        Self::new(ValueKind::of(&value), value)
    }

    /// Creates a null literal of the given kind
    pub fn null(kind: ValueKind) -> Self {
        Self::new(kind, Value::Null)
    }

    /// Marks this literal as always-bound
    pub fn forced(mut self) -> Self {
        self.forced_param = true;
        self
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

/// A dotted chain of model members
#[derive(Debug, Clone, PartialEq)]
pub struct MemberPath {
    /// Declared kind of the final member
    pub kind: ValueKind,
    /// Model-level member names, outermost first
    pub segments: Vec<String>,
    /// Back-reference to a bind parameter rather than a column
    pub synthetic_null_ref: bool,
    /// Placeholder formatter for LIKE operands
    pub formatter: Option<LikePattern>,
}

impl MemberPath {
    pub fn new(kind: ValueKind, segments: Vec<String>) -> Self {
        Self {
            kind,
            segments,
            synthetic_null_ref: false,
            formatter: None,
        }
    }

    /// Extends this path with a child member
    pub fn child(&self, kind: ValueKind, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self::new(kind, segments)
    }

    /// Builds the `@param IS NULL` back-reference for this path
    pub fn null_ref(&self) -> Self {
        Self {
            kind: self.kind,
            segments: self.segments.clone(),
            synthetic_null_ref: true,
            formatter: None,
        }
    }

    /// Model-level dotted path, e.g. `SubModel.Name`
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

/// Operator with two child nodes
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryNode {
    pub op: Operation,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Predicate tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Literal),
    Member(MemberPath),
    /// `And` / `Or`
    Logical(BinaryNode),
    /// Comparison, LIKE, IN and the remaining operators
    Comparison(BinaryNode),
}

impl Node {
    /// Combines two nodes, choosing `Logical` or `Comparison` from the operator
    pub fn binary(op: Operation, left: Node, right: Node) -> Self {
        let binary = BinaryNode {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
        if op.is_logical() {
            Node::Logical(binary)
        } else {
            Node::Comparison(binary)
        }
    }

    pub fn and(left: Node, right: Node) -> Self {
        Self::binary(Operation::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Self::binary(Operation::Or, left, right)
    }

    /// `(1 = 1)`
    pub fn tautology() -> Self {
        Self::binary(
            Operation::Eq,
            Node::Literal(Literal::inferred(Value::from(1))),
            Node::Literal(Literal::inferred(Value::from(1))),
        )
    }

    /// Returns the operator and children of a composite node
    pub fn as_binary(&self) -> Option<&BinaryNode> {
        match self {
            Node::Logical(b) | Node::Comparison(b) => Some(b),
            Node::Literal(_) | Node::Member(_) => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.as_binary().is_some()
    }

    /// Number of nested composite levels; leaves count as zero
    pub fn depth(&self) -> usize {
        match self.as_binary() {
            Some(b) => 1 + b.left.depth().max(b.right.depth()),
            None => 0,
        }
    }

    /// Short shape name used in error messages
    pub fn shape_name(&self) -> &'static str {
        match self {
            Node::Literal(_) => "literal",
            Node::Member(_) => "member path",
            Node::Logical(_) => "logical",
            Node::Comparison(_) => "comparison",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member(path: &str) -> Node {
        Node::Member(MemberPath::new(
            ValueKind::Any,
            path.split('.').map(String::from).collect(),
        ))
    }

    #[test]
    fn test_binary_picks_variant() {
        let cmp = Node::binary(
            Operation::Eq,
            member("Id"),
            Node::Literal(Literal::inferred(json!(1))),
        );
        assert!(matches!(cmp, Node::Comparison(_)));

        let logical = Node::and(cmp.clone(), cmp);
        assert!(matches!(logical, Node::Logical(_)));
    }

    #[test]
    fn test_depth() {
        let cmp = Node::binary(
            Operation::Eq,
            member("Id"),
            Node::Literal(Literal::inferred(json!(1))),
        );
        assert_eq!(cmp.depth(), 1);
        assert_eq!(Node::or(Node::and(cmp.clone(), cmp.clone()), cmp).depth(), 3);
        assert_eq!(member("Id").depth(), 0);
    }

    #[test]
    fn test_null_ref_keeps_segments() {
        let path = MemberPath::new(ValueKind::Text, vec!["SubModel".into(), "Name".into()]);
        let reference = path.null_ref();
        assert!(reference.synthetic_null_ref);
        assert_eq!(reference.dotted(), "SubModel.Name");
    }

    #[test]
    fn test_forced_literal() {
        let lit = Literal::null(ValueKind::Integer).forced();
        assert!(lit.is_null());
        assert!(lit.forced_param);
    }
}
