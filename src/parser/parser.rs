//! Expression → predicate tree
//!
//! Walks a front-end `Expr` depth-first:
//! - wrappers and coercions unwrap
//! - members of the subject become member paths, keyed by model-level path
//! - members of captured constants fold into literals
//! - predicate calls go to the macro expander

use serde_json::Value;

use crate::ast::{Literal, MemberPath, Node, ValueKind};
use crate::expand;
use crate::expr::{BinaryOperator, Expr, Method};
use crate::observability::{log_event_with_fields, Event};
use crate::translate::{TranslateError, TranslateResult};

/// Builds canonical predicate trees.
///
/// Member paths keep their model-level segments; identifiers are resolved
/// against the mapping only when rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    /// Parses an expression into a predicate tree.
    ///
    /// The root must be a predicate; a bare member or constant is rejected.
    pub fn parse(&self, expr: &Expr) -> TranslateResult<Node> {
        let node = self.parse_node(expr)?;
        if !node.is_composite() {
            return Err(TranslateError::shape(format!(
                "{} used as a whole predicate",
                node.shape_name()
            )));
        }
        Ok(node)
    }

    fn parse_node(&self, expr: &Expr) -> TranslateResult<Node> {
        match expr {
            Expr::Constant { value, kind } => Ok(Node::Literal(Literal::new(
                kind.or_infer(value),
                value.clone(),
            ))),
            Expr::Lambda { body } => self.parse_node(body),
            Expr::Convert { operand } => self.parse_node(operand),
            Expr::Member {
                receiver,
                name,
                kind,
            } => self.parse_member(receiver, name, *kind),
            Expr::Binary { op, left, right } => self.parse_binary(*op, left, right),
            Expr::Call {
                method,
                receiver,
                args,
            } => self.parse_call(*method, receiver.as_deref(), args),
            Expr::Subject => Err(TranslateError::shape(
                "query subject used as a value; compare one of its members",
            )),
        }
    }

    fn parse_member(&self, receiver: &Expr, name: &str, kind: ValueKind) -> TranslateResult<Node> {
        if is_subject(receiver) {
            return Ok(Node::Member(MemberPath::new(kind, vec![name.to_string()])));
        }

        match self.parse_node(receiver)? {
            Node::Member(parent) => Ok(Node::Member(parent.child(kind, name))),
            Node::Literal(captured) => fold_member(captured, name, kind),
            other => Err(TranslateError::shape(format!(
                "member `{}` of a {} expression",
                name,
                other.shape_name()
            ))),
        }
    }

    fn parse_binary(&self, op: BinaryOperator, left: &Expr, right: &Expr) -> TranslateResult<Node> {
        let op = op.to_operation()?;
        let left = self.parse_node(left)?;
        let right = self.parse_node(right)?;

        let accepted = if op.is_logical() {
            left.is_composite() && right.is_composite()
        } else {
            match (&left, &right) {
                (Node::Member(_), Node::Literal(_)) | (Node::Literal(_), Node::Literal(_)) => true,
                (Node::Literal(_), Node::Member(_)) => op.is_mirrorable(),
                (l, r) => l.is_composite() && r.is_composite(),
            }
        };

        if !accepted {
            return Err(TranslateError::shape(format!(
                "{} {} {}",
                left.shape_name(),
                op,
                right.shape_name()
            )));
        }

        // `1 < x.Id` becomes `x.Id > 1`: a comparison keeps its member on the left
        if matches!((&left, &right), (Node::Literal(_), Node::Member(_))) {
            return Ok(Node::binary(op.mirrored(), right, left));
        }

        Ok(Node::binary(op, left, right))
    }

    fn parse_call(
        &self,
        method: Method,
        receiver: Option<&Expr>,
        args: &[Expr],
    ) -> TranslateResult<Node> {
        let node = match (receiver, args) {
            (Some(receiver), [arg]) => self.parse_method_call(method, receiver, arg)?,
            (None, [first, second]) => {
                self.expand_pair(method, self.parse_node(first)?, self.parse_node(second)?)?
            }
            _ => return Err(TranslateError::operation(method.name(), args.len())),
        };

        log_event_with_fields(Event::PredicateExpanded, &[("method", method.name())]);

        Ok(node)
    }

    /// `receiver.Method(arg)`
    fn parse_method_call(
        &self,
        method: Method,
        receiver: &Expr,
        arg: &Expr,
    ) -> TranslateResult<Node> {
        let receiver = self.parse_node(receiver)?;
        let arg = self.parse_node(arg)?;

        match method.like_pattern() {
            Some(_) if method == Method::Contains && matches!(receiver, Node::Literal(_)) => {
                expand::contains_in_collection(receiver, arg)
            }
            Some(pattern) => expand::string_match(pattern, receiver, arg),
            None => self.expand_pair(method, receiver, arg),
        }
    }

    /// Two-operand predicates
    fn expand_pair(&self, method: Method, first: Node, second: Node) -> TranslateResult<Node> {
        match method {
            Method::Contains => expand::contains_in_collection(first, second),
            Method::ContainsOrNull => expand::contains_or_null(first, second),
            Method::LikeOrNull => expand::like_or_null(first, second),
            Method::EqualsOrNull => expand::equals_or_null(first, second),
            Method::StartsWith | Method::EndsWith => {
                Err(TranslateError::operation(method.name(), 2))
            }
        }
    }
}

/// Subject, possibly behind coercions
fn is_subject(expr: &Expr) -> bool {
    match expr {
        Expr::Subject => true,
        Expr::Convert { operand } => is_subject(operand),
        _ => false,
    }
}

/// Reads a member of a captured value
fn fold_member(captured: Literal, name: &str, kind: ValueKind) -> TranslateResult<Node> {
    match captured.value {
        Value::Object(mut fields) => {
            let value = fields.remove(name).unwrap_or(Value::Null);
            Ok(Node::Literal(Literal::new(kind.or_infer(&value), value)))
        }
        other => Err(TranslateError::shape(format!(
            "member `{}` of a {:?} constant",
            name,
            ValueKind::of(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{LikePattern, Operation};
    use serde_json::json;

    #[test]
    fn test_wrappers_unwrap() {
        let expr = Expr::lambda(Expr::field("Id").convert().equals(1).convert());

        let node = Parser::new().parse(&expr).unwrap();
        assert_eq!(node.as_binary().unwrap().op, Operation::Eq);
    }

    #[test]
    fn test_nested_member_path() {
        let node = Parser::new()
            .parse_node(&Expr::field("SubModel.Name"))
            .unwrap();

        match node {
            Node::Member(path) => assert_eq!(path.segments, vec!["SubModel", "Name"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_member_of_converted_subject() {
        let node = Parser::new()
            .parse_node(&Expr::subject().convert().get("Id"))
            .unwrap();

        assert!(matches!(node, Node::Member(_)));
    }

    #[test]
    fn test_captured_member_folds() {
        let query = Expr::captured(json!({"Name": "abc", "ParentId": null}));

        let node = Parser::new().parse_node(&query.clone().get("Name")).unwrap();
        assert_eq!(node, Node::Literal(Literal::new(ValueKind::Text, json!("abc"))));

        let node = Parser::new()
            .parse_node(&query.get("Missing").typed(ValueKind::Integer))
            .unwrap();
        assert_eq!(node, Node::Literal(Literal::null(ValueKind::Integer)));
    }

    #[test]
    fn test_member_of_scalar_constant_rejected() {
        let err = Parser::new()
            .parse(&Expr::value(5).get("Length"))
            .unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));
    }

    #[test]
    fn test_literal_on_left_is_mirrored() {
        let node = Parser::new()
            .parse(&Expr::value(10).lt(Expr::field("Id")))
            .unwrap();
        let binary = node.as_binary().unwrap();

        assert_eq!(binary.op, Operation::Gt);
        assert!(matches!(binary.left.as_ref(), Node::Member(_)));
    }

    #[test]
    fn test_bare_subject_rejected() {
        let err = Parser::new().parse(&Expr::subject()).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));
    }

    #[test]
    fn test_arithmetic_rejected() {
        let expr = Expr::binary(BinaryOperator::Add, Expr::field("Id"), 1);
        let err = Parser::new().parse(&expr).unwrap_err();
        assert_eq!(err, TranslateError::UnsupportedOperator("Add".into()));
    }

    #[test]
    fn test_starts_with() {
        let node = Parser::new()
            .parse(&Expr::field("Name").starts_with("t"))
            .unwrap();

        match node.as_binary().unwrap().left.as_ref() {
            Node::Member(m) => assert_eq!(m.formatter, Some(LikePattern::StartsWith)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_instance_contains_on_collection_is_membership() {
        let node = Parser::new()
            .parse(&Expr::value(json!([1, 2])).contains(Expr::field("Id")))
            .unwrap();

        assert_eq!(node.as_binary().unwrap().op, Operation::In);
    }

    #[test]
    fn test_starts_with_two_operands_rejected() {
        let expr = Expr::Call {
            method: Method::StartsWith,
            receiver: None,
            args: vec![Expr::field("Name"), Expr::value("t")],
        };

        let err = Parser::new().parse(&expr).unwrap_err();
        assert_eq!(err, TranslateError::operation("StartsWith", 2));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let expr = Expr::Call {
            method: Method::EqualsOrNull,
            receiver: None,
            args: vec![Expr::field("Id")],
        };

        let err = Parser::new().parse(&expr).unwrap_err();
        assert_eq!(err, TranslateError::operation("EqualsOrNull", 1));
    }

    #[test]
    fn test_bare_member_root_rejected() {
        let err = Parser::new()
            .parse(&Expr::lambda(Expr::field("IsActive")))
            .unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));
    }

    #[test]
    fn test_bare_constant_root_rejected() {
        let err = Parser::new().parse(&Expr::value(true)).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));
    }

    #[test]
    fn test_logical_over_leaf_rejected() {
        let clause = Expr::field("Id").equals(1);

        for leaf in [Expr::field("IsActive"), Expr::value(true)] {
            let err = Parser::new()
                .parse(&leaf.clone().and(clause.clone()))
                .unwrap_err();
            assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));

            let err = Parser::new()
                .parse(&clause.clone().or(leaf))
                .unwrap_err();
            assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));
        }
    }

    #[test]
    fn test_member_against_member_rejected() {
        let err = Parser::new()
            .parse(&Expr::field("Id").equals(Expr::field("ParentId")))
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::shape("member path Eq member path")
        );
    }

    #[test]
    fn test_comparison_against_composite_rejected() {
        let expr = Expr::field("Id").equals(Expr::field("Code").equals("x"));

        let err = Parser::new().parse(&expr).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));
    }

    #[test]
    fn test_constant_pair_accepted() {
        let node = Parser::new()
            .parse(&Expr::value(1).equals(1))
            .unwrap();
        assert_eq!(node, Node::tautology());
    }
}
