//! String matching and null-safe comparisons

use super::{expect_literal, expect_member};
use crate::ast::{LikePattern, Literal, MemberPath, Node, Operation};
use crate::translate::TranslateResult;

/// `member.StartsWith(v)` / `Contains(v)` / `EndsWith(v)` → `member LIKE <pattern>`
pub fn string_match(pattern: LikePattern, member: Node, value: Node) -> TranslateResult<Node> {
    let mut member = expect_member(member, "string match")?;
    let value = expect_literal(value, "string match")?;

    member.formatter = Some(pattern);

    Ok(Node::binary(
        Operation::Like,
        Node::Member(member),
        Node::Literal(value),
    ))
}

/// `member.LikeOrNull(v)` → `(member LIKE '%' + @p + '%') OR (@p IS NULL)`
pub fn like_or_null(member: Node, value: Node) -> TranslateResult<Node> {
    let mut member = expect_member(member, "LikeOrNull")?;
    let value = expect_literal(value, "LikeOrNull")?;

    member.formatter = Some(LikePattern::Contains);

    Ok(or_unbound(Operation::Like, member, value))
}

/// `member.EqualsOrNull(v)` → `(member = @p) OR (@p IS NULL)`
pub fn equals_or_null(member: Node, value: Node) -> TranslateResult<Node> {
    let member = expect_member(member, "EqualsOrNull")?;
    let value = expect_literal(value, "EqualsOrNull")?;

    Ok(or_unbound(Operation::Eq, member, value))
}

/// `(member <op> @p) OR (@p IS NULL)`
///
/// The value is always bound, even when null. The null check's literal shares
/// the value's kind so the back-reference names the same parameter.
pub(super) fn or_unbound(op: Operation, member: MemberPath, value: Literal) -> Node {
    let null_check = Node::binary(
        Operation::Eq,
        Node::Member(member.null_ref()),
        Node::Literal(Literal::null(value.kind)),
    );
    let comparison = Node::binary(op, Node::Member(member), Node::Literal(value.forced()));

    Node::or(comparison, null_check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ValueKind;
    use crate::translate::TranslateError;
    use serde_json::json;

    fn member(name: &str) -> Node {
        Node::Member(MemberPath::new(ValueKind::Text, vec![name.to_string()]))
    }

    fn text(value: &str) -> Node {
        Node::Literal(Literal::inferred(json!(value)))
    }

    #[test]
    fn test_string_match_sets_formatter() {
        let node = string_match(LikePattern::EndsWith, member("Code"), text("x")).unwrap();
        let binary = node.as_binary().unwrap();

        assert_eq!(binary.op, Operation::Like);
        match binary.left.as_ref() {
            Node::Member(m) => assert_eq!(m.formatter, Some(LikePattern::EndsWith)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_like_or_null_shape() {
        let node = like_or_null(member("Name"), text("abc")).unwrap();
        let or = match &node {
            Node::Logical(b) => b,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(or.op, Operation::Or);

        let like = or.left.as_binary().unwrap();
        assert_eq!(like.op, Operation::Like);
        match like.right.as_ref() {
            Node::Literal(l) => assert!(l.forced_param),
            other => panic!("unexpected {:?}", other),
        }

        let check = or.right.as_binary().unwrap();
        assert_eq!(check.op, Operation::Eq);
        match (check.left.as_ref(), check.right.as_ref()) {
            (Node::Member(m), Node::Literal(l)) => {
                assert!(m.synthetic_null_ref);
                assert_eq!(m.dotted(), "Name");
                assert!(l.is_null());
                assert!(!l.forced_param);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_equals_or_null_has_no_formatter() {
        let node = equals_or_null(member("Id"), Node::Literal(Literal::inferred(json!(null))))
            .unwrap();
        let eq = node.as_binary().unwrap().left.as_binary().unwrap();

        assert_eq!(eq.op, Operation::Eq);
        match eq.left.as_ref() {
            Node::Member(m) => assert_eq!(m.formatter, None),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_swapped_operands_rejected() {
        let err = equals_or_null(text("x"), member("Id")).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedExpressionShape(_)));
    }
}
