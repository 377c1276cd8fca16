//! Translation Property Tests
//!
//! Laws that hold for every predicate tree:
//! - Translating the same tree twice gives identical output
//! - Parenthesis nesting depth equals the tree's composite depth
//! - Every placeholder in the text has exactly one bind, in text order
//! - Null-safe predicates always bind their value
//! - Empty collection filters collapse to the tautology
//! - Registered nested paths win over the parent's table alias

use predsql::{translate, Expr, Parser, QueryMapping, SqlPredicate, Translator};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn mapping() -> QueryMapping {
    QueryMapping::builder("m")
        .auto_map(["Id", "Code", "Name", "ParentId", "ParentCode", "SubModel"])
        .map("SubModel.Name", "name", Some("s"))
        .build()
}

/// A mix of every clause kind the renderer emits
fn sample_filters() -> Vec<Expr> {
    vec![
        Expr::field("Id").equals(1),
        Expr::field("ParentId").not_equals(Value::Null),
        Expr::field("Name")
            .starts_with("a")
            .or(Expr::field("Code").ends_with("b")),
        Expr::field("ParentId")
            .equals(1)
            .and(Expr::field("Code").equals("c").or(Expr::field("Name").contains("d"))),
        Expr::field("Name")
            .like_or_null("x")
            .and(Expr::field("ParentId").equals_or_null(Value::Null))
            .and(Expr::value(json!([1, 2])).contains_or_null(Expr::field("Id"))),
        Expr::value(json!([])).contains_or_null(Expr::field("Id")),
        Expr::field("SubModel.Name")
            .like_or_null("q")
            .and(Expr::field("Id").ge(3).and(Expr::field("Id").lt(9))),
    ]
}

fn max_paren_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                max = max.max(depth);
            }
            ')' => depth -= 1,
            _ => {}
        }
    }
    max
}

/// `@Name` placeholders in text order, skipping `IS NULL` back-references
fn bound_placeholders(predicate: &SqlPredicate) -> Vec<String> {
    let mut names = Vec::new();
    let text = &predicate.text;
    let mut rest = text.as_str();

    while let Some(at) = rest.find('@') {
        let before = &rest[..at];
        rest = &rest[at + 1..];

        let end = rest
            .find(|c: char| !c.is_alphanumeric())
            .unwrap_or(rest.len());
        let name = &rest[..end];

        let is_back_reference = before.ends_with('(') && rest[end..].starts_with(" IS NULL");
        if !is_back_reference {
            names.push(name.to_string());
        }
    }

    names
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same tree, same mapping, same output.
#[test]
fn test_translation_is_idempotent() {
    let mapping = mapping();
    let translator = Translator::new(&mapping);

    for filter in sample_filters() {
        let first = translator.translate(&filter).unwrap();
        for _ in 0..10 {
            assert_eq!(translator.translate(&filter).unwrap(), first);
        }
    }
}

/// A single parsed tree renders identically through fresh renderers.
#[test]
fn test_rendering_does_not_mutate_tree() {
    let mapping = mapping();
    let filter = Expr::field("Name").like_or_null("x");
    let node = Parser::new().parse(&filter).unwrap();
    let before = node.clone();

    let renderer = predsql::SqlRenderer::new(&mapping);
    let first = renderer.render(&node).unwrap();
    let second = renderer.render(&node).unwrap();

    assert_eq!(first, second);
    assert_eq!(node, before);
}

// =============================================================================
// Structure Tests
// =============================================================================

/// One parenthesis level per composite level of the tree.
#[test]
fn test_parenthesis_depth_matches_tree_depth() {
    let mapping = mapping();

    for filter in sample_filters() {
        let node = Parser::new().parse(&filter).unwrap();
        let predicate = translate(&filter, &mapping).unwrap();

        assert_eq!(
            max_paren_depth(&predicate.text),
            node.depth(),
            "text: {}",
            predicate.text
        );
        assert_eq!(
            predicate.text.matches('(').count(),
            predicate.text.matches(')').count()
        );
    }
}

/// Every bound placeholder has a parameter, in the same order.
#[test]
fn test_parameters_match_placeholders() {
    let mapping = mapping();

    for filter in sample_filters() {
        let predicate = translate(&filter, &mapping).unwrap();
        let placeholders = bound_placeholders(&predicate);

        assert_eq!(
            placeholders,
            predicate
                .parameter_names()
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>(),
            "text: {}",
            predicate.text
        );
    }
}

/// Back-references always point at a parameter bound earlier.
#[test]
fn test_null_checks_reference_bound_parameters() {
    let mapping = mapping();

    for filter in sample_filters() {
        let predicate = translate(&filter, &mapping).unwrap();

        for (at, _) in predicate.text.match_indices("(@") {
            let rest = &predicate.text[at + 2..];
            let name = &rest[..rest.find(' ').unwrap()];
            assert!(
                predicate.parameter_names().contains(&name),
                "{} not bound in {}",
                name,
                predicate.text
            );
        }
    }
}

// =============================================================================
// Sugar Law Tests
// =============================================================================

/// Null-safe forms bind their value whether or not it is null.
#[test]
fn test_null_safe_forms_always_bind() {
    let mapping = mapping();

    for value in [Value::Null, json!("abc")] {
        let like = translate(&Expr::field("Name").like_or_null(value.clone()), &mapping).unwrap();
        assert_eq!(like.parameter_names(), vec!["Name"]);
        assert!(like.text.ends_with("OR (@Name IS NULL))"));

        let equals =
            translate(&Expr::field("Name").equals_or_null(value.clone()), &mapping).unwrap();
        assert_eq!(equals.text, "((m.name = @Name) OR (@Name IS NULL))");
        assert_eq!(equals.parameter("Name"), Some(&value));
    }
}

/// An empty collection filter never reaches the IN operator.
#[test]
fn test_dead_collection_filter_collapses() {
    let mapping = mapping();

    for collection in [json!([]), Value::Null] {
        let filter = Expr::typed_value(collection, predsql::ValueKind::Collection)
            .contains_or_null(Expr::field("Id"))
            .and(Expr::field("Code").equals("c"));

        let predicate = translate(&filter, &mapping).unwrap();
        assert_eq!(predicate.text, "((1 = 1) AND (m.code = @Code))");
        assert_eq!(predicate.parameter_names(), vec!["Code"]);
    }
}

/// Set-valued binds never share a name with the scalar bind of the same path.
#[test]
fn test_collection_suffix_avoids_collision() {
    let filter = Expr::field("Id")
        .equals(1)
        .and(Expr::in_collection(json!([1, 2]), Expr::field("Id")));

    let predicate = translate(&filter, &mapping()).unwrap();
    assert_eq!(predicate.text, "((m.id = @Id) AND (m.id IN @IdCollection))");
    assert_eq!(predicate.parameter("Id"), Some(&json!(1)));
    assert_eq!(predicate.parameter("IdCollection"), Some(&json!([1, 2])));
}

/// Text values are scalars even though strings are sequences of characters.
#[test]
fn test_text_is_not_a_collection() {
    let predicate = translate(&Expr::field("Code").equals("abc"), &mapping()).unwrap();
    assert_eq!(predicate.parameter_names(), vec!["Code"]);
}

// =============================================================================
// Mapping Precedence Tests
// =============================================================================

/// The explicit nested registration beats the auto-mapped parent alias.
#[test]
fn test_nested_override_wins() {
    let predicate = translate(&Expr::field("SubModel.Name").equals("x"), &mapping()).unwrap();
    assert_eq!(predicate.text, "(s.name = @SubModelName)");
}

/// A later registration for the same path replaces the earlier one.
#[test]
fn test_later_registration_replaces_auto_map() {
    let mapping = QueryMapping::builder("m")
        .auto_map(["Name"])
        .map("Name", "display_name", None)
        .build();

    let predicate = translate(&Expr::field("Name").equals("x"), &mapping).unwrap();
    assert_eq!(predicate.text, "(m.display_name = @Name)");
}

/// Unregistered paths fall back to the raw dotted path.
#[test]
fn test_unmapped_path_falls_back() {
    let predicate = translate(&Expr::field("Other.Thing").equals(1), &mapping()).unwrap();
    assert_eq!(predicate.text, "(Other.Thing = @OtherThing)");
}
