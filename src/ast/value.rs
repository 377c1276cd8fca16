//! Declared value kinds and LIKE placeholder patterns

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a literal or member.
///
/// The declared kind can differ from the runtime value: a `null` bound to an
/// id-set filter is still a `Collection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Unknown / not declared
    #[default]
    Any,
    Boolean,
    Integer,
    Float,
    Text,
    /// Array or other set-valued type (never text)
    Collection,
    /// Structured value with named members
    Record,
}

impl ValueKind {
    /// Infers the kind of a concrete value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Any,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::Collection,
            Value::Object(_) => ValueKind::Record,
        }
    }

    /// Keeps a declared kind, falling back to the value's own kind
    pub fn or_infer(self, value: &Value) -> Self {
        match self {
            ValueKind::Any => ValueKind::of(value),
            declared => declared,
        }
    }

    /// Set-valued binds get a distinct parameter name
    pub fn is_collection(&self) -> bool {
        matches!(self, ValueKind::Collection)
    }
}

/// Placeholder formatters applied to a LIKE operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikePattern {
    /// `@p + '%'`
    StartsWith,
    /// `'%' + @p + '%'`
    Contains,
    /// `'%' + @p`
    EndsWith,
}

impl LikePattern {
    /// Wraps a rendered placeholder
    pub fn apply(&self, placeholder: &str) -> String {
        match self {
            LikePattern::StartsWith => format!("{} + '%'", placeholder),
            LikePattern::Contains => format!("'%' + {} + '%'", placeholder),
            LikePattern::EndsWith => format!("'%' + {}", placeholder),
        }
    }
}
