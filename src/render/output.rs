//! Render output: SQL text plus ordered bind parameters

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named bind parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeParameter {
    pub name: String,
    pub value: Value,
}

impl NodeParameter {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Parenthesised SQL boolean expression with `@name` placeholders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlPredicate {
    pub text: String,
    /// In left-to-right, depth-first encounter order
    pub parameters: Vec<NodeParameter>,
}

impl SqlPredicate {
    /// Value bound under `name`, first occurrence
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Parameter names in bind order
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }

    pub(super) fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub(super) fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub(super) fn bind(&mut self, name: String, value: Value) {
        self.parameters.push(NodeParameter { name, value });
    }
}

impl fmt::Display for SqlPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
