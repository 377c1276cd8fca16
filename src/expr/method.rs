//! Recognised predicate methods

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::LikePattern;
use crate::translate::{TranslateError, TranslateResult};

/// Named predicate a call expression can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    StartsWith,
    /// Substring match on a member, or membership in a collection
    Contains,
    EndsWith,
    /// Null-safe membership or substring match
    ContainsOrNull,
    /// Null-safe substring match
    LikeOrNull,
    /// Null-safe equality
    EqualsOrNull,
}

impl Method {
    /// Looks a method up by name
    pub fn from_name(name: &str, arity: usize) -> TranslateResult<Self> {
        match name {
            "StartsWith" => Ok(Method::StartsWith),
            "Contains" => Ok(Method::Contains),
            "EndsWith" => Ok(Method::EndsWith),
            "ContainsOrNull" => Ok(Method::ContainsOrNull),
            "LikeOrNull" => Ok(Method::LikeOrNull),
            "EqualsOrNull" => Ok(Method::EqualsOrNull),
            _ => Err(TranslateError::operation(name, arity)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::StartsWith => "StartsWith",
            Method::Contains => "Contains",
            Method::EndsWith => "EndsWith",
            Method::ContainsOrNull => "ContainsOrNull",
            Method::LikeOrNull => "LikeOrNull",
            Method::EqualsOrNull => "EqualsOrNull",
        }
    }

    /// String-matching methods callable with a single argument
    pub fn like_pattern(&self) -> Option<LikePattern> {
        match self {
            Method::StartsWith => Some(LikePattern::StartsWith),
            Method::Contains => Some(LikePattern::Contains),
            Method::EndsWith => Some(LikePattern::EndsWith),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
