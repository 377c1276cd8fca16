//! Parse + render in one call

use crate::expr::Expr;
use crate::mapping::QueryMapping;
use crate::observability::{log_event_with_fields, Event};
use crate::parser::Parser;
use crate::render::{SqlPredicate, SqlRenderer};

use super::errors::TranslateResult;

/// Translates an expression into SQL against `mapping`
pub fn translate(expr: &Expr, mapping: &QueryMapping) -> TranslateResult<SqlPredicate> {
    Translator::new(mapping).translate(expr)
}

/// Reusable translator bound to one mapping
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    mapping: &'a QueryMapping,
}

impl<'a> Translator<'a> {
    pub fn new(mapping: &'a QueryMapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &'a QueryMapping {
        self.mapping
    }

    pub fn translate(&self, expr: &Expr) -> TranslateResult<SqlPredicate> {
        let result = Parser::new()
            .parse(expr)
            .and_then(|node| SqlRenderer::new(self.mapping).render(&node));

        match &result {
            Ok(predicate) => {
                let parameters = predicate.parameters.len().to_string();
                let text_length = predicate.text.len().to_string();
                log_event_with_fields(
                    Event::PredicateTranslated,
                    &[
                        ("parameters", parameters.as_str()),
                        ("table_alias", self.mapping.table_alias()),
                        ("text_length", text_length.as_str()),
                    ],
                );
            }
            Err(err) => {
                let reason = err.to_string();
                log_event_with_fields(
                    Event::PredicateRejected,
                    &[("code", err.code()), ("reason", reason.as_str())],
                );
            }
        }

        result
    }
}
