//! Predicate translation
//!
//! `Expr` → parser (folding, macro expansion) → `Node` → renderer →
//! `SqlPredicate`. Translation is synchronous and owns its tree and output
//! buffer; the only shared input is the read-only `QueryMapping`.

mod errors;
mod translator;

pub use errors::{TranslateError, TranslateResult};
pub use translator::{translate, Translator};
