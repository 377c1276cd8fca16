//! SQL rendering
//!
//! The only place predicate SQL text is produced. Output is fully
//! parenthesised, values are always bound as `@name` parameters, and
//! parameters are emitted strictly in depth-first, left-to-right order.

mod output;
mod renderer;

pub use output::{NodeParameter, SqlPredicate};
pub use renderer::{parameter_name, SqlRenderer};
