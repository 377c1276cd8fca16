//! predsql - predicate trees to parameterized SQL
//!
//! Translates a typed filter expression into a parenthesized SQL boolean
//! expression with named `@Parameter` placeholders, plus the ordered values
//! to bind to them.
//!
//! Pipeline: `Expr` → `parser` (folding, macro expansion) → `ast::Node` →
//! `render` → `SqlPredicate`, with column identifiers taken from a
//! `mapping::QueryMapping`.
//!
//! ```ignore
//! use predsql::{translate, Expr, QueryMapping};
//!
//! let mapping = QueryMapping::builder("m").auto_map(["ParentId"]).build();
//! let filter = Expr::lambda(Expr::field("ParentId").equals(5));
//! let sql = translate(&filter, &mapping)?;
//! assert_eq!(sql.text, "(m.parent_id = @ParentId)");
//! ```

pub mod ast;
pub mod cli;
pub mod expand;
pub mod expr;
pub mod mapping;
pub mod observability;
pub mod parser;
pub mod render;
pub mod translate;

pub use ast::{LikePattern, Node, Operation, ValueKind};
pub use expr::{BinaryOperator, Expr, Method};
pub use mapping::{MappingConfig, Model, QueryMapping, UnmappedPolicy};
pub use parser::Parser;
pub use render::{NodeParameter, SqlPredicate, SqlRenderer};
pub use translate::{translate, TranslateError, TranslateResult, Translator};
