//! Parser / tree builder
//!
//! Turns a front-end `Expr` into the canonical predicate tree, folding
//! captured constants and expanding sugared predicate calls on the way.

mod parser;

pub use parser::Parser;
