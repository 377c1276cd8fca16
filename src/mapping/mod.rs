//! Mapping resolver
//!
//! Resolves model-level member paths (`SubModel.Name`) to SQL identifiers
//! (`s.name`). Nested paths are keyed by their model-level dotted form, never
//! by the parent's resolved identifier, so one override for `SubModel.Name`
//! does not depend on how `SubModel` itself resolves.
//!
//! Unregistered paths fall back to the raw path unless the mapping was built
//! with `UnmappedPolicy::Reject`.

mod config;
mod errors;
mod mapping;
mod naming;

pub use config::{ColumnMapping, MappingConfig};
pub use errors::{MappingError, MappingResult};
pub use mapping::{MappingBuilder, Model, QueryMapping, UnmappedPolicy};
pub use naming::to_snake_column;
