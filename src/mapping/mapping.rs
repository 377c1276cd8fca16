//! Member path → SQL identifier resolution
//!
//! A `QueryMapping` is built once per model type and only read afterwards,
//! so one instance can serve concurrent translations.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::naming::to_snake_column;
use crate::observability::{log_event_with_fields, Event};
use crate::translate::{TranslateError, TranslateResult};

/// Property list of a model type
///
/// Stands in for runtime reflection: a model names its public properties and
/// `auto_map_all_properties` registers each under the default column name.
pub trait Model {
    fn properties() -> &'static [&'static str];
}

/// What `resolve` does with a path that has no registered identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Use the raw dotted path as the identifier
    #[default]
    Fallback,
    /// Fail the translation with `UnmappedMember`
    Reject,
}

/// Immutable path → identifier table for one model type
#[derive(Debug, Clone)]
pub struct QueryMapping {
    table_alias: String,
    entries: HashMap<String, String>,
    policy: UnmappedPolicy,
}

impl QueryMapping {
    /// Starts a mapping whose default table alias is `table_alias`
    pub fn builder(table_alias: impl Into<String>) -> MappingBuilder {
        MappingBuilder {
            mapping: QueryMapping {
                table_alias: table_alias.into(),
                entries: HashMap::new(),
                policy: UnmappedPolicy::default(),
            },
        }
    }

    /// Mapping with every property of `M` auto-mapped under `table_alias`
    pub fn for_model<M: Model>(table_alias: impl Into<String>) -> Self {
        Self::builder(table_alias).auto_map_all_properties::<M>().build()
    }

    pub fn table_alias(&self) -> &str {
        &self.table_alias
    }

    pub fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    /// Registered identifier for a model-level dotted path
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Identifier for `path`, applying the unmapped policy
    pub fn resolve<'a>(&'a self, path: &'a str) -> TranslateResult<&'a str> {
        if let Some(identifier) = self.lookup(path) {
            return Ok(identifier);
        }

        match self.policy {
            UnmappedPolicy::Fallback => {
                log_event_with_fields(
                    Event::MemberUnmapped,
                    &[("path", path), ("table_alias", self.table_alias.as_str())],
                );
                Ok(path)
            }
            UnmappedPolicy::Reject => Err(TranslateError::UnmappedMember(path.to_string())),
        }
    }

    /// All entries, ordered by path
    pub fn entries(&self) -> BTreeMap<&str, &str> {
        self.entries
            .iter()
            .map(|(path, identifier)| (path.as_str(), identifier.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Setup phase of a `QueryMapping`
#[derive(Debug, Clone)]
pub struct MappingBuilder {
    mapping: QueryMapping,
}

impl MappingBuilder {
    /// Registers every property of `M` as `{alias}.{snake_case}`
    pub fn auto_map_all_properties<M: Model>(self) -> Self {
        self.auto_map(M::properties().iter().copied())
    }

    /// Registers each property as `{alias}.{snake_case}`
    pub fn auto_map<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for property in properties {
            let property = property.as_ref();
            let column = to_snake_column(property);
            self.insert(property, &column, None);
        }
        self
    }

    /// Registers `path` as `{alias}.{column}`, replacing any earlier entry.
    ///
    /// `alias_override` targets another table, e.g. a joined child row.
    pub fn map(mut self, path: &str, column: &str, alias_override: Option<&str>) -> Self {
        self.insert(path, column, alias_override);
        self
    }

    pub fn unmapped(mut self, policy: UnmappedPolicy) -> Self {
        self.mapping.policy = policy;
        self
    }

    pub fn build(self) -> QueryMapping {
        self.mapping
    }

    fn insert(&mut self, path: &str, column: &str, alias_override: Option<&str>) {
        let alias = alias_override.unwrap_or(self.mapping.table_alias.as_str());
        let identifier = format!("{}.{}", alias, column);
        self.mapping.entries.insert(path.to_string(), identifier);
    }
}
