//! JSON mapping configuration
//!
//! ```json
//! {
//!   "table_alias": "m",
//!   "properties": ["Id", "Code", "Name", "ParentId"],
//!   "columns": [{ "path": "SubModel.Name", "column": "name", "alias": "s" }],
//!   "unmapped": "fallback"
//! }
//! ```
//!
//! `properties` are auto-mapped first; `columns` are applied afterwards and
//! win over an auto-mapped entry for the same path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{MappingError, MappingResult};
use super::mapping::{QueryMapping, UnmappedPolicy};
use crate::observability::{log_event_with_fields, Event};

/// Explicit column registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Model-level dotted path
    pub path: String,
    /// Column name, without table alias
    pub column: String,
    /// Table alias override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Mapping configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Default table alias (required)
    pub table_alias: String,

    /// Properties auto-mapped to snake_case columns
    #[serde(default)]
    pub properties: Vec<String>,

    /// Explicit registrations
    #[serde(default)]
    pub columns: Vec<ColumnMapping>,

    /// Unmapped path handling (default: fallback)
    #[serde(default)]
    pub unmapped: UnmappedPolicy,
}

impl MappingConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> MappingResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;

        let display = path.display().to_string();
        log_event_with_fields(
            Event::MappingLoaded,
            &[
                ("path", display.as_str()),
                ("table_alias", config.table_alias.as_str()),
            ],
        );

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> MappingResult<Self> {
        let config: MappingConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> MappingResult<()> {
        if self.table_alias.trim().is_empty() {
            return Err(MappingError::invalid("table_alias must not be empty"));
        }

        if let Some(i) = self.properties.iter().position(|p| p.trim().is_empty()) {
            return Err(MappingError::invalid(format!(
                "properties[{}] must not be empty",
                i
            )));
        }

        for (i, column) in self.columns.iter().enumerate() {
            if column.path.trim().is_empty() {
                return Err(MappingError::invalid(format!(
                    "columns[{}].path must not be empty",
                    i
                )));
            }
            if column.column.trim().is_empty() {
                return Err(MappingError::invalid(format!(
                    "columns[{}].column must not be empty",
                    i
                )));
            }
            if matches!(&column.alias, Some(alias) if alias.trim().is_empty()) {
                return Err(MappingError::invalid(format!(
                    "columns[{}].alias must not be empty when present",
                    i
                )));
            }
        }

        Ok(())
    }

    /// Builds the immutable mapping
    pub fn build(&self) -> QueryMapping {
        let builder = QueryMapping::builder(self.table_alias.as_str())
            .auto_map(&self.properties)
            .unmapped(self.unmapped);

        self.columns
            .iter()
            .fold(builder, |builder, c| {
                builder.map(&c.path, &c.column, c.alias.as_deref())
            })
            .build()
    }
}
