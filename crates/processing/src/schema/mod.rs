//! Column schemas driving normalization.
//!
//! A [`Schema`] can only be obtained through validation, so the normalizer
//! never has to second-guess it.

pub mod config;
pub mod fill_policy;
pub mod presets;

use crate::normalize::filter::SentinelFilter;
use fill_policy::FillPolicy;
use model::{core::data_type::DataType, error::ConfigurationError};
use std::collections::HashSet;

/// Declared type and fill rule of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub data_type: DataType,
    pub fill: FillPolicy,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, data_type: DataType, fill: FillPolicy) -> Self {
        ColumnSpec {
            name: name.into(),
            data_type,
            fill,
        }
    }
}

/// A validated table schema: ordered columns plus an optional row filter
/// applied after filling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    columns: Vec<ColumnSpec>,
    row_filter: Option<SentinelFilter>,
}

impl Schema {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<ColumnSpec>,
        row_filter: Option<SentinelFilter>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if columns.is_empty() {
            return Err(ConfigurationError::EmptySchema(name));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ConfigurationError::DuplicateColumn(column.name.clone()));
            }
            if column.fill.is_arithmetic() && !column.data_type.is_numeric() {
                return Err(ConfigurationError::IncompatibleFill {
                    column: column.name.clone(),
                    policy: column.fill.to_string(),
                    data_type: column.data_type.to_string(),
                });
            }
        }

        if let Some(filter) = &row_filter {
            let is_string_column = columns
                .iter()
                .any(|c| c.name == filter.column && c.data_type == DataType::String);
            if !is_string_column {
                return Err(ConfigurationError::InvalidFilterColumn(
                    filter.column.clone(),
                ));
            }
        }

        Ok(Schema {
            name,
            columns,
            row_filter,
        })
    }

    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            columns: Vec::new(),
            row_filter: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn row_filter(&self) -> Option<&SentinelFilter> {
        self.row_filter.as_ref()
    }
}

pub struct SchemaBuilder {
    name: String,
    columns: Vec<ColumnSpec>,
    row_filter: Option<SentinelFilter>,
}

impl SchemaBuilder {
    pub fn column(mut self, name: &str, data_type: DataType, fill: FillPolicy) -> Self {
        self.columns.push(ColumnSpec::new(name, data_type, fill));
        self
    }

    pub fn numeric(self, name: &str, fill: FillPolicy) -> Self {
        self.column(name, DataType::Numeric, fill)
    }

    pub fn string(self, name: &str) -> Self {
        self.column(name, DataType::String, FillPolicy::None)
    }

    pub fn timestamp(self, name: &str) -> Self {
        self.column(name, DataType::Timestamp, FillPolicy::None)
    }

    /// Drops rows whose `column` still equals the missing-string sentinel
    /// once filling is done.
    pub fn drop_missing(mut self, column: &str) -> Self {
        self.row_filter = Some(SentinelFilter::missing(column));
        self
    }

    pub fn build(self) -> Result<Schema, ConfigurationError> {
        Schema::new(self.name, self.columns, self.row_filter)
    }
}
