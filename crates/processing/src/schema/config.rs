use super::{ColumnSpec, Schema, fill_policy::FillPolicy};
use crate::normalize::filter::{MISSING_STRING, SentinelFilter};
use model::{core::data_type::DataType, error::ConfigurationError};
use serde::{Deserialize, Serialize};

/// Serialized form of a schema, e.g. read from a JSON file:
///
/// ```json
/// {
///   "name": "weather",
///   "columns": [
///     { "name": "temp", "type": "numeric", "fill": "interpolate" },
///     { "name": "station", "type": "string" }
///   ],
///   "drop_rows": { "column": "station" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_rows: Option<RowFilterConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowFilterConfig {
    pub column: String,
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

fn default_sentinel() -> String {
    MISSING_STRING.to_string()
}

impl SchemaConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(raw).map_err(|e| ConfigurationError::InvalidSchema(e.to_string()))
    }
}

impl TryFrom<SchemaConfig> for Schema {
    type Error = ConfigurationError;

    fn try_from(config: SchemaConfig) -> Result<Self, Self::Error> {
        let columns = config
            .columns
            .into_iter()
            .map(|c| -> Result<ColumnSpec, ConfigurationError> {
                let data_type: DataType = c.data_type.parse()?;
                let fill = match c.fill {
                    Some(raw) => raw.parse::<FillPolicy>()?,
                    None => FillPolicy::None,
                };
                Ok(ColumnSpec::new(c.name, data_type, fill))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let row_filter = config
            .drop_rows
            .map(|f| SentinelFilter::new(f.column, f.sentinel));

        Schema::new(config.name, columns, row_filter)
    }
}

impl From<&Schema> for SchemaConfig {
    fn from(schema: &Schema) -> Self {
        SchemaConfig {
            name: schema.name().to_string(),
            columns: schema
                .columns()
                .iter()
                .map(|c| ColumnConfig {
                    name: c.name.clone(),
                    data_type: c.data_type.to_string(),
                    fill: (c.fill != FillPolicy::None).then(|| c.fill.to_string()),
                })
                .collect(),
            drop_rows: schema.row_filter().map(|f| RowFilterConfig {
                column: f.column.clone(),
                sentinel: f.sentinel.clone(),
            }),
        }
    }
}

impl Schema {
    /// Parses and validates a schema from its JSON form.
    pub fn from_json(raw: &str) -> Result<Self, ConfigurationError> {
        SchemaConfig::from_json(raw)?.try_into()
    }
}
