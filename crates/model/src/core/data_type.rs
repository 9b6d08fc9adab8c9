use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Declared type of a table column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Numeric,
    String,
    Timestamp,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Numeric => "numeric",
            DataType::String => "string",
            DataType::Timestamp => "timestamp",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Numeric)
    }
}

impl FromStr for DataType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "number" | "float" | "double" => Ok(DataType::Numeric),
            "string" | "str" | "text" => Ok(DataType::String),
            "timestamp" | "datetime" => Ok(DataType::Timestamp),
            _ => Err(ConfigurationError::UnknownDataType(s.to_string())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
