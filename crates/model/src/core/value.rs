use crate::core::data_type::DataType;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed table cell. `Null` is the missing-value marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Timestamp(DateTime<Utc>),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Converts the cell back into the JSON shape a document field would
    /// carry. Timestamps are rendered as RFC 3339 with as many fractional
    /// digits as they need, so parsing the text back yields the same instant.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Number(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(v) => serde_json::Value::String(v.clone()),
            Value::Timestamp(v) => {
                serde_json::Value::String(v.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Null => serde_json::Value::Null,
        }
    }
}

/// A named cell within a row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
    pub data_type: DataType,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
            Value::Null => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_json_shapes() {
        assert_eq!(Value::Number(2.5).to_json(), serde_json::json!(2.5));
        assert_eq!(Value::Number(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(Value::Null.to_json(), serde_json::Value::Null);

        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(
            Value::Timestamp(ts).to_json(),
            serde_json::json!("2024-05-01T09:30:00Z")
        );

        let micros = ts + chrono::Duration::microseconds(123_456);
        assert_eq!(
            Value::Timestamp(micros).to_json(),
            serde_json::json!("2024-05-01T09:30:00.123456Z")
        );
    }
}
