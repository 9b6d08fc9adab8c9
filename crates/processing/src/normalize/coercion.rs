use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use model::core::{data_type::DataType, value::Value};
use serde_json::Value as JsonValue;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y%m%d%H%M%S",
];

/// Coerces a raw field into `data_type`. Anything that does not convert
/// becomes `Value::Null`; coercion never fails.
pub fn coerce(raw: Option<&JsonValue>, data_type: DataType) -> Value {
    let Some(raw) = raw else {
        return Value::Null;
    };
    match data_type {
        DataType::Numeric => to_number(raw),
        DataType::String => to_text(raw),
        DataType::Timestamp => to_timestamp(raw),
    }
}

fn to_number(raw: &JsonValue) -> Value {
    let number = match raw {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    match number {
        Some(v) if v.is_finite() => Value::Number(v),
        _ => Value::Null,
    }
}

fn to_text(raw: &JsonValue) -> Value {
    match raw {
        JsonValue::Null => Value::Null,
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => Value::String(n.to_string()),
        JsonValue::Bool(b) => Value::String(b.to_string()),
        other => Value::String(other.to_string()),
    }
}

fn to_timestamp(raw: &JsonValue) -> Value {
    let parsed = match raw {
        JsonValue::String(s) => parse_datetime(s.trim()),
        // Integer timestamps are epoch milliseconds, as the store returns
        // them for date fields.
        JsonValue::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };
    parsed.map(Value::Timestamp).unwrap_or(Value::Null)
}

pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
