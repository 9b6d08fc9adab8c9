use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

const SEPARATOR: char = '.';

/// A document projected onto a single level of named, still untyped fields.
///
/// Nested objects become `parent.child` columns. Arrays and scalars are kept
/// as-is, `null` stays `null`, and an empty nested object contributes no
/// column at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FlatRecord {
    fields: BTreeMap<String, JsonValue>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(object: &Map<String, JsonValue>) -> Self {
        let mut record = FlatRecord::new();
        for (key, value) in object {
            record.flatten_into(key.clone(), value);
        }
        record
    }

    fn flatten_into(&mut self, prefix: String, value: &JsonValue) {
        match value {
            JsonValue::Object(children) => {
                for (key, child) in children {
                    self.flatten_into(format!("{prefix}{SEPARATOR}{key}"), child);
                }
            }
            other => {
                self.fields.insert(prefix, other.clone());
            }
        }
    }

    pub fn get(&self, column: &str) -> Option<&JsonValue> {
        self.fields.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: JsonValue) {
        self.fields.insert(column.into(), value);
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, JsonValue)> for FlatRecord {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        FlatRecord {
            fields: iter.into_iter().collect(),
        }
    }
}
