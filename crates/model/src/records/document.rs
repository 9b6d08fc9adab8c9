use crate::records::record::FlatRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// A semi-structured record as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Store-assigned identifier; carried along but unused downstream.
    pub id: Option<String>,
    pub source: Map<String, JsonValue>,
}

impl Document {
    pub fn new(id: Option<String>, source: Map<String, JsonValue>) -> Self {
        Document { id, source }
    }

    /// Flattens nested objects into dotted column names.
    pub fn flatten(&self) -> FlatRecord {
        FlatRecord::from_object(&self.source)
    }
}
