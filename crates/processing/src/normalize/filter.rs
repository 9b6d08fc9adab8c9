use model::{core::value::Value, records::row::RowData};

/// Text written into string cells that are still missing after filling.
pub const MISSING_STRING: &str = "nan";

pub trait Filter: Send + Sync {
    fn should_keep(&self, row: &RowData) -> bool;
}

/// Drops rows whose string `column` equals `sentinel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelFilter {
    pub column: String,
    pub sentinel: String,
}

impl SentinelFilter {
    pub fn new(column: impl Into<String>, sentinel: impl Into<String>) -> Self {
        SentinelFilter {
            column: column.into(),
            sentinel: sentinel.into(),
        }
    }

    /// Targets the missing-string sentinel.
    pub fn missing(column: impl Into<String>) -> Self {
        Self::new(column, MISSING_STRING)
    }
}

impl Filter for SentinelFilter {
    fn should_keep(&self, row: &RowData) -> bool {
        match row.get(&self.column).map(|f| &f.value) {
            Some(Value::String(text)) => *text != self.sentinel,
            _ => true,
        }
    }
}
