use crate::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    records::{record::FlatRecord, row::RowData},
};
use serde::{Deserialize, Serialize};

/// A single typed column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType, values: Vec<Value>) -> Self {
        Column {
            name: name.into(),
            data_type,
            values,
        }
    }

    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }

    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(Value::as_f64)
    }
}

/// Ordered rows over a fixed column set, stored column by column.
///
/// All columns hold the same number of cells; row `i` is the `i`-th cell of
/// every column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub name: String,
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            columns: Vec::new(),
            row_count: 0,
        }
    }

    /// Builds a table from columns of equal length. Returns `None` when the
    /// lengths disagree.
    pub fn from_columns(name: impl Into<String>, columns: Vec<Column>) -> Option<Self> {
        let row_count = columns.first().map_or(0, |c| c.values.len());
        if columns.iter().any(|c| c.values.len() != row_count) {
            return None;
        }
        Some(Table {
            name: name.into(),
            columns,
            row_count,
        })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn row(&self, index: usize) -> Option<RowData> {
        if index >= self.row_count {
            return None;
        }
        let fields = self
            .columns
            .iter()
            .map(|c| FieldValue {
                name: c.name.clone(),
                value: c.values[index].clone(),
                data_type: c.data_type,
            })
            .collect();
        Some(RowData::new(&self.name, fields))
    }

    pub fn rows(&self) -> impl Iterator<Item = RowData> + '_ {
        (0..self.row_count).filter_map(|i| self.row(i))
    }

    /// Keeps the rows for which `keep` returns true, preserving order.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&RowData) -> bool,
    {
        let mask: Vec<bool> = self.rows().map(|row| keep(&row)).collect();
        for column in &mut self.columns {
            let mut flags = mask.iter();
            column.values.retain(|_| *flags.next().unwrap_or(&false));
        }
        self.row_count = mask.iter().filter(|k| **k).count();
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        let take = n.min(self.row_count);
        Table {
            name: self.name.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.name.clone(), c.data_type, c.values[..take].to_vec()))
                .collect(),
            row_count: take,
        }
    }

    /// Renders the table back into untyped records, e.g. to feed it through
    /// normalization again.
    pub fn to_records(&self) -> Vec<FlatRecord> {
        (0..self.row_count)
            .map(|i| {
                self.columns
                    .iter()
                    .map(|c| (c.name.clone(), c.values[i].to_json()))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(
            "weather",
            vec![
                Column::new(
                    "station",
                    DataType::String,
                    vec![
                        Value::String("a".into()),
                        Value::String("nan".into()),
                        Value::String("c".into()),
                    ],
                ),
                Column::new(
                    "rain",
                    DataType::Numeric,
                    vec![Value::Number(1.0), Value::Null, Value::Number(3.0)],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_columns_rejects_ragged_input() {
        let ragged = Table::from_columns(
            "t",
            vec![
                Column::new("a", DataType::Numeric, vec![Value::Null]),
                Column::new("b", DataType::Numeric, vec![]),
            ],
        );
        assert!(ragged.is_none());
    }

    #[test]
    fn test_rows_follow_column_order() {
        let table = sample();
        let row = table.row(2).unwrap();
        assert_eq!(row.entity, "weather");
        assert_eq!(row.field_values[0].name, "station");
        assert_eq!(row.get_value("rain"), Value::Number(3.0));
        assert!(table.row(3).is_none());
    }

    #[test]
    fn test_retain_rows_keeps_order() {
        let mut table = sample();
        table.retain_rows(|row| row.get_value("station") != Value::String("nan".into()));

        assert_eq!(table.row_count(), 2);
        let stations: Vec<_> = table
            .rows()
            .map(|r| r.get_value("station").to_string())
            .collect();
        assert_eq!(stations, vec!["a", "c"]);
        assert_eq!(table.column("rain").unwrap().values.len(), 2);
    }

    #[test]
    fn test_head_and_to_records() {
        let table = sample();
        let head = table.head(10);
        assert_eq!(head.row_count(), 3);

        let records = table.head(1).to_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("rain"), Some(&serde_json::json!(1.0)));
    }
}
