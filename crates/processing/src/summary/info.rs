use model::{core::data_type::DataType, records::table::Table};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub data_type: DataType,
}

/// Shape of a table: row count plus per-column non-missing counts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableInfo {
    pub name: String,
    pub rows: usize,
    pub columns: Vec<ColumnInfo>,
}

pub fn info(table: &Table) -> TableInfo {
    TableInfo {
        name: table.name.clone(),
        rows: table.row_count(),
        columns: table
            .columns()
            .iter()
            .map(|c| ColumnInfo {
                name: c.name.clone(),
                non_null: c.non_null_count(),
                data_type: c.data_type,
            })
            .collect(),
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return writeln!(f, "No data available.");
        }
        writeln!(f, "Table '{}': {} rows", self.name, self.rows)?;
        writeln!(f, "Data columns (total {} columns):", self.columns.len())?;
        let width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max("Column".len());
        writeln!(f, " #   {:<width$}  Non-Null Count  Dtype", "Column")?;
        for (i, column) in self.columns.iter().enumerate() {
            writeln!(
                f,
                " {:<3} {:<width$}  {:>5} non-null  {}",
                i, column.name, column.non_null, column.data_type
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{core::value::Value, records::table::Column};

    #[test]
    fn test_info_counts_non_missing() {
        let table = Table::from_columns(
            "tree",
            vec![
                Column::new(
                    "height",
                    DataType::Numeric,
                    vec![Value::Number(3.0), Value::Null],
                ),
                Column::new(
                    "status",
                    DataType::String,
                    vec![Value::String("nan".into()), Value::String("Active".into())],
                ),
            ],
        )
        .unwrap();

        let summary = info(&table);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.columns[0].non_null, 1);
        assert_eq!(summary.columns[1].non_null, 2);

        let rendered = summary.to_string();
        assert!(rendered.contains("Table 'tree': 2 rows"));
        assert!(rendered.contains("height"));
    }

    #[test]
    fn test_empty_table_message() {
        assert_eq!(info(&Table::new("t")).to_string(), "No data available.\n");
    }
}
