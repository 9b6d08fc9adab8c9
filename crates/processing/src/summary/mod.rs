//! Read-only views over a normalized table.

pub mod describe;
pub mod group;
pub mod info;

pub use describe::{ColumnStats, Description, describe};
pub use group::{GroupMean, group_mean};
pub use info::{TableInfo, info};

use crate::error::SummaryError;
use model::records::table::{Column, Table};

fn numeric_column<'a>(table: &'a Table, name: &str) -> Result<&'a Column, SummaryError> {
    let column = table
        .column(name)
        .ok_or_else(|| SummaryError::UnknownColumn(name.to_string()))?;
    if !column.data_type.is_numeric() {
        return Err(SummaryError::NotNumeric {
            column: name.to_string(),
            data_type: column.data_type,
        });
    }
    Ok(column)
}
