pub mod coercion;
pub mod fill;
pub mod filter;

use crate::schema::Schema;
use coercion::coerce;
use filter::{Filter, MISSING_STRING};
use model::{
    core::{data_type::DataType, value::Value},
    records::{
        record::FlatRecord,
        table::{Column, Table},
    },
};
use tracing::{debug, info, warn};

/// Turns flattened records into a typed table.
///
/// Columns are processed in schema order: every cell is coerced to the
/// declared type (failures become missing), the column's fill policy is
/// applied, and string cells still missing afterwards become `"nan"`.
/// Finally the schema's row filter, if any, drops matching rows. Record
/// fields not named by the schema are not carried over.
pub fn normalize(records: &[FlatRecord], schema: &Schema) -> Table {
    let mut columns = Vec::with_capacity(schema.columns().len());

    for spec in schema.columns() {
        let mut values: Vec<Value> = records
            .iter()
            .map(|record| coerce(record.get(&spec.name), spec.data_type))
            .collect();

        let missing = values.iter().filter(|v| v.is_null()).count();
        fill::apply(&mut values, spec.fill);

        if spec.data_type == DataType::String {
            for value in values.iter_mut().filter(|v| v.is_null()) {
                *value = Value::String(MISSING_STRING.to_string());
            }
        }

        if missing > 0 {
            let remaining = values.iter().filter(|v| v.is_null()).count();
            debug!(
                "Column '{}': {} missing, {} left after {}",
                spec.name, missing, remaining, spec.fill
            );
        }
        columns.push(Column::new(spec.name.clone(), spec.data_type, values));
    }

    let Some(mut table) = Table::from_columns(schema.name(), columns) else {
        warn!("Columns of '{}' differ in length", schema.name());
        return Table::new(schema.name());
    };

    if let Some(filter) = schema.row_filter() {
        let before = table.row_count();
        table.retain_rows(|row| filter.should_keep(row));
        let dropped = before - table.row_count();
        if dropped > 0 {
            info!(
                "Dropped {} rows where '{}' is '{}'",
                dropped, filter.column, filter.sentinel
            );
        }
    }

    table
}
