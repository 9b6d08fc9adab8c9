use super::numeric_column;
use crate::error::SummaryError;
use model::records::table::Table;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupMean {
    pub key: String,
    /// Non-missing values that went into the mean.
    pub count: usize,
    pub mean: Option<f64>,
}

/// Mean of `value` per distinct `key`, groups in ascending key order.
/// Rows with a missing key are skipped, as are missing values.
pub fn group_mean(table: &Table, key: &str, value: &str) -> Result<Vec<GroupMean>, SummaryError> {
    let keys = table
        .column(key)
        .ok_or_else(|| SummaryError::UnknownColumn(key.to_string()))?;
    let values = numeric_column(table, value)?;

    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (k, v) in keys.values.iter().zip(&values.values) {
        if k.is_null() {
            continue;
        }
        let entry = groups.entry(k.to_string()).or_insert((0.0, 0));
        if let Some(v) = v.as_f64() {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key,
            count,
            mean: (count > 0).then(|| sum / count as f64),
        })
        .collect())
}
