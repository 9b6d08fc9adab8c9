use super::numeric_column;
use crate::error::SummaryError;
use model::records::table::Table;
use serde::Serialize;
use std::fmt;

/// Descriptive statistics of one numeric column. Statistics are `None` when
/// the column has too few values to define them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnStats {
    pub fn from_values(column: &str, values: impl Iterator<Item = f64>) -> Self {
        let mut sorted: Vec<f64> = values.collect();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = (count > 0).then(|| sorted.iter().sum::<f64>() / count as f64);
        let std = match (mean, count) {
            (Some(mean), n) if n > 1 => {
                let squares: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
                Some((squares / (n - 1) as f64).sqrt())
            }
            _ => None,
        };

        ColumnStats {
            column: column.to_string(),
            count,
            mean,
            std,
            min: sorted.first().copied(),
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }
}

const ROW_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl ColumnStats {
    fn by_label(&self, label: &str) -> Option<f64> {
        match label {
            "count" => Some(self.count as f64),
            "mean" => self.mean,
            "std" => self.std,
            "min" => self.min,
            "25%" => self.q25,
            "50%" => self.q50,
            "75%" => self.q75,
            "max" => self.max,
            _ => None,
        }
    }
}

/// Linear interpolation between closest ranks of an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Description(pub Vec<ColumnStats>);

/// Summarizes the given numeric columns, skipping missing cells.
pub fn describe(table: &Table, columns: &[&str]) -> Result<Description, SummaryError> {
    let stats = columns
        .iter()
        .map(|name| -> Result<ColumnStats, SummaryError> {
            let column = numeric_column(table, name)?;
            Ok(ColumnStats::from_values(name, column.numbers()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Description(stats))
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .map(|s| s.column.len())
            .max()
            .unwrap_or(0)
            .max(12);

        write!(f, "{:<6}", "")?;
        for stats in &self.0 {
            write!(f, " {:>width$}", stats.column)?;
        }
        writeln!(f)?;

        for label in ROW_LABELS {
            write!(f, "{label:<6}")?;
            for stats in &self.0 {
                match stats.by_label(label) {
                    Some(v) => write!(f, " {v:>width$.6}")?,
                    None => write!(f, " {:>width$}", "NaN")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
