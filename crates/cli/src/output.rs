use crate::error::CliError;
use model::records::table::Table;
use processing::summary::GroupMean;

const MAX_CELL_WIDTH: usize = 24;

/// Renders a table as aligned text, one header line and one line per row.
pub fn render_table(table: &Table) -> String {
    if table.columns().is_empty() {
        return "No data available.\n".to_string();
    }

    let cells: Vec<Vec<String>> = table
        .rows()
        .map(|row| {
            row.field_values
                .iter()
                .map(|field| truncate(&field.value.to_string()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(truncate(&column.name).chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!("{:<width$}", truncate(&column.name)))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn print_table(table: &Table) {
    print!("{}", render_table(table));
}

/// Prints every row as a JSON object, in table order.
pub fn print_json(table: &Table) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&table.to_records())?;
    println!("{json}");
    Ok(())
}

pub fn print_group_means(key: &str, value: &str, groups: &[GroupMean]) {
    println!("Average {value} by {key}:");
    for group in groups {
        let mean = group
            .mean
            .map(|m| format!("{m:.3}"))
            .unwrap_or_else(|| "NaN".to_string());
        println!("{:<24} {:>10} (n={})", group.key, mean, group.count);
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_CELL_WIDTH - 3).collect();
    short.push_str("...");
    short
}
