//! Field/value table dumper

use super::Dumper;
use classnav_domain::error::Result;
use serde_json::Value;
use std::io::Write;

/// Column-aligned table output
///
/// An array of objects renders as one row per object with a header row; a
/// single object renders as a field/value table. Anything else falls back
/// to one cell per line.
#[derive(Default, Debug)]
pub struct TableDumper;

impl TableDumper {
    /// Create the table dumper
    pub fn new() -> Self {
        Self
    }
}

impl Dumper for TableDumper {
    fn dump(&self, out: &mut dyn Write, value: &Value) -> Result<()> {
        match value {
            Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
                let columns = collect_columns(items);
                let rows: Vec<Vec<String>> = items
                    .iter()
                    .map(|item| {
                        columns
                            .iter()
                            .map(|column| cell(item.get(column.as_str()).unwrap_or(&Value::Null)))
                            .collect()
                    })
                    .collect();
                write_table(out, &columns, &rows)
            }
            Value::Object(map) => {
                let columns = vec!["field".to_string(), "value".to_string()];
                let rows: Vec<Vec<String>> = map
                    .iter()
                    .map(|(key, entry)| vec![key.clone(), cell(entry)])
                    .collect();
                write_table(out, &columns, &rows)
            }
            other => {
                writeln!(out, "{}", cell(other))?;
                Ok(())
            }
        }
    }
}

fn collect_columns(items: &[Value]) -> Vec<String> {
    let mut columns = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn write_table(out: &mut dyn Write, columns: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = columns.iter().map(String::len).collect();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    let render_row = |out: &mut dyn Write, cells: &[String]| -> Result<()> {
        let line = cells
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{value:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
        Ok(())
    };

    render_row(out, &columns.to_vec())?;
    for row in rows {
        render_row(out, row)?;
    }
    Ok(())
}
