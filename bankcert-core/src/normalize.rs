//! Canonicalization applied to both tables before comparison.
//!
//! Numeric columns are coerced to floats rounded to 2 decimals, text
//! columns are stripped of leading/trailing whitespace. This neutralizes
//! cosmetic variance between extraction strategies ("100" vs "100.00",
//! trailing padding) while preserving real differences.

use crate::table::{Column, Table, Value};

/// Normalize a table into its canonical comparable form. Idempotent:
/// normalizing a normalized table yields an identical table.
pub fn normalize(table: &Table) -> Table {
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let values = if is_numeric_column(column) {
                column.values.iter().map(coerce_numeric).collect()
            } else {
                column.values.iter().map(coerce_text).collect()
            };
            Column {
                name: column.name.clone(),
                values,
            }
        })
        .collect();
    Table::from_columns(columns)
}

/// A column is numeric when every present value is a number or parses as
/// one. An all-missing column counts as numeric.
fn is_numeric_column(column: &Column) -> bool {
    column.values.iter().all(|value| match value {
        Value::Number(_) | Value::Missing => true,
        Value::Text(s) => parse_number(s).is_some(),
    })
}

fn coerce_numeric(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(round2(*n)),
        Value::Text(s) => match parse_number(s) {
            Some(n) => Value::Number(round2(n)),
            None => Value::Missing,
        },
        Value::Missing => Value::Missing,
    }
}

fn coerce_text(value: &Value) -> Value {
    match value {
        Value::Text(s) => {
            let stripped = s.trim();
            // Whitespace-only text collapses to the missing marker,
            // matching how empty cells load from CSV.
            if stripped.is_empty() {
                Value::Missing
            } else {
                Value::Text(stripped.to_string())
            }
        }
        Value::Number(n) => Value::Text(n.to_string()),
        Value::Missing => Value::Missing,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    // NaN/infinity are rejected so cell equality stays well-defined.
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
