//! Column-oriented statement table.
//!
//! A table is an ordered list of named columns; rows are positional
//! (index 0..n, statement transaction order). Reference tables are
//! loaded from CSV with the header row as the schema.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One table cell.
///
/// `Missing` doubles as the empty-cell marker and the coercion sentinel
/// for numeric cells that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Missing => write!(f, "<missing>"),
        }
    }
}

/// A named column with its ordered values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

/// An ordered set of named columns. Column order is schema order and
/// every column holds the same number of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table with the given schema (column names in order).
    pub fn new<I, S>(column_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = column_names
            .into_iter()
            .map(|name| Column {
                name: name.into(),
                values: Vec::new(),
            })
            .collect();
        Self { columns }
    }

    pub(crate) fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Append one row; the row must have one value per column.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            bail!(
                "row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            );
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.values.push(value);
        }
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Read a comma-delimited reference table. The header row is the
    /// schema; every cell is kept textual (empty cells become `Missing`)
    /// and typing is left to normalization.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let mut table = Table::new(headers.iter());

        for result in rdr.records() {
            let record = result?;
            let row = record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        Value::Missing
                    } else {
                        Value::Text(cell.to_string())
                    }
                })
                .collect();
            table.push_row(row)?;
        }

        Ok(table)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .with_context(|| format!("opening {}", path.as_ref().display()))?;
        Self::from_csv_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_keeps_columns_aligned() {
        let mut table = Table::new(["Date", "Amount"]);
        table
            .push_row(vec![
                Value::Text("2023-01-01".to_string()),
                Value::Number(4.5),
            ])
            .unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.columns()[1].values[0], Value::Number(4.5));
    }

    #[test]
    fn test_push_row_rejects_wrong_arity() {
        let mut table = Table::new(["Date", "Amount"]);
        let err = table
            .push_row(vec![Value::Text("2023-01-01".to_string())])
            .unwrap_err();
        assert!(err.to_string().contains("1 cells"));
    }

    #[test]
    fn test_from_csv_reader_header_is_schema() {
        let csv = "Date,Description,Amount\n2023-01-01,Coffee Shop,4.50\n2023-01-02,,1000\n";
        let table = Table::from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.column_names(), vec!["Date", "Description", "Amount"]);
        assert_eq!(table.num_rows(), 2);
        // Cells stay textual until normalization; empty cells are missing.
        assert_eq!(
            table.columns()[2].values[0],
            Value::Text("4.50".to_string())
        );
        assert_eq!(table.columns()[1].values[1], Value::Missing);
    }
}
