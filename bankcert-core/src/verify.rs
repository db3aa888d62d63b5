//! Equivalence check between a parser's output and a reference table.
//!
//! Both tables are normalized independently, then compared in order:
//! schema (column names and order), row count, cell values. The checks
//! short-circuit; a schema mismatch is reported without comparing rows.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::table::{Table, Value};

/// Why a produced table failed certification against its reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Nonconformance {
    /// Column set or order differs.
    Schema {
        produced: Vec<String>,
        expected: Vec<String>,
    },
    /// Row counts differ.
    Cardinality { produced: usize, expected: usize },
    /// First differing cell after normalization, in row-major order.
    Value {
        row: usize,
        column: String,
        produced: Value,
        expected: Value,
    },
}

impl Nonconformance {
    pub fn kind(&self) -> &'static str {
        match self {
            Nonconformance::Schema { .. } => "schema",
            Nonconformance::Cardinality { .. } => "cardinality",
            Nonconformance::Value { .. } => "value",
        }
    }
}

impl std::fmt::Display for Nonconformance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nonconformance::Schema { produced, expected } => write!(
                f,
                "schema mismatch: produced columns {produced:?}, expected {expected:?}"
            ),
            Nonconformance::Cardinality { produced, expected } => write!(
                f,
                "row count mismatch: produced {produced} rows, expected {expected}"
            ),
            Nonconformance::Value {
                row,
                column,
                produced,
                expected,
            } => write!(
                f,
                "value mismatch at row {row}, column {column:?}: produced {produced}, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for Nonconformance {}

/// Certify `produced` against `reference`. Both tables are normalized
/// with the same procedure, never cross-contaminated.
pub fn verify(produced: &Table, reference: &Table) -> Result<(), Nonconformance> {
    let produced = normalize(produced);
    let reference = normalize(reference);

    if produced.column_names() != reference.column_names() {
        return Err(Nonconformance::Schema {
            produced: produced.column_names().iter().map(|s| s.to_string()).collect(),
            expected: reference.column_names().iter().map(|s| s.to_string()).collect(),
        });
    }

    if produced.num_rows() != reference.num_rows() {
        return Err(Nonconformance::Cardinality {
            produced: produced.num_rows(),
            expected: reference.num_rows(),
        });
    }

    for row in 0..reference.num_rows() {
        for (got, want) in produced.columns().iter().zip(reference.columns()) {
            if got.values[row] != want.values[row] {
                return Err(Nonconformance::Value {
                    row,
                    column: want.name.clone(),
                    produced: got.values[row].clone(),
                    expected: want.values[row].clone(),
                });
            }
        }
    }

    Ok(())
}
