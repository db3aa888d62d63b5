//! The contract every bank statement parser satisfies.

use anyhow::Result;
use bankcert_core::Table;
use std::path::Path;

/// A stateless statement parser: one document path in, one table out.
///
/// The returned table's column names and order must exactly match the
/// bank's target schema — no extra or missing columns. The contract does
/// not validate the input document; an implementation that cannot read or
/// transform it surfaces a descriptive error, or returns an empty/partial
/// table and lets verification report the shortfall. Implementations must
/// not touch anything beyond reading the document.
///
/// Any type implementing this trait is acceptable to the harness,
/// whatever its internals (lookup tables, layout heuristics, ...).
pub trait StatementParser {
    fn parse(&self, document_path: &Path) -> Result<Table>;
}
