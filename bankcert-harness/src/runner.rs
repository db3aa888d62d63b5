//! One verification run: Resolving → Parsing → Normalizing → Comparing.
//!
//! No retries and no partial success; a fixture either fully passes or
//! fails with exactly one error kind, surfaced verbatim to the caller.

use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use bankcert_core::{Nonconformance, Table, verify};
use bankcert_ingest::{ParserRegistry, ResolutionError};

use crate::fixture::Fixture;

/// Terminal failure of a single fixture's verification.
#[derive(Debug)]
pub enum HarnessError {
    /// No parser under any tolerated spelling.
    Resolution(ResolutionError),
    /// The implementation failed while reading/transforming the document;
    /// its original error context is preserved.
    Parse { bank: String, source: anyhow::Error },
    /// The reference side of the fixture could not be loaded.
    Fixture { path: PathBuf, source: anyhow::Error },
    /// The produced table is not equivalent to the reference.
    Nonconformance(Nonconformance),
}

impl HarnessError {
    /// Stable failure-kind tag for structured reports.
    pub fn kind(&self) -> &'static str {
        match self {
            HarnessError::Resolution(_) => "resolution",
            HarnessError::Parse { .. } => "parse",
            HarnessError::Fixture { .. } => "fixture",
            HarnessError::Nonconformance(nc) => nc.kind(),
        }
    }
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::Resolution(err) => write!(f, "{err}"),
            HarnessError::Parse { bank, source } => {
                write!(f, "parser for {bank:?} failed: {source:#}")
            }
            HarnessError::Fixture { path, source } => {
                write!(f, "loading reference table {}: {source:#}", path.display())
            }
            HarnessError::Nonconformance(nc) => write!(f, "{nc}"),
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<ResolutionError> for HarnessError {
    fn from(err: ResolutionError) -> Self {
        HarnessError::Resolution(err)
    }
}

impl From<Nonconformance> for HarnessError {
    fn from(err: Nonconformance) -> Self {
        HarnessError::Nonconformance(err)
    }
}

/// Diagnostics of a passed verification.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub bank: String,
    pub document: PathBuf,
    pub rows: usize,
    pub columns: Vec<String>,
}

/// Verify one fixture: resolve the bank's parser, parse the document,
/// then certify the produced table against the reference.
pub fn run(registry: &ParserRegistry, fixture: &Fixture) -> Result<Report, HarnessError> {
    debug!("resolving parser for {}", fixture.bank);
    let parser = registry.resolve(&fixture.bank)?;

    debug!("parsing {}", fixture.document.display());
    let produced = parser
        .parse(&fixture.document)
        .map_err(|source| HarnessError::Parse {
            bank: fixture.bank.clone(),
            source,
        })?;

    let reference =
        Table::from_csv_path(&fixture.reference).map_err(|source| HarnessError::Fixture {
            path: fixture.reference.clone(),
            source,
        })?;

    debug!(
        "comparing {} produced rows against {} reference rows",
        produced.num_rows(),
        reference.num_rows()
    );
    verify(&produced, &reference)?;

    Ok(Report {
        bank: fixture.bank.clone(),
        document: fixture.document.clone(),
        rows: reference.num_rows(),
        columns: reference
            .column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}
