//! Per-bank fixture pairs.
//!
//! Fixtures live in a conventional per-bank directory:
//! `<data_dir>/<bank>/<bank>_sample.txt` (extracted statement text) and
//! `<data_dir>/<bank>/<bank>_sample.csv` (reference table).

use std::path::{Path, PathBuf};

/// One (input document, reference table) pair for a bank. Immutable for
/// the duration of a verification run.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub bank: String,
    pub document: PathBuf,
    pub reference: PathBuf,
}

impl Fixture {
    /// Fixture paths for `bank` under the conventional layout.
    pub fn for_bank(data_dir: impl AsRef<Path>, bank: &str) -> Self {
        let dir = data_dir.as_ref().join(bank);
        Self {
            bank: bank.to_string(),
            document: dir.join(format!("{bank}_sample.txt")),
            reference: dir.join(format!("{bank}_sample.csv")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_paths() {
        let fixture = Fixture::for_bank("data", "icici");
        assert_eq!(fixture.bank, "icici");
        assert_eq!(fixture.document, PathBuf::from("data/icici/icici_sample.txt"));
        assert_eq!(fixture.reference, PathBuf::from("data/icici/icici_sample.csv"));
    }
}
