//! HDFC Bank statement parser (text)
//!
//! Expected extracted-text section:
//!   Date      Narration                                Withdrawal Amt    Deposit Amt    Closing Balance
//!   03/02/23  POS 416021XXXXXX0305 BIG BAZAAR                  540.00           0.00           12460.00

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::contract::StatementParser;
use bankcert_core::{Table, Value};

/// Target schema of HDFC reference tables.
pub const HDFC_COLUMNS: [&str; 5] = [
    "Date",
    "Narration",
    "Withdrawal Amt",
    "Deposit Amt",
    "Closing Balance",
];

pub struct HdfcParser;

impl StatementParser for HdfcParser {
    fn parse(&self, document_path: &Path) -> Result<Table> {
        let text = fs::read_to_string(document_path)
            .with_context(|| format!("reading {}", document_path.display()))?;
        parse_hdfc_text(&text)
    }
}

fn parse_amount(s: &str) -> f64 {
    s.replace(",", "").parse().unwrap_or(0.0)
}

/// Parse extracted statement text into an HDFC transaction table.
///
/// HDFC rows carry DD/MM/YY dates; the narration keeps its internal
/// spacing, only outer padding is trimmed.
pub fn parse_hdfc_text(text: &str) -> Result<Table> {
    let header_re =
        Regex::new(r"Date\s+Narration\s+Withdrawal Amt\s+Deposit Amt\s+Closing Balance")?;

    let txn_re = Regex::new(concat!(
        r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\s+",
        r"(?P<narration>.+?)\s+",
        r"(?P<withdrawal>[\d,]+\.\d{2})\s+",
        r"(?P<deposit>[\d,]+\.\d{2})\s+",
        r"(?P<balance>-?[\d,]+\.\d{2})\s*$"
    ))?;

    let mut table = Table::new(HDFC_COLUMNS);
    let mut in_section = false;

    for line in text.lines() {
        if !in_section {
            if header_re.is_match(line) {
                in_section = true;
            }
            continue;
        }

        if let Some(caps) = txn_re.captures(line) {
            if NaiveDate::parse_from_str(&caps["date"], "%d/%m/%y").is_err() {
                continue;
            }

            table.push_row(vec![
                Value::Text(caps["date"].to_string()),
                Value::Text(caps["narration"].trim().to_string()),
                Value::Number(parse_amount(&caps["withdrawal"])),
                Value::Number(parse_amount(&caps["deposit"])),
                Value::Number(parse_amount(&caps["balance"])),
            ])?;
        }
    }

    Ok(table)
}
