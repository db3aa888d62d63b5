//! ICICI Bank statement parser (text)
//!
//! Expected extracted-text section:
//!   Date        Description                                Debit Amt    Credit Amt      Balance
//!   01-01-2023  UPI/COFFEE SHOP/CR/412345                       4.50          0.00       995.50

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::contract::StatementParser;
use bankcert_core::{Table, Value};

/// Target schema of ICICI reference tables.
pub const ICICI_COLUMNS: [&str; 5] = ["Date", "Description", "Debit Amt", "Credit Amt", "Balance"];

pub struct IciciParser;

impl StatementParser for IciciParser {
    fn parse(&self, document_path: &Path) -> Result<Table> {
        let text = fs::read_to_string(document_path)
            .with_context(|| format!("reading {}", document_path.display()))?;
        parse_icici_text(&text)
    }
}

fn parse_amount(s: &str) -> f64 {
    s.replace(",", "").parse().unwrap_or(0.0)
}

/// Parse extracted statement text into an ICICI transaction table.
///
/// Rows before the column header line and any non-transaction lines
/// (footers, page furniture) are skipped.
pub fn parse_icici_text(text: &str) -> Result<Table> {
    let header_re = Regex::new(r"Date\s+Description\s+Debit Amt\s+Credit Amt\s+Balance")?;

    // DATE DESCRIPTION DEBIT CREDIT BALANCE
    let txn_re = Regex::new(concat!(
        r"^\s*(?P<date>\d{2}-\d{2}-\d{4})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<debit>[\d,]+\.\d{2})\s+",
        r"(?P<credit>[\d,]+\.\d{2})\s+",
        r"(?P<balance>-?[\d,]+\.\d{2})\s*$"
    ))?;

    let mut table = Table::new(ICICI_COLUMNS);
    let mut in_section = false;

    for line in text.lines() {
        if !in_section {
            if header_re.is_match(line) {
                in_section = true;
            }
            continue;
        }

        if let Some(caps) = txn_re.captures(line) {
            if NaiveDate::parse_from_str(&caps["date"], "%d-%m-%Y").is_err() {
                continue;
            }

            table.push_row(vec![
                Value::Text(caps["date"].to_string()),
                Value::Text(caps["desc"].trim().to_string()),
                Value::Number(parse_amount(&caps["debit"])),
                Value::Number(parse_amount(&caps["credit"])),
                Value::Number(parse_amount(&caps["balance"])),
            ])?;
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_icici_basic() {
        let text = r#"
ICICI BANK LIMITED
Statement of Account

Date        Description                                Debit Amt    Credit Amt      Balance
01-01-2023  UPI/COFFEE SHOP/CR/412345                       4.50          0.00       995.50
02-01-2023  NEFT/ACME PAYROLL/JAN                           0.00      1,000.00     1,995.50

Page 1 of 1
"#;

        let table = parse_icici_text(text).unwrap();
        assert_eq!(table.column_names(), ICICI_COLUMNS.to_vec());
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.columns()[2].values[0], Value::Number(4.50));
        assert_eq!(table.columns()[3].values[1], Value::Number(1000.00));
        assert_eq!(
            table.columns()[1].values[0],
            Value::Text("UPI/COFFEE SHOP/CR/412345".to_string())
        );
    }

    #[test]
    fn test_rows_before_header_are_ignored() {
        let text = r#"
01-01-2023  NOT YET IN SECTION                              1.00          0.00         1.00
Date        Description                                Debit Amt    Credit Amt      Balance
02-01-2023  REAL ROW                                        2.00          0.00         2.00
"#;

        let table = parse_icici_text(text).unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(
            table.columns()[1].values[0],
            Value::Text("REAL ROW".to_string())
        );
    }

    #[test]
    fn test_invalid_date_row_is_skipped() {
        let text = r#"
Date        Description                                Debit Amt    Credit Amt      Balance
45-13-2023  IMPOSSIBLE DATE                                 1.00          0.00         1.00
02-01-2023  VALID                                           2.00          0.00         2.00
"#;

        let table = parse_icici_text(text).unwrap();
        assert_eq!(table.num_rows(), 1);
    }

    #[test]
    fn test_no_transactions_yields_empty_schema_correct_table() {
        let table = parse_icici_text("Statement of Account\n").unwrap();
        assert_eq!(table.column_names(), ICICI_COLUMNS.to_vec());
        assert_eq!(table.num_rows(), 0);
    }
}
