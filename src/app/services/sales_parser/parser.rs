//! Line-level parsing of raw pipe-delimited transaction records

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use super::stats::{ParseResult, ParseStats};
use crate::app::models::Transaction;
use crate::constants::{FIELD_COUNT, FIELD_DELIMITER, THOUSANDS_SEPARATOR};

/// Parse a batch of raw lines into transaction records
///
/// Input lines are expected to be pre-cleaned (no header, no blanks). Order
/// is preserved; malformed lines vanish except for the dropped count, so
/// `transactions.len() + stats.dropped == lines.len()` always holds.
pub fn parse_lines(lines: &[String]) -> ParseResult {
    let mut transactions = Vec::with_capacity(lines.len());
    let mut dropped = 0;

    for line in lines {
        match parse_line(line) {
            Some(transaction) => transactions.push(transaction),
            None => {
                debug!("Dropped malformed line: {}", line);
                dropped += 1;
            }
        }
    }

    let stats = ParseStats {
        total_lines: lines.len(),
        parsed: transactions.len(),
        dropped,
    };

    ParseResult {
        transactions,
        stats,
    }
}

/// Parse a single raw line into a transaction record
///
/// Returns `None` for any line that does not split into exactly eight
/// fields or whose numeric fields fail to parse after thousands separators
/// are stripped. No partial-record recovery is attempted.
pub fn parse_line(line: &str) -> Option<Transaction> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let quantity: i64 = strip_separators(fields[4]).parse().ok()?;
    let unit_price = Decimal::from_str(&strip_separators(fields[5])).ok()?;

    Some(Transaction {
        transaction_id: fields[0].to_string(),
        date: fields[1].to_string(),
        product_id: fields[2].to_string(),
        // Commas in free text would corrupt downstream delimited output
        product_name: fields[3].replace(',', " "),
        quantity,
        unit_price,
        customer_id: fields[6].to_string(),
        region: fields[7].to_string(),
    })
}

fn strip_separators(field: &str) -> String {
    field.trim().replace(THOUSANDS_SEPARATOR, "")
}
