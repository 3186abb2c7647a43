//! Parsing statistics and result structures

use crate::app::models::Transaction;

/// Statistics for a parsing pass over raw input lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of input lines offered to the parser
    pub total_lines: usize,
    /// Number of lines that produced a record
    pub parsed: usize,
    /// Number of lines dropped for wrong field count or unparsable numerics
    pub dropped: usize,
}

impl ParseStats {
    /// Fraction of lines that parsed, as a percentage
    pub fn parse_rate(&self) -> f64 {
        if self.total_lines == 0 {
            100.0
        } else {
            (self.parsed as f64 / self.total_lines as f64) * 100.0
        }
    }
}

/// Result of parsing a batch of raw lines
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records in input line order
    pub transactions: Vec<Transaction>,
    /// Counts for the parsing pass
    pub stats: ParseStats,
}

impl ParseResult {
    /// Number of parsed records
    pub fn record_count(&self) -> usize {
        self.transactions.len()
    }
}
