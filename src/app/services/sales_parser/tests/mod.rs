//! Tests for the sales record parser

pub mod parser_tests;
pub mod stats_tests;

/// Build owned lines from string literals for parser input
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
