//! Tests for parsing statistics

use crate::app::services::sales_parser::ParseStats;

#[test]
fn test_parse_rate_empty_input() {
    let stats = ParseStats::default();
    assert_eq!(stats.parse_rate(), 100.0);
}

#[test]
fn test_parse_rate_partial() {
    let stats = ParseStats {
        total_lines: 10,
        parsed: 8,
        dropped: 2,
    };
    assert_eq!(stats.parse_rate(), 80.0);
}

#[test]
fn test_parse_rate_all_dropped() {
    let stats = ParseStats {
        total_lines: 4,
        parsed: 0,
        dropped: 4,
    };
    assert_eq!(stats.parse_rate(), 0.0);
}
