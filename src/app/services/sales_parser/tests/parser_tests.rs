//! Tests for line-level record parsing

use super::lines;
use crate::app::services::sales_parser::{parse_line, parse_lines};
use rust_decimal_macros::dec;

#[test]
fn test_parse_well_formed_line() {
    let txn = parse_line("T1001|2024-01-01|P101|Widget|5|10.00|C1|North").unwrap();

    assert_eq!(txn.transaction_id, "T1001");
    assert_eq!(txn.date, "2024-01-01");
    assert_eq!(txn.product_id, "P101");
    assert_eq!(txn.product_name, "Widget");
    assert_eq!(txn.quantity, 5);
    assert_eq!(txn.unit_price, dec!(10.00));
    assert_eq!(txn.customer_id, "C1");
    assert_eq!(txn.region, "North");
}

#[test]
fn test_parse_line_strips_thousands_separators() {
    let txn = parse_line("T1001|2024-01-01|P101|Widget|1,000|2,500.50|C1|North").unwrap();
    assert_eq!(txn.quantity, 1000);
    assert_eq!(txn.unit_price, dec!(2500.50));
}

#[test]
fn test_parse_line_normalizes_commas_in_product_name() {
    // Eight fields, comma inside the name field rather than a delimiter
    let txn = parse_line("T1|2024-01-01|P1|Nuts, assorted|2|3.00|C1|South").unwrap();
    assert_eq!(txn.product_name, "Nuts  assorted");
}

#[test]
fn test_parse_line_rejects_wrong_field_count() {
    assert!(parse_line("T1|2024-01-01|P1|Widget|5|10.00|C1").is_none());
    assert!(parse_line("T1|2024-01-01|P1|Widget|5|10.00|C1|North|extra").is_none());
    assert!(parse_line("").is_none());
}

#[test]
fn test_parse_line_rejects_unparsable_numerics() {
    assert!(parse_line("T1|2024-01-01|P1|Widget|five|10.00|C1|North").is_none());
    assert!(parse_line("T1|2024-01-01|P1|Widget|5|ten|C1|North").is_none());
    assert!(parse_line("T1|2024-01-01|P1|Widget||10.00|C1|North").is_none());
}

#[test]
fn test_parse_line_accepts_non_positive_numerics() {
    // Business rules are the validator's concern; the parser only requires
    // that the numbers parse.
    let txn = parse_line("T2|2024-01-01|P102|Gadget|0|5.00|C2|South").unwrap();
    assert_eq!(txn.quantity, 0);

    let txn = parse_line("T3|2024-01-01|P103|Gizmo|-4|5.00|C3|East").unwrap();
    assert_eq!(txn.quantity, -4);
}

#[test]
fn test_parse_lines_preserves_order_and_counts_drops() {
    let input = lines(&[
        "T1|2024-01-01|P101|Widget|5|10.00|C1|North",
        "not a record at all",
        "T2|2024-01-02|P102|Gadget|3|7.50|C2|South",
        "T3|2024-01-03|P103|Gizmo|bad|1.00|C3|East",
    ]);

    let result = parse_lines(&input);

    assert_eq!(result.transactions.len(), 2);
    assert_eq!(result.stats.dropped, 2);
    assert_eq!(result.transactions[0].transaction_id, "T1");
    assert_eq!(result.transactions[1].transaction_id, "T2");
}

#[test]
fn test_parsed_plus_dropped_equals_input() {
    let input = lines(&[
        "T1|2024-01-01|P101|Widget|5|10.00|C1|North",
        "",
        "garbage",
        "T2|2024-01-01|P102|Gadget|0|5.00|C2|South",
        "T3|2024-01-01|P103|Gizmo|x|5.00|C3|West",
    ]);

    let result = parse_lines(&input);
    assert_eq!(
        result.transactions.len() + result.stats.dropped,
        input.len()
    );
}

#[test]
fn test_parse_lines_empty_input() {
    let result = parse_lines(&[]);
    assert!(result.transactions.is_empty());
    assert_eq!(result.stats.total_lines, 0);
    assert_eq!(result.stats.dropped, 0);
}
