//! Tests for total revenue

use super::txn;
use crate::app::services::analytics::total_revenue;
use rust_decimal_macros::dec;

#[test]
fn test_total_revenue_sums_amounts() {
    let records = vec![
        txn("2024-01-01", "Widget", 5, "10.00", "C1", "North"),
        txn("2024-01-02", "Gadget", 3, "7.50", "C2", "South"),
    ];

    assert_eq!(total_revenue(&records), dec!(72.50));
}

#[test]
fn test_total_revenue_rounds_to_two_decimals() {
    let records = vec![txn("2024-01-01", "Widget", 3, "0.333", "C1", "North")];
    assert_eq!(total_revenue(&records), dec!(1.00));
}

#[test]
fn test_total_revenue_empty_is_zero() {
    assert_eq!(total_revenue(&[]), dec!(0));
}

#[test]
fn test_total_revenue_is_idempotent() {
    let records = vec![
        txn("2024-01-01", "Widget", 5, "10.00", "C1", "North"),
        txn("2024-01-02", "Gadget", 3, "7.50", "C2", "South"),
    ];

    assert_eq!(total_revenue(&records), total_revenue(&records));
}
