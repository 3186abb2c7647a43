//! Tests for the full validation pass

use super::transaction;
use crate::app::services::validator::{validate_transactions, FilterOptions};
use rust_decimal_macros::dec;

#[test]
fn test_rejects_counted_and_survivors_accepted() {
    let records = vec![
        transaction("T1", 5, "10.00", "North"),
        transaction("T2", 0, "5.00", "South"), // quantity 0: rejected
        transaction("T3", 2, "3.00", "East"),
    ];

    let outcome = validate_transactions(records, &FilterOptions::default());

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.rejected_count, 1);
    assert_eq!(outcome.summary.total_input, 3);
    assert_eq!(outcome.summary.invalid_count, 1);
    assert_eq!(outcome.summary.final_count, 2);
}

#[test]
fn test_summary_regions_and_amount_range_precede_filters() {
    let records = vec![
        transaction("T1", 1, "10.00", "North"), // 10
        transaction("T2", 5, "10.00", "South"), // 50
        transaction("T3", 2, "10.00", "North"), // 20
    ];

    let filters = FilterOptions {
        region: Some("South".to_string()),
        ..Default::default()
    };

    let outcome = validate_transactions(records, &filters);

    // Summary reflects the rule-valid set, not the filtered one
    let regions: Vec<&str> = outcome.summary.regions.iter().map(String::as_str).collect();
    assert_eq!(regions, vec!["North", "South"]);
    assert_eq!(outcome.summary.amount_range, Some((dec!(10), dec!(50))));

    // Acceptance reflects the filters
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.summary.final_count, 1);
}

#[test]
fn test_every_accepted_record_satisfies_all_rules() {
    let mut bad_prefix = transaction("T9", 5, "10.00", "West");
    bad_prefix.customer_id = "9".to_string();

    let records = vec![
        transaction("T1", 5, "10.00", "North"),
        bad_prefix,
        transaction("T2", -1, "10.00", "North"),
        transaction("T3", 1, "-2.00", "North"),
        transaction("T4", 1, "2.00", ""),
    ];

    let outcome = validate_transactions(records, &FilterOptions::default());
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.rejected_count, 4);
    assert!(outcome
        .accepted
        .iter()
        .all(crate::app::services::validator::passes_business_rules));
}

#[test]
fn test_empty_input() {
    let outcome = validate_transactions(Vec::new(), &FilterOptions::default());
    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.rejected_count, 0);
    assert!(outcome.summary.regions.is_empty());
    assert_eq!(outcome.summary.amount_range, None);
}
