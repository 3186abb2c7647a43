//! Tests for transaction validation and filtering

pub mod validator_tests;

use crate::app::models::Transaction;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Build a rule-valid transaction with the given distinguishing fields
pub fn transaction(id: &str, qty: i64, price: &str, region: &str) -> Transaction {
    Transaction {
        transaction_id: id.to_string(),
        date: "2024-01-01".to_string(),
        product_id: "P101".to_string(),
        product_name: "Widget".to_string(),
        quantity: qty,
        unit_price: Decimal::from_str(price).expect("test price must parse"),
        customer_id: "C1".to_string(),
        region: region.to_string(),
    }
}
