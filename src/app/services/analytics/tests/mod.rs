//! Tests for the analytics aggregation family

pub mod revenue_tests;

use crate::app::models::Transaction;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Build a transaction with the fields the aggregations care about
pub fn txn(
    date: &str,
    product: &str,
    qty: i64,
    price: &str,
    customer: &str,
    region: &str,
) -> Transaction {
    Transaction {
        transaction_id: format!("T{}", customer.trim_start_matches('C')),
        date: date.to_string(),
        product_id: "P101".to_string(),
        product_name: product.to_string(),
        quantity: qty,
        unit_price: Decimal::from_str(price).expect("test price must parse"),
        customer_id: customer.to_string(),
        region: region.to_string(),
    }
}
