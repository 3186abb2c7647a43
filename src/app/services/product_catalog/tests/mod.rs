//! Tests for product catalog integration

pub mod mapping_tests;

use crate::app::models::Transaction;
use crate::app::services::product_catalog::client::ApiProduct;
use rust_decimal_macros::dec;

/// Build a transaction referencing the given product id string
pub fn txn_with_product(product_id: &str) -> Transaction {
    Transaction {
        transaction_id: "T1".to_string(),
        date: "2024-01-01".to_string(),
        product_id: product_id.to_string(),
        product_name: "Widget".to_string(),
        quantity: 5,
        unit_price: dec!(10.00),
        customer_id: "C1".to_string(),
        region: "North".to_string(),
    }
}

/// Build a full catalog entry with the given id
pub fn api_product(id: u64) -> ApiProduct {
    ApiProduct {
        id: Some(id),
        title: Some("iPhone 9".to_string()),
        category: Some("smartphones".to_string()),
        brand: Some("Apple".to_string()),
        rating: Some(4.69),
    }
}
