//! Report service test suite


use crate::app::models::Transaction;
use rust_decimal::Decimal;

/// Build a transaction with the fields the report sections depend on
pub fn transaction(
    date: &str,
    product: &str,
    quantity: i64,
    price: Decimal,
    customer: &str,
    region: &str,
) -> Transaction {
    Transaction {
        transaction_id: "T1".to_string(),
        date: date.to_string(),
        product_id: "P101".to_string(),
        product_name: product.to_string(),
        quantity,
        unit_price: price,
        customer_id: customer.to_string(),
        region: region.to_string(),
    }
}
