//! Product performance aggregations: top sellers and low performers

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::app::models::Transaction;

/// Aggregated performance of one product, grouped by product name
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPerformance {
    /// Product name
    pub name: String,
    /// Total units sold
    pub quantity: i64,
    /// Total revenue from the product
    pub revenue: Decimal,
}

/// Top `n` products by quantity sold, descending
///
/// Grouping preserves first-encounter order, and the sort is stable, so
/// ties resolve to whichever product appeared first in the input.
pub fn top_selling_products(transactions: &[Transaction], n: usize) -> Vec<ProductPerformance> {
    let mut products = group_by_product(transactions);
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(n);
    products
}

/// Products with fewer than `threshold` units sold, ascending by quantity
pub fn low_performing_products(
    transactions: &[Transaction],
    threshold: i64,
) -> Vec<ProductPerformance> {
    let mut products = group_by_product(transactions);
    products.retain(|p| p.quantity < threshold);
    products.sort_by(|a, b| a.quantity.cmp(&b.quantity));
    products
}

/// Group transactions by product name in first-encounter order
pub fn group_by_product(transactions: &[Transaction]) -> Vec<ProductPerformance> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut products: Vec<ProductPerformance> = Vec::new();

    for transaction in transactions {
        match index.get(transaction.product_name.as_str()) {
            Some(&i) => {
                products[i].quantity += transaction.quantity;
                products[i].revenue += transaction.amount();
            }
            None => {
                index.insert(&transaction.product_name, products.len());
                products.push(ProductPerformance {
                    name: transaction.product_name.clone(),
                    quantity: transaction.quantity,
                    revenue: transaction.amount(),
                });
            }
        }
    }

    products
}
