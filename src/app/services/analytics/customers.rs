//! Per-customer purchasing analysis

use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

use super::round_currency;
use crate::app::models::Transaction;

/// Purchasing profile of one customer
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    /// Customer identifier
    pub customer_id: String,
    /// Total amount spent across all purchases
    pub total_spent: Decimal,
    /// Number of purchases
    pub purchase_count: usize,
    /// Average order value, rounded to two decimals
    pub avg_order_value: Decimal,
    /// Distinct products purchased, order-insensitive
    pub products: BTreeSet<String>,
}

/// Per-customer totals, ordered by total spent descending
pub fn customer_analysis(transactions: &[Transaction]) -> Vec<CustomerSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut customers: Vec<CustomerSummary> = Vec::new();

    for transaction in transactions {
        match index.get(transaction.customer_id.as_str()) {
            Some(&i) => {
                customers[i].total_spent += transaction.amount();
                customers[i].purchase_count += 1;
                customers[i].products.insert(transaction.product_name.clone());
            }
            None => {
                index.insert(&transaction.customer_id, customers.len());
                customers.push(CustomerSummary {
                    customer_id: transaction.customer_id.clone(),
                    total_spent: transaction.amount(),
                    purchase_count: 1,
                    avg_order_value: Decimal::ZERO,
                    products: BTreeSet::from([transaction.product_name.clone()]),
                });
            }
        }
    }

    for customer in &mut customers {
        customer.avg_order_value =
            round_currency(customer.total_spent / Decimal::from(customer.purchase_count as u64));
    }

    customers.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    customers
}
