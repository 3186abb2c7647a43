//! Total revenue aggregation

use rust_decimal::Decimal;

use super::round_currency;
use crate::app::models::Transaction;

/// Sum of `amount` over all records, rounded to two decimal places
///
/// Returns zero for an empty collection.
pub fn total_revenue(transactions: &[Transaction]) -> Decimal {
    let total: Decimal = transactions.iter().map(Transaction::amount).sum();
    round_currency(total)
}
