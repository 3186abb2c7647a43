//! Business rules for individual transaction records

use rust_decimal::Decimal;

use crate::app::models::Transaction;
use crate::constants::prefixes;

/// Check a record against every business rule
///
/// A valid record carries the reserved prefix on each of its three ids,
/// has positive quantity and unit price, and names a region.
pub fn passes_business_rules(transaction: &Transaction) -> bool {
    has_required_prefixes(transaction)
        && transaction.quantity > 0
        && transaction.unit_price > Decimal::ZERO
        && !transaction.region.is_empty()
}

/// Check that all three record ids carry their reserved prefix
pub fn has_required_prefixes(transaction: &Transaction) -> bool {
    transaction.transaction_id.starts_with(prefixes::TRANSACTION)
        && transaction.product_id.starts_with(prefixes::PRODUCT)
        && transaction.customer_id.starts_with(prefixes::CUSTOMER)
}
