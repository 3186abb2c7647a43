//! Optional region and amount filters applied after rule validation

use rust_decimal::Decimal;
use tracing::debug;

use crate::app::models::Transaction;

/// Optional filter parameters narrowing the validated record set
///
/// Filters are passed explicitly rather than through shared state; an
/// unset field is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Keep only records from this region (exact match)
    pub region: Option<String>,
    /// Keep only records with `amount >= min_amount`
    pub min_amount: Option<Decimal>,
    /// Keep only records with `amount <= max_amount`
    pub max_amount: Option<Decimal>,
}

impl FilterOptions {
    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.min_amount.is_none() && self.max_amount.is_none()
    }
}

/// Apply the active filters in order, each strictly narrowing the set
pub fn apply_filters(
    mut transactions: Vec<Transaction>,
    filters: &FilterOptions,
) -> Vec<Transaction> {
    if filters.is_empty() {
        return transactions;
    }

    if let Some(region) = &filters.region {
        transactions.retain(|t| &t.region == region);
        debug!(
            "Region filter '{}': {} records remain",
            region,
            transactions.len()
        );
    }

    if let Some(min_amount) = filters.min_amount {
        transactions.retain(|t| t.amount() >= min_amount);
        debug!(
            "Minimum amount filter {}: {} records remain",
            min_amount,
            transactions.len()
        );
    }

    if let Some(max_amount) = filters.max_amount {
        transactions.retain(|t| t.amount() <= max_amount);
        debug!(
            "Maximum amount filter {}: {} records remain",
            max_amount,
            transactions.len()
        );
    }

    transactions
}
