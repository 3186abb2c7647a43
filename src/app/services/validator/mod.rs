//! Business-rule validation and filtering for parsed transactions
//!
//! Re-checks typed records against the id-prefix and positivity rules,
//! computes an observability summary (distinct regions, amount range), and
//! applies optional region/amount filters. Rejections are counted and
//! exposed as data, never merely printed.

pub mod filter;
pub mod rules;

#[cfg(test)]
mod tests;

pub use filter::FilterOptions;
pub use rules::passes_business_rules;

use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::app::models::Transaction;

/// Summary of a validation pass, exposed to the caller for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    /// Records offered to the validator
    pub total_input: usize,
    /// Records rejected by the business rules
    pub invalid_count: usize,
    /// Records surviving validation and all filters
    pub final_count: usize,
    /// Distinct regions among rule-valid records, before filtering
    pub regions: BTreeSet<String>,
    /// Observed `[min, max]` amount among rule-valid records, before filtering
    pub amount_range: Option<(Decimal, Decimal)>,
}

/// Result of validating and filtering a batch of transactions
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Records that satisfy every business rule and every active filter
    pub accepted: Vec<Transaction>,
    /// Number of records rejected by the business rules
    pub rejected_count: usize,
    /// Pass summary for observability
    pub summary: ValidationSummary,
}

/// Validate transactions and apply optional filters
///
/// The pass runs in three stages:
/// 1. Drop records violating the business rules, counting each rejection.
/// 2. Compute distinct regions and the observed amount range over the
///    survivors.
/// 3. Apply the region filter, then the minimum amount filter, then the
///    maximum amount filter; each omitted filter is a no-op.
pub fn validate_transactions(
    transactions: Vec<Transaction>,
    filters: &FilterOptions,
) -> ValidationOutcome {
    let total_input = transactions.len();

    let mut valid = Vec::with_capacity(transactions.len());
    let mut rejected_count = 0;

    for transaction in transactions {
        if passes_business_rules(&transaction) {
            valid.push(transaction);
        } else {
            debug!("Rejected invalid record: {}", transaction.transaction_id);
            rejected_count += 1;
        }
    }

    let regions: BTreeSet<String> = valid.iter().map(|t| t.region.clone()).collect();
    let amount_range = observed_amount_range(&valid);

    let accepted = filter::apply_filters(valid, filters);

    info!(
        "Validation complete: {} -> {} records ({} invalid)",
        total_input,
        accepted.len(),
        rejected_count
    );

    let summary = ValidationSummary {
        total_input,
        invalid_count: rejected_count,
        final_count: accepted.len(),
        regions,
        amount_range,
    };

    ValidationOutcome {
        accepted,
        rejected_count,
        summary,
    }
}

/// Observed `[min, max]` amount over a record collection, `None` when empty
pub fn observed_amount_range(transactions: &[Transaction]) -> Option<(Decimal, Decimal)> {
    let mut amounts = transactions.iter().map(Transaction::amount);
    let first = amounts.next()?;
    let (min, max) = amounts.fold((first, first), |(min, max), amount| {
        (min.min(amount), max.max(amount))
    });
    Some((min, max))
}
