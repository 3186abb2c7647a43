//! Descriptive analytics over validated transaction collections
//!
//! A family of pure, read-only aggregation functions. Every function takes
//! the validated record slice explicitly, returns a freshly derived
//! structure, and tolerates empty input without raising. Nothing here
//! mutates a record or holds state between calls.

pub mod customers;
pub mod products;
pub mod regions;
pub mod revenue;
pub mod trend;

#[cfg(test)]
mod tests;

pub use customers::{customer_analysis, CustomerSummary};
pub use products::{low_performing_products, top_selling_products, ProductPerformance};
pub use regions::{region_wise_sales, RegionSales};
pub use revenue::total_revenue;
pub use trend::{daily_sales_trend, peak_sales_day, DailySales, PeakDay};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary value to two decimal places, half away from zero
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage of `part` in `whole`, rounded to two decimals
///
/// Defined as 0% when the whole is zero rather than dividing by zero.
pub(crate) fn percentage_of(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    let ratio = (part / whole).to_f64().unwrap_or(0.0);
    (ratio * 100.0 * 100.0).round() / 100.0
}
