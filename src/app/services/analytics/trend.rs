//! Daily sales trend and peak-day lookup

use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

use crate::app::models::Transaction;

/// Sales activity for one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    /// Date string as it appears in the records
    pub date: String,
    /// Revenue for the day
    pub revenue: Decimal,
    /// Number of transactions on the day
    pub transaction_count: usize,
    /// Number of distinct customers active on the day
    pub unique_customers: usize,
}

/// The single best sales day
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDay {
    /// Date of the peak
    pub date: String,
    /// Revenue on the peak day
    pub revenue: Decimal,
    /// Number of transactions on the peak day
    pub transaction_count: usize,
}

struct DayAccumulator<'a> {
    revenue: Decimal,
    transaction_count: usize,
    customers: BTreeSet<&'a str>,
}

/// Per-day revenue, transaction counts and distinct customers
///
/// Ordered ascending by date string; the fixed-width ISO-like format makes
/// lexical order calendar order.
pub fn daily_sales_trend(transactions: &[Transaction]) -> Vec<DailySales> {
    let mut days: BTreeMap<&str, DayAccumulator> = BTreeMap::new();

    for transaction in transactions {
        let day = days.entry(&transaction.date).or_insert(DayAccumulator {
            revenue: Decimal::ZERO,
            transaction_count: 0,
            customers: BTreeSet::new(),
        });
        day.revenue += transaction.amount();
        day.transaction_count += 1;
        day.customers.insert(&transaction.customer_id);
    }

    days.into_iter()
        .map(|(date, day)| DailySales {
            date: date.to_string(),
            revenue: day.revenue,
            transaction_count: day.transaction_count,
            unique_customers: day.customers.len(),
        })
        .collect()
}

/// Date with the strictly maximum revenue, `None` when there are no records
///
/// Scans the ascending trend with a strict comparison, so the earliest date
/// wins revenue ties.
pub fn peak_sales_day(trend: &[DailySales]) -> Option<PeakDay> {
    let mut peak: Option<&DailySales> = None;

    for day in trend {
        match peak {
            Some(best) if day.revenue <= best.revenue => {}
            _ => peak = Some(day),
        }
    }

    peak.map(|day| PeakDay {
        date: day.date.clone(),
        revenue: day.revenue,
        transaction_count: day.transaction_count,
    })
}
