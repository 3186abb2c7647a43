//! Region-wise sales aggregation

use rust_decimal::Decimal;
use std::collections::HashMap;

use super::percentage_of;
use crate::app::models::Transaction;

/// Sales totals for one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSales {
    /// Region name
    pub region: String,
    /// Revenue across the region's transactions
    pub total_sales: Decimal,
    /// Number of transactions in the region
    pub transaction_count: usize,
    /// Share of grand total revenue, rounded to two decimals
    pub percentage: f64,
}

/// Per-region sales totals, ordered by total sales descending
///
/// Percentages are computed against the grand total and defined as 0%
/// when there is no revenue at all.
pub fn region_wise_sales(transactions: &[Transaction]) -> Vec<RegionSales> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut regions: Vec<RegionSales> = Vec::new();

    for transaction in transactions {
        match index.get(transaction.region.as_str()) {
            Some(&i) => {
                regions[i].total_sales += transaction.amount();
                regions[i].transaction_count += 1;
            }
            None => {
                index.insert(&transaction.region, regions.len());
                regions.push(RegionSales {
                    region: transaction.region.clone(),
                    total_sales: transaction.amount(),
                    transaction_count: 1,
                    percentage: 0.0,
                });
            }
        }
    }

    let grand_total: Decimal = regions.iter().map(|r| r.total_sales).sum();
    for region in &mut regions {
        region.percentage = percentage_of(region.total_sales, grand_total);
    }

    regions.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    regions
}
