//! Report rendering: section-by-section text layout
//!
//! Statistics are recomputed here from the raw record collections. The
//! duplication with the analytics service is deliberate: the report can
//! evolve its presentation without touching the pure aggregation layer,
//! and the aggregation layer stays free of layout concerns.

use chrono::Local;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;

use super::format::{money, money_whole};
use crate::app::models::{EnrichedTransaction, Transaction};
use crate::constants::{DEFAULT_LOW_PERFORMER_THRESHOLD, REPORT_TIMESTAMP_FORMAT};

const HEAVY_RULE: &str =
    "==================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------";

/// Render the complete fixed-layout sales report
///
/// Tolerates empty collections: averages are zero, the date range and the
/// best day render as "N/A", and the enrichment success rate is 0%.
pub fn render_report(
    transactions: &[Transaction],
    enriched: &[EnrichedTransaction],
) -> String {
    let mut report = String::new();

    render_header(&mut report, transactions.len());
    render_overall_summary(&mut report, transactions);

    let region_rows = region_rows(transactions);
    render_region_section(&mut report, &region_rows);

    let product_rows = product_rows(transactions);
    render_top_products(&mut report, &product_rows);
    render_top_customers(&mut report, transactions);

    let daily_rows = daily_rows(transactions);
    render_daily_trend(&mut report, &daily_rows);
    render_product_performance(&mut report, &daily_rows, &product_rows, &region_rows);
    render_enrichment_summary(&mut report, enriched);

    report
}

fn render_header(report: &mut String, record_count: usize) {
    let now = Local::now().format(REPORT_TIMESTAMP_FORMAT);
    let _ = writeln!(report, "{}", HEAVY_RULE);
    let _ = writeln!(report, "        SALES ANALYTICS REPORT");
    let _ = writeln!(report, "      Generated: {}", now);
    let _ = writeln!(report, "      Records Processed: {}", record_count);
    let _ = writeln!(report, "{}\n", HEAVY_RULE);
}

fn render_overall_summary(report: &mut String, transactions: &[Transaction]) {
    let total_revenue: Decimal = transactions.iter().map(Transaction::amount).sum();
    let avg_order_value = if transactions.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(transactions.len() as u64)
    };

    let date_range = match (
        transactions.iter().map(|t| t.date.as_str()).min(),
        transactions.iter().map(|t| t.date.as_str()).max(),
    ) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        _ => "N/A".to_string(),
    };

    let _ = writeln!(report, "OVERALL SUMMARY");
    let _ = writeln!(report, "{}", LIGHT_RULE);
    let _ = writeln!(report, "Total Revenue:        {}", money(total_revenue));
    let _ = writeln!(report, "Total Transactions:   {}", transactions.len());
    let _ = writeln!(report, "Average Order Value:  {}", money(avg_order_value));
    let _ = writeln!(report, "Date Range:           {}\n", date_range);
}

struct RegionRow {
    region: String,
    sales: Decimal,
    percentage: f64,
    count: usize,
}

fn region_rows(transactions: &[Transaction]) -> Vec<RegionRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<RegionRow> = Vec::new();

    for transaction in transactions {
        match index.get(transaction.region.as_str()) {
            Some(&i) => {
                rows[i].sales += transaction.amount();
                rows[i].count += 1;
            }
            None => {
                index.insert(&transaction.region, rows.len());
                rows.push(RegionRow {
                    region: transaction.region.clone(),
                    sales: transaction.amount(),
                    percentage: 0.0,
                    count: 1,
                });
            }
        }
    }

    let grand_total: Decimal = rows.iter().map(|r| r.sales).sum();
    if !grand_total.is_zero() {
        for row in &mut rows {
            row.percentage = decimal_ratio(row.sales, grand_total) * 100.0;
        }
    }

    rows.sort_by(|a, b| b.sales.cmp(&a.sales));
    rows
}

fn render_region_section(report: &mut String, rows: &[RegionRow]) {
    let _ = writeln!(report, "REGION-WISE PERFORMANCE");
    let _ = writeln!(report, "{}", LIGHT_RULE);
    let _ = writeln!(
        report,
        "{:<10}{:<15}{:<12}{}",
        "Region", "Sales", "% of Total", "Transactions"
    );
    for row in rows {
        let _ = writeln!(
            report,
            "{:<10}{:<15}{:>6.2}%     {}",
            row.region,
            money_whole(row.sales),
            row.percentage,
            row.count
        );
    }
    report.push('\n');
}

struct ProductRow {
    name: String,
    quantity: i64,
    revenue: Decimal,
}

fn product_rows(transactions: &[Transaction]) -> Vec<ProductRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<ProductRow> = Vec::new();

    for transaction in transactions {
        match index.get(transaction.product_name.as_str()) {
            Some(&i) => {
                rows[i].quantity += transaction.quantity;
                rows[i].revenue += transaction.amount();
            }
            None => {
                index.insert(&transaction.product_name, rows.len());
                rows.push(ProductRow {
                    name: transaction.product_name.clone(),
                    quantity: transaction.quantity,
                    revenue: transaction.amount(),
                });
            }
        }
    }

    rows
}

fn render_top_products(report: &mut String, rows: &[ProductRow]) {
    let mut top: Vec<&ProductRow> = rows.iter().collect();
    top.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    top.truncate(5);

    let _ = writeln!(report, "TOP 5 PRODUCTS");
    let _ = writeln!(report, "{}", LIGHT_RULE);
    let _ = writeln!(report, "Rank  Product        Quantity  Revenue");
    for (rank, row) in top.iter().enumerate() {
        let _ = writeln!(
            report,
            "{:<5} {:<14}{:<10}{}",
            rank + 1,
            row.name,
            row.quantity,
            money(row.revenue)
        );
    }
    report.push('\n');
}

fn render_top_customers(report: &mut String, transactions: &[Transaction]) {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<(String, Decimal, usize)> = Vec::new();

    for transaction in transactions {
        match index.get(transaction.customer_id.as_str()) {
            Some(&i) => {
                rows[i].1 += transaction.amount();
                rows[i].2 += 1;
            }
            None => {
                index.insert(&transaction.customer_id, rows.len());
                rows.push((transaction.customer_id.clone(), transaction.amount(), 1));
            }
        }
    }

    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(5);

    let _ = writeln!(report, "TOP 5 CUSTOMERS");
    let _ = writeln!(report, "{}", LIGHT_RULE);
    let _ = writeln!(report, "Rank  CustomerID   Total Spent   Orders");
    for (rank, (customer, spent, orders)) in rows.iter().enumerate() {
        let _ = writeln!(
            report,
            "{:<5} {:<12}{:<13} {}",
            rank + 1,
            customer,
            money(*spent),
            orders
        );
    }
    report.push('\n');
}

struct DailyRow {
    date: String,
    revenue: Decimal,
    count: usize,
    unique_customers: usize,
}

fn daily_rows(transactions: &[Transaction]) -> Vec<DailyRow> {
    let mut days: BTreeMap<&str, (Decimal, usize, BTreeSet<&str>)> = BTreeMap::new();

    for transaction in transactions {
        let entry = days
            .entry(&transaction.date)
            .or_insert((Decimal::ZERO, 0, BTreeSet::new()));
        entry.0 += transaction.amount();
        entry.1 += 1;
        entry.2.insert(&transaction.customer_id);
    }

    days.into_iter()
        .map(|(date, (revenue, count, customers))| DailyRow {
            date: date.to_string(),
            revenue,
            count,
            unique_customers: customers.len(),
        })
        .collect()
}

fn render_daily_trend(report: &mut String, rows: &[DailyRow]) {
    let _ = writeln!(report, "DAILY SALES TREND");
    let _ = writeln!(report, "{}", LIGHT_RULE);
    let _ = writeln!(
        report,
        "Date        Revenue       Transactions  Unique Customers"
    );
    for row in rows {
        let _ = writeln!(
            report,
            "{}  {:<13} {:<13} {}",
            row.date,
            money(row.revenue),
            row.count,
            row.unique_customers
        );
    }
    report.push('\n');
}

fn render_product_performance(
    report: &mut String,
    daily: &[DailyRow],
    products: &[ProductRow],
    regions: &[RegionRow],
) {
    let _ = writeln!(report, "PRODUCT PERFORMANCE ANALYSIS");
    let _ = writeln!(report, "{}", LIGHT_RULE);

    // First date wins revenue ties, scanning ascending with strict >
    let mut best: Option<&DailyRow> = None;
    for row in daily {
        if best.map_or(true, |b| row.revenue > b.revenue) {
            best = Some(row);
        }
    }
    match best {
        Some(day) => {
            let _ = writeln!(
                report,
                "Best Selling Day: {} ({})",
                day.date,
                money(day.revenue)
            );
        }
        None => {
            let _ = writeln!(report, "Best Selling Day: N/A");
        }
    }

    let mut low: Vec<&ProductRow> = products
        .iter()
        .filter(|p| p.quantity < DEFAULT_LOW_PERFORMER_THRESHOLD)
        .collect();
    low.sort_by(|a, b| a.quantity.cmp(&b.quantity));

    if low.is_empty() {
        let _ = writeln!(report, "Low Performing Products: None");
    } else {
        let _ = writeln!(report, "Low Performing Products:");
        for product in low {
            let _ = writeln!(
                report,
                "- {} (Qty: {}, Revenue: {})",
                product.name,
                product.quantity,
                money(product.revenue)
            );
        }
    }

    let _ = writeln!(report, "\nAverage Transaction Value per Region:");
    for region in regions {
        let avg = region.sales / Decimal::from(region.count as u64);
        let _ = writeln!(report, "- {}: {}", region.region, money(avg));
    }
    report.push('\n');
}

fn render_enrichment_summary(report: &mut String, enriched: &[EnrichedTransaction]) {
    let enriched_count = enriched.iter().filter(|e| e.api_match).count();
    let success_rate = if enriched.is_empty() {
        0.0
    } else {
        (enriched_count as f64 / enriched.len() as f64) * 100.0
    };

    let unmatched: BTreeSet<&str> = enriched
        .iter()
        .filter(|e| !e.api_match)
        .map(|e| e.transaction.product_id.as_str())
        .collect();

    let _ = writeln!(report, "API ENRICHMENT SUMMARY");
    let _ = writeln!(report, "{}", LIGHT_RULE);
    let _ = writeln!(report, "Total Products Enriched: {}", enriched_count);
    let _ = writeln!(report, "Success Rate: {:.2}%", success_rate);

    if unmatched.is_empty() {
        let _ = writeln!(report, "Products Not Enriched: None");
    } else {
        let ids: Vec<&str> = unmatched.into_iter().collect();
        let _ = writeln!(report, "Products Not Enriched: {}", ids.join(", "));
    }
}

fn decimal_ratio(part: Decimal, whole: Decimal) -> f64 {
    use rust_decimal::prelude::ToPrimitive;
    (part / whole).to_f64().unwrap_or(0.0)
}
