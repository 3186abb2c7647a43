//! Process command: the full sales analytics pipeline
//!
//! Orchestrates reading, parsing, validation, filtering, analytics,
//! catalog enrichment and output generation, then prints a colored
//! run summary.

use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::app::adapters::filesystem;
use crate::app::services::analytics;
use crate::app::services::product_catalog::{
    build_product_mapping, enrich_transactions, CatalogClient,
};
use crate::app::services::report;
use crate::app::services::sales_parser;
use crate::app::services::validator::{self, filter, FilterOptions};
use crate::cli::args::ProcessArgs;
use crate::cli::commands::shared::{setup_logging, PipelineStats};
use crate::cli::input;
use crate::config::Config;
use crate::Result;

/// Run the sales analytics pipeline end to end
pub async fn run_process(args: ProcessArgs) -> Result<PipelineStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    args.validate()?;

    let config = build_config(&args);
    debug!("Pipeline configuration: {:?}", config);

    info!("Starting sales analytics pipeline");

    // Stage 1: read and parse
    let lines = filesystem::read_sales_lines(&config.paths.input_file);
    let parse_result = sales_parser::parse_lines(&lines);
    info!(
        "Parsed {} of {} lines ({} dropped)",
        parse_result.stats.parsed, parse_result.stats.total_lines, parse_result.stats.dropped
    );

    // Stage 2: validate, then filter
    let mut outcome =
        validator::validate_transactions(parse_result.transactions, &FilterOptions::default());

    let filters = if args.interactive {
        input::prompt_filter_options(&outcome.summary)?
    } else {
        FilterOptions {
            region: args.region.clone(),
            min_amount: args.min_amount,
            max_amount: args.max_amount,
        }
    };

    if !filters.is_empty() {
        outcome.accepted = filter::apply_filters(outcome.accepted, &filters);
        outcome.summary.final_count = outcome.accepted.len();
        info!("Filters applied: {} records remain", outcome.accepted.len());
    }
    let accepted = outcome.accepted;

    // Stage 3: analytics
    log_analytics(&accepted, &config);

    // Stage 4: catalog fetch and enrichment
    let products = if config.catalog.enabled {
        let client = CatalogClient::new(&config.catalog)?;
        client.fetch_all_products().await
    } else {
        info!("Catalog fetch skipped, records will be written unenriched");
        Vec::new()
    };

    let mapping = build_product_mapping(products);
    let (enriched, enrichment_stats) = enrich_transactions(&accepted, &mapping);
    info!(
        "Enriched {} of {} records ({:.2}%)",
        enrichment_stats.matched,
        enrichment_stats.total,
        enrichment_stats.success_rate()
    );

    // Stage 5: outputs
    filesystem::write_enriched_file(&config.paths.enriched_file, &enriched)?;

    let rendered = report::render_report(&accepted, &enriched);
    report::write_report(&config.paths.report_file, &rendered)?;

    let stats = PipelineStats {
        lines_read: lines.len(),
        records_parsed: parse_result.stats.parsed,
        lines_dropped: parse_result.stats.dropped,
        records_invalid: outcome.rejected_count,
        records_accepted: accepted.len(),
        records_enriched: enrichment_stats.matched,
        processing_time: start_time.elapsed(),
    };

    if !args.quiet {
        print_summary(&config, &stats);
    }

    Ok(stats)
}

/// Build the pipeline configuration from command-line arguments
fn build_config(args: &ProcessArgs) -> Config {
    let mut config = Config::new(args.input_file.clone(), args.report_file.clone())
        .with_enriched_file(args.enriched_file.clone())
        .with_endpoint(args.endpoint.clone())
        .with_top_products(args.top_n)
        .with_top_customers(args.top_customers)
        .with_low_performer_threshold(args.low_threshold);

    if args.skip_fetch {
        config = config.without_catalog_fetch();
    }

    config
}

/// Log the analytics aggregates for the accepted records
fn log_analytics(accepted: &[crate::Transaction], config: &Config) {
    let total = analytics::total_revenue(accepted);
    info!("Total revenue: {}", report::format::money(total));

    for region in analytics::region_wise_sales(accepted) {
        info!(
            "Region {}: {} across {} transactions ({:.2}%)",
            region.region,
            report::format::money(region.total_sales),
            region.transaction_count,
            region.percentage
        );
    }

    for product in analytics::top_selling_products(accepted, config.analytics.top_products) {
        debug!(
            "Top product {}: {} units, {}",
            product.name,
            product.quantity,
            report::format::money(product.revenue)
        );
    }

    for customer in analytics::customer_analysis(accepted)
        .iter()
        .take(config.analytics.top_customers)
    {
        debug!(
            "Top customer {}: {} across {} orders (avg {})",
            customer.customer_id,
            report::format::money(customer.total_spent),
            customer.purchase_count,
            report::format::money(customer.avg_order_value)
        );
    }

    let low = analytics::low_performing_products(accepted, config.analytics.low_performer_threshold);
    if !low.is_empty() {
        warn!("{} products below the low-performer threshold", low.len());
    }

    let trend = analytics::daily_sales_trend(accepted);
    if let Some(peak) = analytics::peak_sales_day(&trend) {
        info!(
            "Peak sales day: {} ({})",
            peak.date,
            report::format::money(peak.revenue)
        );
    }
}

/// Print the colored end-of-run summary
fn print_summary(config: &Config, stats: &PipelineStats) {
    println!("\n{}", "Sales Analytics Pipeline Complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("  Lines read:        {}", stats.lines_read);
    println!(
        "  Records parsed:    {} ({} dropped)",
        stats.records_parsed, stats.lines_dropped
    );
    println!(
        "  Records accepted:  {} ({} invalid)",
        stats.records_accepted, stats.records_invalid
    );
    println!(
        "  Records enriched:  {} ({:.2}%)",
        stats.records_enriched,
        stats.enrichment_rate()
    );
    println!(
        "  Processing time:   {:.2}s",
        stats.processing_time.as_secs_f64()
    );
    println!();
    println!(
        "  Report:        {}",
        config.paths.report_file.display().to_string().cyan()
    );
    println!(
        "  Enriched data: {}",
        config.paths.enriched_file.display().to_string().cyan()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_config_applies_overrides() {
        let mut args = ProcessArgs::default();
        args.endpoint = "http://localhost:9999/products".to_string();
        args.top_n = 3;
        args.top_customers = 2;
        args.low_threshold = 25;
        args.skip_fetch = true;
        args.min_amount = Some(dec!(10));

        let config = build_config(&args);

        assert_eq!(config.catalog.endpoint, "http://localhost:9999/products");
        assert_eq!(config.analytics.top_products, 3);
        assert_eq!(config.analytics.top_customers, 2);
        assert_eq!(config.analytics.low_performer_threshold, 25);
        assert!(!config.catalog.enabled);
    }

    #[test]
    fn test_build_config_defaults_keep_catalog_enabled() {
        let config = build_config(&ProcessArgs::default());
        assert!(config.catalog.enabled);
    }
}
