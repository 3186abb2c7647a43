//! Command-line argument definitions for the sales analytics pipeline
//!
//! Defines the complete CLI interface using the clap derive API.

use crate::constants::{
    DEFAULT_CATALOG_ENDPOINT, DEFAULT_ENRICHED_FILE, DEFAULT_INPUT_FILE,
    DEFAULT_LOW_PERFORMER_THRESHOLD, DEFAULT_REPORT_FILE, DEFAULT_TOP_CUSTOMERS,
    DEFAULT_TOP_PRODUCTS,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// CLI arguments for the sales analytics pipeline
///
/// Parses pipe-delimited sales transaction files, validates and filters the
/// records, computes analytics, enriches products against a catalog API and
/// writes a text report plus an enriched data file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales-analytics",
    version,
    about = "Batch analytics pipeline for pipe-delimited sales transaction data",
    long_about = "Processes pipe-delimited sales transaction files end to end: parsing, \
                  business-rule validation, optional region and amount filtering, \
                  analytics aggregation, product enrichment via a catalog API, and \
                  generation of a fixed-layout text report alongside an enriched \
                  pipe-delimited data file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the pipeline
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full sales analytics pipeline (default command)
    Process(ProcessArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input path to the pipe-delimited sales data file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        default_value = DEFAULT_INPUT_FILE,
        help = "Path to the pipe-delimited sales data file"
    )]
    pub input_file: PathBuf,

    /// Output path for the generated text report
    #[arg(
        short = 'r',
        long = "report",
        value_name = "FILE",
        default_value = DEFAULT_REPORT_FILE,
        help = "Output path for the text report"
    )]
    pub report_file: PathBuf,

    /// Output path for the enriched pipe-delimited data file
    #[arg(
        short = 'e',
        long = "enriched",
        value_name = "FILE",
        default_value = DEFAULT_ENRICHED_FILE,
        help = "Output path for the enriched data file"
    )]
    pub enriched_file: PathBuf,

    /// Keep only transactions from this region
    ///
    /// Matched exactly against the region field of each valid transaction.
    #[arg(
        long = "region",
        value_name = "REGION",
        help = "Keep only transactions from this region"
    )]
    pub region: Option<String>,

    /// Keep only transactions with amount greater than or equal to this value
    #[arg(
        long = "min-amount",
        value_name = "AMOUNT",
        help = "Minimum transaction amount (quantity x unit price)"
    )]
    pub min_amount: Option<Decimal>,

    /// Keep only transactions with amount less than or equal to this value
    #[arg(
        long = "max-amount",
        value_name = "AMOUNT",
        help = "Maximum transaction amount (quantity x unit price)"
    )]
    pub max_amount: Option<Decimal>,

    /// Prompt for filter criteria interactively
    ///
    /// Shows the observed regions and amount range after validation, then
    /// prompts for region, minimum and maximum amount. Command-line filter
    /// flags are ignored when this is set.
    #[arg(
        long = "interactive",
        help = "Prompt for filter criteria interactively",
        conflicts_with_all = ["region", "min_amount", "max_amount"]
    )]
    pub interactive: bool,

    /// Skip the product catalog fetch
    ///
    /// All records are written unenriched. Useful for offline runs and
    /// deterministic testing.
    #[arg(long = "skip-fetch", help = "Skip the product catalog API fetch")]
    pub skip_fetch: bool,

    /// Product catalog API endpoint
    #[arg(
        long = "endpoint",
        value_name = "URL",
        default_value = DEFAULT_CATALOG_ENDPOINT,
        help = "Product catalog API endpoint"
    )]
    pub endpoint: String,

    /// Number of products to list in top-seller rankings
    #[arg(
        long = "top-n",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_PRODUCTS,
        help = "Number of products in top-seller rankings"
    )]
    pub top_n: usize,

    /// Number of customers to list in top-spender rankings
    #[arg(
        long = "top-customers",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_CUSTOMERS,
        help = "Number of customers in top-spender rankings"
    )]
    pub top_customers: usize,

    /// Quantity threshold below which a product counts as low performing
    #[arg(
        long = "low-threshold",
        value_name = "QTY",
        default_value_t = DEFAULT_LOW_PERFORMER_THRESHOLD,
        help = "Quantity threshold for low-performing products"
    )]
    pub low_threshold: i64,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command, defaulting to `process` with default arguments
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Process(ProcessArgs::default()))
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_amount, self.max_amount) {
            if min > max {
                return Err(Error::configuration(format!(
                    "--min-amount ({}) cannot exceed --max-amount ({})",
                    min, max
                )));
            }
        }

        if let Some(min) = self.min_amount {
            if min.is_sign_negative() {
                return Err(Error::configuration(
                    "--min-amount must be non-negative".to_string(),
                ));
            }
        }

        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err(Error::configuration(
                    "--region cannot be blank".to_string(),
                ));
            }
        }

        if self.top_n == 0 {
            return Err(Error::configuration(
                "--top-n must be greater than 0".to_string(),
            ));
        }

        if self.top_customers == 0 {
            return Err(Error::configuration(
                "--top-customers must be greater than 0".to_string(),
            ));
        }

        if self.endpoint.trim().is_empty() {
            return Err(Error::configuration(
                "--endpoint cannot be blank".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            enriched_file: PathBuf::from(DEFAULT_ENRICHED_FILE),
            region: None,
            min_amount: None,
            max_amount: None,
            interactive: false,
            skip_fetch: false,
            endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            top_n: DEFAULT_TOP_PRODUCTS,
            top_customers: DEFAULT_TOP_CUSTOMERS,
            low_threshold: DEFAULT_LOW_PERFORMER_THRESHOLD,
            verbose: 0,
            quiet: false,
        }
    }
}
