//! Configuration management for the sales analytics pipeline.
//!
//! Groups file paths, product catalog settings, and analytics parameters
//! into a single structure with builder-style customization.

use crate::constants::{
    CATALOG_TIMEOUT_SECS, DEFAULT_CATALOG_ENDPOINT, DEFAULT_ENRICHED_FILE, DEFAULT_INPUT_FILE,
    DEFAULT_LOW_PERFORMER_THRESHOLD, DEFAULT_REPORT_FILE, DEFAULT_TOP_CUSTOMERS,
    DEFAULT_TOP_PRODUCTS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File locations for pipeline input and outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Pipe-delimited sales data input file
    pub input_file: PathBuf,

    /// Enriched data output file
    pub enriched_file: PathBuf,

    /// Formatted text report output file
    pub report_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            enriched_file: PathBuf::from(DEFAULT_ENRICHED_FILE),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

/// Product catalog fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products endpoint queried with a single GET
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// When false the fetch is skipped and enrichment runs with zero matches
    pub enabled: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            timeout_secs: CATALOG_TIMEOUT_SECS,
            enabled: true,
        }
    }
}

/// Analytics parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of top-selling products to compute
    pub top_products: usize,

    /// Number of top customers to compute
    pub top_customers: usize,

    /// Quantity threshold below which a product counts as low-performing
    pub low_performer_threshold: i64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_products: DEFAULT_TOP_PRODUCTS,
            top_customers: DEFAULT_TOP_CUSTOMERS,
            low_performer_threshold: DEFAULT_LOW_PERFORMER_THRESHOLD,
        }
    }
}

/// Global configuration for the sales analytics pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File locations
    pub paths: PathsConfig,

    /// Product catalog settings
    pub catalog: CatalogConfig,

    /// Analytics parameters
    pub analytics: AnalyticsConfig,
}

impl Config {
    /// Create a configuration with explicit input and report paths
    pub fn new(input_file: PathBuf, report_file: PathBuf) -> Self {
        Self {
            paths: PathsConfig {
                input_file,
                report_file,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Set the enriched data output file
    pub fn with_enriched_file(mut self, enriched_file: PathBuf) -> Self {
        self.paths.enriched_file = enriched_file;
        self
    }

    /// Set the product catalog endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.catalog.endpoint = endpoint.into();
        self
    }

    /// Disable the product catalog fetch
    pub fn without_catalog_fetch(mut self) -> Self {
        self.catalog.enabled = false;
        self
    }

    /// Set the number of top-selling products to compute
    pub fn with_top_products(mut self, top_products: usize) -> Self {
        self.analytics.top_products = top_products;
        self
    }

    /// Set the number of top customers to compute
    pub fn with_top_customers(mut self, top_customers: usize) -> Self {
        self.analytics.top_customers = top_customers;
        self
    }

    /// Set the low-performer quantity threshold
    pub fn with_low_performer_threshold(mut self, threshold: i64) -> Self {
        self.analytics.low_performer_threshold = threshold;
        self
    }
}
