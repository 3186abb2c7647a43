//! Sales Analytics Library
//!
//! A Rust library for ingesting pipe-delimited sales transaction data,
//! validating it against business rules, computing descriptive analytics,
//! and enriching records with external product catalog metadata.
//!
//! This library provides tools for:
//! - Parsing raw transaction lines with per-line drop-and-count semantics
//! - Validating records against prefix and positivity rules with optional filters
//! - Pure aggregation functions over validated record collections
//! - Enriching records by numeric product id lookup against a remote catalog
//! - Rendering a fixed-layout text report and an enriched data file
//! - Comprehensive error handling and graceful degradation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod product_catalog;
        pub mod report;
        pub mod sales_parser;
        pub mod validator;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{EnrichedTransaction, ProductInfo, Transaction};
pub use config::Config;

/// Result type alias for the sales analytics pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sales analytics operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be located
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Product catalog fetch error
    #[error("Catalog fetch error: {message}")]
    CatalogFetch {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a catalog fetch error with context
    pub fn catalog_fetch(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::CatalogFetch {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::CatalogFetch {
            message: "Product catalog request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::DataValidation {
            message: format!("JSON decode failed: {}", error),
        }
    }
}
