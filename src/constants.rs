//! Application constants for the sales analytics pipeline
//!
//! This module contains field prefixes, file format tokens, default paths,
//! and analytics defaults used throughout the application.

// =============================================================================
// Record Schema Constants
// =============================================================================

/// Field delimiter for the sales data file format
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a raw transaction line
pub const FIELD_COUNT: usize = 8;

/// Header token at the start of the first line of a data file
pub const HEADER_TOKEN: &str = "TransactionID";

/// Reserved prefixes identifying record id types
pub mod prefixes {
    /// Transaction id prefix
    pub const TRANSACTION: char = 'T';

    /// Product id prefix (numeric suffix joins the product catalog)
    pub const PRODUCT: char = 'P';

    /// Customer id prefix
    pub const CUSTOMER: char = 'C';
}

/// Thousands separator stripped from numeric fields before parsing
pub const THOUSANDS_SEPARATOR: char = ',';

// =============================================================================
// Analytics Defaults
// =============================================================================

/// Default number of top-selling products to report
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// Default number of top customers to report
pub const DEFAULT_TOP_CUSTOMERS: usize = 5;

/// Default quantity threshold below which a product is low-performing
pub const DEFAULT_LOW_PERFORMER_THRESHOLD: i64 = 10;

// =============================================================================
// Product Catalog Constants
// =============================================================================

/// Default product catalog endpoint
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://dummyjson.com/products?limit=100";

/// Timeout for the single catalog request, in seconds
pub const CATALOG_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default input data file
pub const DEFAULT_INPUT_FILE: &str = "data/sales_data.txt";

/// Default enriched data output file
pub const DEFAULT_ENRICHED_FILE: &str = "data/enriched_sales_data.txt";

/// Default report output file
pub const DEFAULT_REPORT_FILE: &str = "output/sales_report.txt";

/// Header row for the enriched data file
pub const ENRICHED_FILE_HEADER: &str = "TransactionID|Date|ProductID|ProductName|\
                                        Quantity|UnitPrice|CustomerID|Region|\
                                        API_Category|API_Brand|API_Rating|API_Match";

// =============================================================================
// Report Constants
// =============================================================================

/// Currency symbol used in the report
pub const CURRENCY_SYMBOL: &str = "₹";

/// Timestamp format for the report header
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a line is the data file header row
pub fn is_header_line(line: &str) -> bool {
    line.starts_with(HEADER_TOKEN)
}

/// Extract the numeric suffix of a prefixed id (e.g. "P101" -> 101)
pub fn numeric_id_suffix(id: &str, prefix: char) -> Option<u64> {
    let rest = id.strip_prefix(prefix)?;
    rest.parse().ok()
}
