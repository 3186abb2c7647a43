//! Data models for the sales analytics pipeline
//!
//! This module contains the core data structures representing sales
//! transaction records, their enriched counterparts, and external product
//! catalog metadata.

use crate::constants::{self, prefixes};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Transaction Record
// =============================================================================

/// A single sales transaction record
///
/// One record corresponds to one accepted line of the input file. The date
/// is kept as an opaque fixed-width string; it is only ever grouped and
/// sorted lexically, never parsed into a calendar type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier, prefixed with `T`
    pub transaction_id: String,

    /// Calendar date string (e.g. "2024-01-15"), lexically sortable
    pub date: String,

    /// Product identifier, `P` followed by the numeric catalog join key
    pub product_id: String,

    /// Free-text product name; commas are normalized to spaces at parse time
    pub product_name: String,

    /// Units sold; must be positive for a valid record
    pub quantity: i64,

    /// Price per unit; must be positive for a valid record
    pub unit_price: Decimal,

    /// Customer identifier, prefixed with `C`
    pub customer_id: String,

    /// Sales region, free-form non-empty category
    pub region: String,
}

impl Transaction {
    /// Revenue contribution of this record: `quantity * unit_price`
    ///
    /// Computed on demand everywhere rather than stored, so the derived
    /// value can never diverge from its inputs.
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// Numeric suffix of the product id, the catalog join key
    ///
    /// Returns `None` when the prefix is wrong or the suffix is not numeric.
    pub fn product_numeric_id(&self) -> Option<u64> {
        constants::numeric_id_suffix(&self.product_id, prefixes::PRODUCT)
    }
}

// =============================================================================
// Product Catalog Metadata
// =============================================================================

/// Product metadata from the external catalog, keyed by numeric product id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Product title
    pub title: Option<String>,

    /// Product category
    pub category: Option<String>,

    /// Brand name; absent for unbranded catalog entries
    pub brand: Option<String>,

    /// Average customer rating
    pub rating: Option<f64>,
}

// =============================================================================
// Enriched Transaction
// =============================================================================

/// A transaction record extended with product catalog metadata
///
/// Enrichment is total: every input record produces exactly one enriched
/// record, with `api_match` recording whether the catalog lookup succeeded.
/// Records are immutable after enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTransaction {
    /// The underlying validated transaction
    pub transaction: Transaction,

    /// Category from the catalog, when matched
    pub api_category: Option<String>,

    /// Brand from the catalog, when matched
    pub api_brand: Option<String>,

    /// Rating from the catalog, when matched
    pub api_rating: Option<f64>,

    /// Whether the catalog lookup resolved
    pub api_match: bool,
}

impl EnrichedTransaction {
    /// Create an enriched record from a successful catalog match
    pub fn matched(transaction: Transaction, info: &ProductInfo) -> Self {
        Self {
            transaction,
            api_category: info.category.clone(),
            api_brand: info.brand.clone(),
            api_rating: info.rating,
            api_match: true,
        }
    }

    /// Create an enriched record for a failed lookup, all API fields empty
    pub fn unmatched(transaction: Transaction) -> Self {
        Self {
            transaction,
            api_category: None,
            api_brand: None,
            api_rating: None,
            api_match: false,
        }
    }

    /// Render the record as one pipe-delimited output row
    ///
    /// Absent API fields render as empty strings, the match flag as its
    /// textual boolean form.
    pub fn to_delimited_row(&self) -> String {
        let t = &self.transaction;
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            t.transaction_id,
            t.date,
            t.product_id,
            t.product_name,
            t.quantity,
            t.unit_price,
            t.customer_id,
            t.region,
            self.api_category.as_deref().unwrap_or(""),
            self.api_brand.as_deref().unwrap_or(""),
            self.api_rating.map(|r| r.to_string()).unwrap_or_default(),
            self.api_match,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_transaction() -> Transaction {
        Transaction {
            transaction_id: "T1001".to_string(),
            date: "2024-01-01".to_string(),
            product_id: "P101".to_string(),
            product_name: "Widget".to_string(),
            quantity: 5,
            unit_price: dec!(10.00),
            customer_id: "C1".to_string(),
            region: "North".to_string(),
        }
    }

    #[test]
    fn test_amount_is_quantity_times_price() {
        let txn = sample_transaction();
        assert_eq!(txn.amount(), dec!(50.00));
    }

    #[test]
    fn test_product_numeric_id() {
        let mut txn = sample_transaction();
        assert_eq!(txn.product_numeric_id(), Some(101));

        txn.product_id = "PX1".to_string();
        assert_eq!(txn.product_numeric_id(), None);

        txn.product_id = "101".to_string();
        assert_eq!(txn.product_numeric_id(), None);
    }

    #[test]
    fn test_matched_enrichment_carries_catalog_fields() {
        let info = ProductInfo {
            title: Some("iPhone 9".to_string()),
            category: Some("smartphones".to_string()),
            brand: Some("Apple".to_string()),
            rating: Some(4.69),
        };

        let enriched = EnrichedTransaction::matched(sample_transaction(), &info);
        assert!(enriched.api_match);
        assert_eq!(enriched.api_category.as_deref(), Some("smartphones"));
        assert_eq!(enriched.api_brand.as_deref(), Some("Apple"));
        assert_eq!(enriched.api_rating, Some(4.69));
    }

    #[test]
    fn test_unmatched_enrichment_has_empty_fields() {
        let enriched = EnrichedTransaction::unmatched(sample_transaction());
        assert!(!enriched.api_match);
        assert!(enriched.api_category.is_none());
        assert!(enriched.api_brand.is_none());
        assert!(enriched.api_rating.is_none());
    }

    #[test]
    fn test_delimited_row_rendering() {
        let enriched = EnrichedTransaction::unmatched(sample_transaction());
        assert_eq!(
            enriched.to_delimited_row(),
            "T1001|2024-01-01|P101|Widget|5|10.00|C1|North||||false"
        );

        let info = ProductInfo {
            title: None,
            category: Some("smartphones".to_string()),
            brand: None,
            rating: Some(4.5),
        };
        let enriched = EnrichedTransaction::matched(sample_transaction(), &info);
        assert_eq!(
            enriched.to_delimited_row(),
            "T1001|2024-01-01|P101|Widget|5|10.00|C1|North|smartphones||4.5|true"
        );
    }
}
