//! External product catalog integration
//!
//! Fetches product metadata from the remote catalog service with a single
//! bounded GET, indexes it by numeric product id, and joins validated
//! transactions against it. Every failure path degrades: a failed fetch
//! yields an empty catalog, a failed per-record lookup yields an unmatched
//! record. Nothing in this module aborts the batch.

pub mod client;
pub mod enrichment;
pub mod mapping;

#[cfg(test)]
mod tests;

pub use client::{ApiProduct, CatalogClient};
pub use enrichment::{enrich_transactions, EnrichmentStats};
pub use mapping::{build_product_mapping, ProductMapping};
