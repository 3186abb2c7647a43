//! Joining validated transactions against the product catalog

use tracing::info;

use super::mapping::ProductMapping;
use crate::app::models::{EnrichedTransaction, Transaction};

/// Statistics for an enrichment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Records offered for enrichment
    pub total: usize,
    /// Records whose product id resolved against the catalog
    pub matched: usize,
}

impl EnrichmentStats {
    /// Fraction of records that matched, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.matched as f64 / self.total as f64) * 100.0
        }
    }
}

/// Enrich transactions with catalog metadata by numeric product id
///
/// Enrichment is total: the output has the same length and order as the
/// input, and each record carries an explicit match flag. Extraction or
/// lookup failure degrades the individual record to unmatched; nothing
/// here can fail the batch.
pub fn enrich_transactions(
    transactions: &[Transaction],
    mapping: &ProductMapping,
) -> (Vec<EnrichedTransaction>, EnrichmentStats) {
    let mut enriched = Vec::with_capacity(transactions.len());
    let mut matched = 0;

    for transaction in transactions {
        let record = match transaction
            .product_numeric_id()
            .and_then(|id| mapping.get(&id))
        {
            Some(info) => {
                matched += 1;
                EnrichedTransaction::matched(transaction.clone(), info)
            }
            None => EnrichedTransaction::unmatched(transaction.clone()),
        };
        enriched.push(record);
    }

    let stats = EnrichmentStats {
        total: transactions.len(),
        matched,
    };

    info!(
        "Enrichment complete: {}/{} records matched ({:.1}%)",
        stats.matched,
        stats.total,
        stats.success_rate()
    );

    (enriched, stats)
}
