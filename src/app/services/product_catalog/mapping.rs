//! Product id to metadata mapping

use std::collections::HashMap;
use tracing::debug;

use super::client::ApiProduct;
use crate::app::models::ProductInfo;

/// Mapping from numeric product id to catalog metadata
pub type ProductMapping = HashMap<u64, ProductInfo>;

/// Index catalog products by numeric id
///
/// Entries without an id are skipped; a duplicated id keeps the last
/// occurrence, matching the catalog's own ordering.
pub fn build_product_mapping(products: Vec<ApiProduct>) -> ProductMapping {
    let mut mapping = ProductMapping::with_capacity(products.len());

    for product in products {
        let Some(id) = product.id else {
            debug!("Skipping catalog entry without id");
            continue;
        };

        mapping.insert(
            id,
            ProductInfo {
                title: product.title,
                category: product.category,
                brand: product.brand,
                rating: product.rating,
            },
        );
    }

    mapping
}
