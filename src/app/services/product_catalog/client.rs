//! HTTP client for the remote product catalog

use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::{Error, Result};

/// One product entry as returned by the catalog service
///
/// Every field except the payload itself is optional: real catalog data
/// has unbranded products and the id is validated during mapping rather
/// than at deserialization time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiProduct {
    /// Numeric product id, the join key against `ProductID` suffixes
    #[serde(default)]
    pub id: Option<u64>,

    /// Product title
    #[serde(default)]
    pub title: Option<String>,

    /// Product category
    #[serde(default)]
    pub category: Option<String>,

    /// Brand name
    #[serde(default)]
    pub brand: Option<String>,

    /// Average customer rating
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Top-level catalog response body
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    #[serde(default)]
    products: Vec<ApiProduct>,
}

/// Client for the product catalog endpoint
///
/// Issues exactly one GET per pipeline run with a bounded timeout. There is
/// no retry policy: a failed fetch degrades to an empty product list.
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Build a client from catalog configuration
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::catalog_fetch("Failed to build HTTP client", Some(e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch all products, degrading to an empty list on any failure
    ///
    /// Transport errors, timeouts, non-success statuses and malformed
    /// bodies are logged as warnings; the run continues with zero
    /// enrichment matches.
    pub async fn fetch_all_products(&self) -> Vec<ApiProduct> {
        match self.try_fetch().await {
            Ok(products) => {
                info!("Catalog fetch successful: {} products", products.len());
                products
            }
            Err(e) => {
                warn!("Catalog fetch failed, continuing without enrichment: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<ApiProduct>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let body: ProductsResponse = response.json().await?;
        Ok(body.products)
    }
}
