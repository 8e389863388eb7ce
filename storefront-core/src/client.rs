//! Backend product-detail client
//!
//! One GET per page view, awaited once, no retry logic (retry/backoff
//! belongs to the surrounding page, if anywhere). The engine is only handed
//! data after a fully successful fetch and decode.

use shared::error::{AppError, AppResult};
use shared::models::{Catalog, ProductDetailPayload};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL from `STOREFRONT_BACKEND_URL`, with a localhost default
    pub fn from_env() -> Self {
        let base_url = std::env::var("STOREFRONT_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

/// HTTP client for the backend product API
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn product_detail_url(&self, sku: &str) -> String {
        format!(
            "{}/api/products/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(sku)
        )
    }

    /// Fetch the raw product-detail payload for one sku
    pub async fn fetch_product_detail(&self, sku: &str) -> AppResult<ProductDetailPayload> {
        let url = self.product_detail_url(sku);
        tracing::debug!(sku = %sku, url = %url, "[Client] fetching product detail");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(e.to_string()).with_detail("sku", sku))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Product {}", sku)));
        }
        if !resp.status().is_success() {
            tracing::warn!(
                sku = %sku,
                status = %resp.status(),
                "[Client] backend returned non-success status"
            );
            return Err(
                AppError::fetch_failed(format!("backend returned {}", resp.status()))
                    .with_detail("sku", sku),
            );
        }

        resp.json::<ProductDetailPayload>()
            .await
            .map_err(|e| AppError::decode_failed(e.to_string()).with_detail("sku", sku))
    }

    /// Fetch and validate in one step
    pub async fn fetch_catalog(&self, sku: &str) -> AppResult<Catalog> {
        self.fetch_product_detail(sku).await?.into_catalog()
    }
}
