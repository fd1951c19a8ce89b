//! HTTP client for the storefront API.
//!
//! Endpoints (relative to the configured base URL):
//! - `GET stock/{id}` → `{ "id": 1, "amount": 3 }`
//! - `GET products/{id}` → `{ "id": 1, "title": "...", "price": 179.9, "image": "..." }`

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{Catalog, CatalogError};
use crate::model::{CatalogProduct, ProductId, Stock};

#[derive(Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpCatalog {
    /// Creates a client for the API at `base_url` (e.g. `http://localhost:3333`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Bounds every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: String) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                path: path.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                path,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Transport {
                path: path.clone(),
                source,
            })?;
        debug!(%path, bytes = body.len(), "Catalog response");
        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode { path, source })
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn fetch_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.get_json(format!("stock/{}", id.0)).await
    }

    #[instrument(skip(self))]
    async fn fetch_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        self.get_json(format!("products/{}", id.0)).await
    }
}
