//! # Remote Catalog
//!
//! Per-id lookups of product data and available stock. No batching and no
//! caching: every call goes to the source.
//!
//! - [`Catalog`] - the lookup port used by the cart actor
//! - [`HttpCatalog`] - `GET stock/{id}` and `GET products/{id}` over HTTP
//! - [`MemoryCatalog`] - in-process catalog for demos and system tests
//! - [`mock::MockCatalog`] - expectation-driven double for unit tests

pub mod error;
pub mod http;
pub mod memory;
pub mod mock;

pub use error::*;
pub use http::*;
pub use memory::*;

use async_trait::async_trait;

use crate::model::{CatalogProduct, ProductId, Stock};

/// Read-only access to the product catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Current available quantity for `id`.
    async fn fetch_stock(&self, id: ProductId) -> Result<Stock, CatalogError>;

    /// Product data for `id`, without any cart amount.
    async fn fetch_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError>;
}
