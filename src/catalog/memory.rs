use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{Catalog, CatalogError};
use crate::model::{CatalogProduct, ProductId, Stock};

#[derive(Debug, Default)]
struct Inventory {
    products: HashMap<ProductId, CatalogProduct>,
    stock: HashMap<ProductId, u32>,
}

/// A [`Catalog`] backed by in-process maps.
///
/// Stock can be changed at any time with [`MemoryCatalog::set_stock`]; the cart
/// sees the new value on its next lookup.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inventory: Mutex<Inventory>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `product` with `stock` units available.
    pub fn insert_product(&self, product: CatalogProduct, stock: u32) {
        let mut inventory = self.lock();
        inventory.stock.insert(product.id, stock);
        inventory.products.insert(product.id, product);
    }

    pub fn set_stock(&self, id: ProductId, amount: u32) {
        self.lock().stock.insert(id, amount);
    }

    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inventory.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn fetch_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.lock()
            .stock
            .get(&id)
            .map(|amount| Stock::new(id, *amount))
            .ok_or(CatalogError::NotFound(id))
    }

    async fn fetch_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        self.lock()
            .products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}
