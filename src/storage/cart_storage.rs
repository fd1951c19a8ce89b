//! # Cart Storage
//!
//! Persists the whole cart as a JSON array under one key.
//!
//! `load` never fails: an absent or unparseable value is an empty cart.
//! `save` is a full snapshot replace; failures are logged and dropped.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{KeyValueStore, StorageError};
use crate::model::Cart;

/// Key the storefront has always used for the cart.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

#[derive(Clone)]
pub struct CartStorage {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Adapter over `store` using [`DEFAULT_CART_KEY`].
    pub fn with_default_key(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_CART_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the last saved cart, or an empty one.
    pub async fn load(&self) -> Cart {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No saved cart");
                return Cart::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cart read failed, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => {
                info!(key = %self.key, size = cart.len(), "Cart loaded");
                cart
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Saved cart is unreadable, starting empty");
                Cart::new()
            }
        }
    }

    /// Overwrites the stored cart with `cart`. Errors are logged, not returned.
    pub async fn save(&self, cart: &Cart) {
        if let Err(e) = self.try_save(cart).await {
            warn!(key = %self.key, error = %e, "Cart save failed");
        }
    }

    async fn try_save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.store.set(&self.key, raw).await?;
        debug!(key = %self.key, size = cart.len(), "Cart saved");
        Ok(())
    }
}
