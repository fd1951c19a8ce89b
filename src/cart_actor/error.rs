//! Error types for the cart actor.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::ProductId;

/// Why a cart operation did not go through.
///
/// Every variant leaves the published cart exactly as it was.
#[derive(Debug, Error)]
pub enum CartError {
    /// The catalog does not have enough units to satisfy the request.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The product is not a line item of the cart.
    #[error("{0} is not in the cart")]
    NotInCart(ProductId),

    /// A catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The cart actor is no longer running.
    #[error("Cart actor closed")]
    ActorClosed,

    /// The cart actor dropped the response channel.
    #[error("Cart actor dropped response channel")]
    ActorDropped,
}

impl CartError {
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, CartError::InsufficientStock { .. })
    }
}
