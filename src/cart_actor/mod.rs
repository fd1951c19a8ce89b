//! # Cart Actor
//!
//! Owns the canonical cart and applies add / remove / update-amount requests
//! one at a time.
//!
//! ## Structure
//!
//! - [`actor`] - [`CartActor`], the message loop and the three operations
//! - [`message`] - [`CartRequest`] and the [`UpdateProductAmount`] payload
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cart_recipe::cart_actor::{self, CartContext};
//! use cart_recipe::catalog::MemoryCatalog;
//! use cart_recipe::model::{CatalogProduct, ProductId};
//! use cart_recipe::storage::{CartStorage, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(MemoryCatalog::new());
//!     catalog.insert_product(CatalogProduct::new(ProductId(42), "Shoe", 100.0, "shoe.jpg"), 10);
//!
//!     let (actor, client) = cart_actor::new(32);
//!     let context = CartContext::new(catalog, CartStorage::with_default_key(Arc::new(MemoryStore::new())));
//!     tokio::spawn(actor.run(context));
//!
//!     let cart = client.add_product(ProductId(42)).await?;
//!     assert_eq!(cart.amount_of(ProductId(42)), 1);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::CartClient;

/// Creates a new cart actor and its client.
///
/// `buffer_size` is the mailbox capacity; callers wait when it is full.
pub fn new(buffer_size: usize) -> (CartActor, CartClient) {
    CartActor::new(buffer_size)
}
