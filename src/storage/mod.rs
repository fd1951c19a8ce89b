//! # Persistence
//!
//! The cart is persisted as a single string value under a fixed key. The
//! backing store is anything that implements [`KeyValueStore`], so the cart
//! logic runs unchanged against memory, a directory of files, or any other
//! get/set backend.
//!
//! - [`KeyValueStore`] - the get/set port
//! - [`MemoryStore`] - in-process map
//! - [`FileStore`] - one file per key under a root directory
//! - [`CartStorage`] - the cart adapter: full-snapshot `save`, infallible `load`

pub mod cart_storage;
pub mod error;
pub mod file;
pub mod memory;

pub use cart_storage::*;
pub use error::*;
pub use file::*;
pub use memory::*;

use async_trait::async_trait;

/// String key-value store with get/set semantics only.
///
/// No versioning, no partial writes: `set` replaces whatever was stored.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never set.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
