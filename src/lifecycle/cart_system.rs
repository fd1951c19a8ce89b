use std::sync::Arc;

use tracing::{error, info};

use crate::cart_actor::{self, CartContext};
use crate::catalog::{Catalog, HttpCatalog};
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::storage::{CartStorage, FileStore, KeyValueStore};

/// The runtime orchestrator for the cart.
///
/// `CartSystem` is responsible for:
/// - **Dependency Wiring**: building the catalog and the storage adapter and
///   injecting them into the actor
/// - **Lifecycle Management**: spawning the actor and stopping it
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::new(&CartConfig::from_env());
///
/// let cart = system.cart_client.add_product(ProductId(1)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the cart actor
    pub cart_client: CartClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Starts a cart backed by the HTTP catalog and a file store, as configured.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CartConfig) -> Self {
        let mut catalog = HttpCatalog::new(&config.api_url);
        if let Some(timeout) = config.api_timeout {
            catalog = catalog.with_timeout(timeout);
        }
        let store = FileStore::new(config.store_dir.clone());
        info!(
            api_url = %catalog.base_url(),
            store_dir = %store.root().display(),
            "Starting cart system"
        );

        Self::with_parts(
            Arc::new(catalog),
            Arc::new(store),
            &config.storage_key,
            config.channel_capacity,
        )
    }

    /// Starts a cart over caller-provided collaborators.
    pub fn with_parts(
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn KeyValueStore>,
        storage_key: &str,
        channel_capacity: usize,
    ) -> Self {
        let (actor, cart_client) = cart_actor::new(channel_capacity);
        let context = CartContext::new(catalog, CartStorage::new(store, storage_key));
        let handle = tokio::spawn(actor.run(context));

        Self {
            cart_client,
            handle,
        }
    }

    /// Gracefully shuts down the cart.
    ///
    /// Drops this system's client and waits for the actor to drain. Clones of
    /// the client handed out earlier must be dropped first, otherwise the actor
    /// keeps running and this call waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor stopped cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
