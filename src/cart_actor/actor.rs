//! # Cart Actor Server
//!
//! The [`CartActor`] owns the cart and the receiving end of the mailbox. It
//! handles one request at a time, network awaits included, so two operations
//! can never work from the same stale copy of the cart.
//!
//! Every operation follows the same shape:
//!
//! 1. Copy the current cart.
//! 2. Run the checks (catalog lookups, presence) against the copy.
//! 3. Only if all checks pass: replace the cart, publish it, persist it.
//!
//! A failed check returns early, so the published cart is never half-updated.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::{CartError, CartRequest, UpdateProductAmount};
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::model::{Cart, ProductId};
use crate::storage::CartStorage;

/// Collaborators injected into the actor when it starts running.
#[derive(Clone)]
pub struct CartContext {
    pub catalog: Arc<dyn Catalog>,
    pub storage: CartStorage,
}

impl CartContext {
    pub fn new(catalog: Arc<dyn Catalog>, storage: CartStorage) -> Self {
        Self { catalog, storage }
    }
}

pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    published: watch::Sender<Cart>,
}

impl CartActor {
    /// Creates the actor (server) and a client (interface) connected to it.
    ///
    /// The actor does nothing until [`run`](Self::run) is spawned.
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (published, _) = watch::channel(Cart::new());
        let actor = Self {
            receiver,
            cart: Cart::new(),
            published,
        };
        (actor, CartClient::new(sender))
    }

    /// Hydrates the cart from storage, then processes requests until every
    /// client is dropped.
    pub async fn run(mut self, context: CartContext) {
        self.cart = context.storage.load().await;
        self.published.send_replace(self.cart.clone());
        info!(size = self.cart.len(), "Cart actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct {
                    product_id,
                    respond_to,
                } => {
                    debug!(%product_id, "AddProduct");
                    let result = self.add_product(product_id, &context).await;
                    match &result {
                        Ok(cart) => info!(%product_id, amount = cart.amount_of(product_id), "Added"),
                        Err(e) => warn!(%product_id, error = %e, "Add rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::RemoveProduct {
                    product_id,
                    respond_to,
                } => {
                    debug!(%product_id, "RemoveProduct");
                    let result = self.remove_product(product_id, &context).await;
                    match &result {
                        Ok(cart) => info!(%product_id, size = cart.len(), "Removed"),
                        Err(e) => warn!(%product_id, error = %e, "Remove rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::UpdateAmount { update, respond_to } => {
                    debug!(?update, "UpdateAmount");
                    let product_id = update.product_id;
                    let result = self.update_product_amount(update, &context).await;
                    match &result {
                        Ok(cart) => info!(%product_id, amount = cart.amount_of(product_id), "Updated"),
                        Err(e) => warn!(%product_id, error = %e, "Update rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.clone()));
                }
                CartRequest::Subscribe { respond_to } => {
                    let receiver = self.published.subscribe();
                    debug!(subscribers = self.published.receiver_count(), "Subscribe");
                    let _ = respond_to.send(Ok(receiver));
                }
            }
        }

        info!(size = self.cart.len(), "Shutdown");
    }

    async fn add_product(
        &mut self,
        product_id: ProductId,
        context: &CartContext,
    ) -> Result<Cart, CartError> {
        let mut next = self.cart.clone();

        let stock = context.catalog.fetch_stock(product_id).await?;
        let current = next.amount_of(product_id);

        if stock.amount <= current {
            return Err(CartError::InsufficientStock {
                product_id,
                requested: current.saturating_add(1),
                available: stock.amount,
            });
        }

        if next.increment(product_id).is_none() {
            let mut product = context.catalog.fetch_product(product_id).await?;
            if product.id != product_id {
                warn!(%product_id, returned = %product.id, "Catalog returned a different id");
                product.id = product_id;
            }
            next.push_new(product);
        }

        Ok(self.commit(next, context).await)
    }

    async fn remove_product(
        &mut self,
        product_id: ProductId,
        context: &CartContext,
    ) -> Result<Cart, CartError> {
        let mut next = self.cart.clone();
        next.remove(product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        Ok(self.commit(next, context).await)
    }

    /// The requested amount gates the stock check, but the line item only ever
    /// grows by one unit per call.
    async fn update_product_amount(
        &mut self,
        update: UpdateProductAmount,
        context: &CartContext,
    ) -> Result<Cart, CartError> {
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            debug!(%product_id, amount, "Non-positive amount ignored");
            return Ok(self.cart.clone());
        }
        let requested = amount.unsigned_abs();

        let stock = context.catalog.fetch_stock(product_id).await?;
        if stock.amount < requested {
            return Err(CartError::InsufficientStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        let current = next
            .get(product_id)
            .ok_or(CartError::NotInCart(product_id))?
            .amount;
        if next.increment(product_id).is_none() {
            return Err(CartError::InsufficientStock {
                product_id,
                requested: current.saturating_add(1),
                available: stock.amount,
            });
        }
        Ok(self.commit(next, context).await)
    }

    /// Makes `next` the canonical cart, notifies subscribers, then persists it.
    async fn commit(&mut self, next: Cart, context: &CartContext) -> Cart {
        self.cart = next;
        self.published.send_replace(self.cart.clone());
        context.storage.save(&self.cart).await;
        self.cart.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::MockCatalog;
    use crate::catalog::CatalogError;
    use crate::model::{CatalogProduct, Product};
    use crate::notice::{CartOperation, Notice};
    use crate::storage::{MemoryStore, DEFAULT_CART_KEY};

    fn shoe(id: u32) -> CatalogProduct {
        CatalogProduct::new(ProductId(id), "Shoe", 100.0, "shoe.jpg")
    }

    fn line(id: u32, amount: u32) -> Product {
        Product::with_amount(shoe(id), amount)
    }

    async fn start(mock: &MockCatalog, store: Arc<MemoryStore>) -> CartClient {
        let (actor, client) = CartActor::new(10);
        let context = CartContext::new(
            Arc::new(mock.clone()),
            CartStorage::with_default_key(store),
        );
        tokio::spawn(actor.run(context));
        client
    }

    async fn seeded_store(items: Vec<Product>) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let storage = CartStorage::with_default_key(store.clone());
        storage.save(&Cart::from_items(items)).await;
        store
    }

    fn stored_cart(store: &MemoryStore) -> Cart {
        serde_json::from_str(&store.peek(DEFAULT_CART_KEY).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn add_new_product_fetches_data_and_starts_at_one() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(42)).return_ok(10);
        mock.expect_product(ProductId(42)).return_ok(shoe(42));
        let store = Arc::new(MemoryStore::new());
        let client = start(&mock, store.clone()).await;

        let cart = client.add_product(ProductId(42)).await.unwrap();

        assert_eq!(cart.items(), &[line(42, 1)]);
        assert_eq!(stored_cart(&store), cart);
        mock.verify();
    }

    #[tokio::test]
    async fn add_existing_product_increments_without_fetching_product() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1)).return_ok(5);
        let client = start(&mock, seeded_store(vec![line(1, 1)]).await).await;

        let cart = client.add_product(ProductId(1)).await.unwrap();

        assert_eq!(cart.amount_of(ProductId(1)), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn add_blocks_when_stock_equals_current_amount() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1)).return_ok(2);
        let store = seeded_store(vec![line(1, 2)]).await;
        let client = start(&mock, store.clone()).await;

        let err = client.add_product(ProductId(1)).await.unwrap_err();

        assert!(matches!(
            err,
            CartError::InsufficientStock { requested: 3, available: 2, .. }
        ));
        assert_eq!(client.snapshot().await.unwrap().amount_of(ProductId(1)), 2);
        assert_eq!(stored_cart(&store).amount_of(ProductId(1)), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn add_with_zero_stock_keeps_cart_empty() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(7)).return_ok(0);
        let store = Arc::new(MemoryStore::new());
        let client = start(&mock, store.clone()).await;

        let err = client.add_product(ProductId(7)).await.unwrap_err();

        assert!(err.is_insufficient_stock());
        assert!(client.snapshot().await.unwrap().is_empty());
        assert!(store.peek(DEFAULT_CART_KEY).is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn add_fails_cleanly_when_stock_lookup_fails() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(3))
            .return_err(CatalogError::Status { path: "stock/3".into(), status: 500 });
        let client = start(&mock, seeded_store(vec![line(1, 1)]).await).await;

        let err = client.add_product(ProductId(3)).await.unwrap_err();

        assert!(matches!(err, CartError::Catalog(CatalogError::Status { status: 500, .. })));
        assert_eq!(client.snapshot().await.unwrap().items(), &[line(1, 1)]);
        mock.verify();
    }

    #[tokio::test]
    async fn add_fails_cleanly_when_product_lookup_fails() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(3)).return_ok(4);
        mock.expect_product(ProductId(3))
            .return_err(CatalogError::NotFound(ProductId(3)));
        let client = start(&mock, Arc::new(MemoryStore::new())).await;

        let err = client.add_product(ProductId(3)).await.unwrap_err();

        assert!(matches!(err, CartError::Catalog(CatalogError::NotFound(_))));
        assert!(client.snapshot().await.unwrap().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn remove_deletes_only_the_target() {
        let mock = MockCatalog::new();
        let store = seeded_store(vec![line(1, 1), line(2, 3), line(3, 1)]).await;
        let client = start(&mock, store.clone()).await;

        let cart = client.remove_product(ProductId(2)).await.unwrap();

        let ids: Vec<u32> = cart.items().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(stored_cart(&store), cart);
        mock.verify();
    }

    #[tokio::test]
    async fn remove_of_absent_product_is_an_error() {
        let mock = MockCatalog::new();
        let client = start(&mock, seeded_store(vec![line(1, 1)]).await).await;

        let err = client.remove_product(ProductId(9)).await.unwrap_err();

        assert!(matches!(err, CartError::NotInCart(ProductId(9))));
        assert_eq!(client.snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_increments_by_one_regardless_of_requested_amount() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1)).return_ok(5);
        let client = start(&mock, seeded_store(vec![line(1, 1)]).await).await;

        let cart = client
            .update_product_amount(UpdateProductAmount::new(ProductId(1), 3))
            .await
            .unwrap();

        assert_eq!(cart.amount_of(ProductId(1)), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn update_with_non_positive_amount_is_a_silent_no_op() {
        let mock = MockCatalog::new();
        let client = start(&mock, seeded_store(vec![line(1, 2)]).await).await;
        let subscription = client.subscribe().await.unwrap();

        for amount in [0, -4] {
            let cart = client
                .update_product_amount(UpdateProductAmount::new(ProductId(1), amount))
                .await
                .unwrap();
            assert_eq!(cart.amount_of(ProductId(1)), 2);
        }

        assert!(!subscription.has_changed());
        // No catalog call was made.
        mock.verify();
    }

    #[tokio::test]
    async fn update_above_stock_is_rejected() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1)).return_ok(2);
        let client = start(&mock, seeded_store(vec![line(1, 1)]).await).await;

        let err = client
            .update_product_amount(UpdateProductAmount::new(ProductId(1), 3))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CartError::InsufficientStock { requested: 3, available: 2, .. }
        ));
        assert_eq!(client.snapshot().await.unwrap().amount_of(ProductId(1)), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn update_fails_cleanly_when_stock_lookup_fails() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1))
            .return_err(CatalogError::Status { path: "stock/1".into(), status: 503 });
        let store = seeded_store(vec![line(1, 2)]).await;
        let client = start(&mock, store.clone()).await;
        let subscription = client.subscribe().await.unwrap();

        let err = client
            .update_product_amount(UpdateProductAmount::new(ProductId(1), 1))
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::Catalog(CatalogError::Status { status: 503, .. })));
        assert_eq!(
            Notice::for_failure(CartOperation::UpdateAmount, &err),
            Notice::UpdateFailed
        );
        assert_eq!(client.snapshot().await.unwrap().items(), &[line(1, 2)]);
        assert_eq!(stored_cart(&store).items(), &[line(1, 2)]);
        assert!(!subscription.has_changed());
        mock.verify();
    }

    #[tokio::test]
    async fn maxed_out_amount_is_rejected_without_stopping_the_actor() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1)).return_ok(5);
        mock.expect_stock(ProductId(1)).return_ok(5);
        let store = seeded_store(vec![line(1, u32::MAX)]).await;
        let client = start(&mock, store.clone()).await;

        let err = client.add_product(ProductId(1)).await.unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientStock { requested: u32::MAX, available: 5, .. }
        ));

        let err = client
            .update_product_amount(UpdateProductAmount::new(ProductId(1), 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientStock { requested: u32::MAX, available: 5, .. }
        ));

        assert_eq!(client.snapshot().await.unwrap().amount_of(ProductId(1)), u32::MAX);
        assert_eq!(stored_cart(&store).amount_of(ProductId(1)), u32::MAX);
        mock.verify();
    }

    #[tokio::test]
    async fn update_of_absent_product_checks_stock_then_fails() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(4)).return_ok(10);
        let client = start(&mock, Arc::new(MemoryStore::new())).await;

        let err = client
            .update_product_amount(UpdateProductAmount::new(ProductId(4), 2))
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::NotInCart(ProductId(4))));
        mock.verify();
    }

    #[tokio::test]
    async fn hydrates_from_storage_before_handling_requests() {
        let mock = MockCatalog::new();
        let client = start(&mock, seeded_store(vec![line(5, 2), line(6, 1)]).await).await;

        let cart = client.snapshot().await.unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.amount_of(ProductId(5)), 2);
    }
}
