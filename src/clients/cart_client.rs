//! # Cart Client
//!
//! Provides a high-level API over the cart actor's mailbox. The client only
//! holds a sender, so it is cheap to clone and can be shared across tasks.
//! Requests from all clones are applied in arrival order.

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

use crate::cart_actor::{CartError, CartRequest, Response, UpdateProductAmount};
use crate::model::{Cart, ProductId};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Adds one unit of `product_id`, fetching product data on first insertion.
    ///
    /// Returns the cart as published after the change.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::AddProduct {
            product_id,
            respond_to,
        })
        .await
    }

    /// Removes the line item for `product_id`.
    ///
    /// Fails with [`CartError::NotInCart`] if there is none.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::RemoveProduct {
            product_id,
            respond_to,
        })
        .await
    }

    /// Checks `update.amount` against stock and, if it fits, adds one unit.
    ///
    /// A non-positive amount is ignored and returns the current cart.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::UpdateAmount { update, respond_to })
            .await
    }

    /// Current cart, ordered after every request sent before it.
    pub async fn snapshot(&self) -> Result<Cart, CartError> {
        self.request(|respond_to| CartRequest::Snapshot { respond_to })
            .await
    }

    /// Registers for notifications of every published cart.
    pub async fn subscribe(&self) -> Result<CartSubscription, CartError> {
        let receiver = self
            .request(|respond_to| CartRequest::Subscribe { respond_to })
            .await?;
        Ok(CartSubscription { receiver })
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> CartRequest,
    ) -> Result<T, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| CartError::ActorClosed)?;
        response.await.map_err(|_| CartError::ActorDropped)?
    }
}

/// A live view of the published cart.
///
/// Dropping the subscription (or calling [`unsubscribe`](Self::unsubscribe))
/// stops notifications. A slow reader sees the latest cart; intermediate
/// states published while it was not looking are coalesced.
#[derive(Debug)]
pub struct CartSubscription {
    receiver: watch::Receiver<Cart>,
}

impl CartSubscription {
    /// The most recently published cart.
    pub fn current(&self) -> Cart {
        self.receiver.borrow().clone()
    }

    /// Whether a cart was published since the last [`changed`](Self::changed).
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Waits for the next published cart.
    ///
    /// Returns `None` once the actor has shut down.
    pub async fn changed(&mut self) -> Option<Cart> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}
