//! # Cart Messages
//!
//! Requests sent from a [`CartClient`](crate::clients::CartClient) to the
//! [`CartActor`](super::CartActor). Each carries a one-shot responder; the
//! actor answers every request exactly once.

use tokio::sync::{oneshot, watch};

use super::CartError;
use crate::model::{Cart, ProductId};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, CartError>>;

/// Payload of [`CartRequest::UpdateAmount`].
///
/// `amount` is the quantity the caller asks for. It is checked against stock,
/// but a successful update adds exactly one unit to the line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i32,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: i32) -> Self {
        Self { product_id, amount }
    }
}

#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: Response<Cart>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: Response<Cart>,
    },
    UpdateAmount {
        update: UpdateProductAmount,
        respond_to: Response<Cart>,
    },
    Snapshot {
        respond_to: Response<Cart>,
    },
    Subscribe {
        respond_to: Response<watch::Receiver<Cart>>,
    },
}
