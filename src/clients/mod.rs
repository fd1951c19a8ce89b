//! Type-safe handles for talking to the [`CartActor`](crate::cart_actor::CartActor).

pub mod cart_client;

pub use cart_client::*;
