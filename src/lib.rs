//! # Cart Recipe
//!
//! > **A storefront shopping cart as a Tokio actor.**
//!
//! The cart lives inside a single task that owns it. Callers send requests
//! through a cloneable [`CartClient`](clients::CartClient); the actor checks
//! stock against the remote catalog, applies the change to a copy of the cart,
//! publishes the copy to subscribers and writes it to storage.
//!
//! ## Why an actor?
//!
//! Each operation awaits the network before it mutates the cart. If two
//! operations were allowed to interleave, both could start from the same cart
//! and the second to finish would erase the first. The actor handles one
//! request at a time, network awaits included, so that cannot happen. No lock
//! guards the cart: the task owns it.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Product`](model::Product) line items, [`Stock`](model::Stock) records and
//! the [`Cart`](model::Cart) that keeps them unique by id.
//!
//! ### 2. The Collaborators ([`catalog`], [`storage`])
//! - [`Catalog`](catalog::Catalog): per-id stock and product lookups, over HTTP
//!   or in memory.
//! - [`KeyValueStore`](storage::KeyValueStore) and
//!   [`CartStorage`](storage::CartStorage): full-snapshot persistence of the cart.
//!
//! ### 3. The Engine ([`cart_actor`])
//! [`CartActor`](cart_actor::CartActor) and its three operations: add, remove,
//! update amount. Failures come back as [`CartError`](cart_actor::CartError).
//!
//! ### 4. The Interface ([`clients`], [`notice`])
//! [`CartClient`](clients::CartClient) for requests and subscriptions;
//! [`Notice`](notice::Notice) turns a failure into the text shown to the shopper.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`CartSystem`](lifecycle::CartSystem) wires everything from a
//! [`CartConfig`](config::CartConfig) and shuts it down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Against a storefront API on localhost:3333
//! RUST_LOG=info cargo run -- add 1 1 2
//! RUST_LOG=info cargo run -- update 1 3
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notice;
pub mod storage;
