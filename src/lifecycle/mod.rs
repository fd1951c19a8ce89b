//! # System Lifecycle
//!
//! Starting, wiring and stopping the cart actor.
//!
//! - [`CartSystem`] - builds the collaborators, spawns the actor, shuts it down
//! - [`setup_tracing`] - installs the log subscriber
//!
//! ## Dependency Injection via Context
//!
//! The actor is created without its collaborators. The catalog and the
//! storage adapter are handed to `run(context)` when the actor is spawned, so
//! tests can start the same actor against a mock catalog and an in-memory
//! store.
//!
//! ## Graceful Shutdown
//!
//! 1. Drop all clients, which closes the mailbox.
//! 2. The actor finishes the request in hand, logs its final size and exits.
//! 3. [`CartSystem::shutdown`] awaits the task.

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use self::tracing::*;
