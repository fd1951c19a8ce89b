//! Pure data structures shared by the catalog, the storage adapter and the cart actor.

pub mod cart;
pub mod product;
pub mod stock;

pub use cart::*;
pub use product::*;
pub use stock::*;
