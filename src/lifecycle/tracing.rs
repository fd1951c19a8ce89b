//! # Observability & Tracing
//!
//! Structured logging with the `tracing` crate. Levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run -- add 1 add 1      # lifecycle and mutations
//! RUST_LOG=debug cargo run -- add 1           # request payloads too
//! ```
//!
//! With `RUST_LOG=info` a successful add followed by a rejected one reads:
//!
//! ```text
//! INFO Cart loaded key="@RocketShoes:cart" size=0
//! INFO Cart actor started size=0
//! INFO Added product_id=product_1 amount=1
//! WARN Add rejected product_id=product_1 error=Insufficient stock for product_1: requested 2, available 1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
