//! # Mock Catalog
//!
//! An expectation-driven [`Catalog`] for testing the cart without a network.
//!
//! Expectations are queued in order and consumed one per call. A call that
//! does not match the next expectation (wrong kind or wrong id) fails with
//! [`CatalogError::Unexpected`] and is remembered, so [`MockCatalog::verify`]
//! reports it even if the cart swallowed the error.
//!
//! ```rust
//! use cart_recipe::catalog::{mock::MockCatalog, Catalog};
//! use cart_recipe::model::{CatalogProduct, ProductId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCatalog::new();
//!     mock.expect_stock(ProductId(42)).return_ok(10);
//!     mock.expect_product(ProductId(42))
//!         .return_ok(CatalogProduct::new(ProductId(42), "Shoe", 100.0, "shoe.jpg"));
//!
//!     assert_eq!(mock.fetch_stock(ProductId(42)).await.unwrap().amount, 10);
//!     assert_eq!(mock.fetch_product(ProductId(42)).await.unwrap().name, "Shoe");
//!
//!     mock.verify();
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::{Catalog, CatalogError};
use crate::model::{CatalogProduct, ProductId, Stock};

enum Expectation {
    Stock {
        id: ProductId,
        response: Result<Stock, CatalogError>,
    },
    Product {
        id: ProductId,
        response: Result<CatalogProduct, CatalogError>,
    },
}

impl Expectation {
    fn describe(&self) -> String {
        match self {
            Expectation::Stock { id, .. } => format!("fetch_stock({id})"),
            Expectation::Product { id, .. } => format!("fetch_product({id})"),
        }
    }
}

#[derive(Default)]
struct State {
    expectations: VecDeque<Expectation>,
    unexpected: Vec<String>,
}

type Shared = Arc<Mutex<State>>;

fn lock(state: &Shared) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// A mock catalog with expectation tracking for fluent testing.
///
/// Cloning shares the same expectation queue, so a clone can be handed to the
/// cart while the test keeps the original for [`verify`](Self::verify).
#[derive(Clone, Default)]
pub struct MockCatalog {
    state: Shared,
}

impl MockCatalog {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_stock` call for `id`.
    pub fn expect_stock(&self, id: ProductId) -> StockExpectationBuilder {
        StockExpectationBuilder {
            id,
            state: self.state.clone(),
        }
    }

    /// Expects a `fetch_product` call for `id`.
    pub fn expect_product(&self, id: ProductId) -> ProductExpectationBuilder {
        ProductExpectationBuilder {
            id,
            state: self.state.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.state).expectations.len()
    }

    /// Panics unless every expectation was met and no unexpected call arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            panic!("Unexpected catalog calls: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            let pending: Vec<String> = state.expectations.iter().map(Expectation::describe).collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                pending.len(),
                pending
            );
        }
    }

    fn reject(&self, call: String, next: Option<Expectation>) -> CatalogError {
        let mut state = lock(&self.state);
        let message = match next {
            Some(expected) => {
                let message = format!("{call}, expected {}", expected.describe());
                state.expectations.push_front(expected);
                message
            }
            None => format!("{call}, no expectations left"),
        };
        state.unexpected.push(message.clone());
        CatalogError::Unexpected(message)
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn fetch_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let next = lock(&self.state).expectations.pop_front();
        match next {
            Some(Expectation::Stock { id: expected, response }) if expected == id => response,
            other => Err(self.reject(format!("fetch_stock({id})"), other)),
        }
    }

    async fn fetch_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        let next = lock(&self.state).expectations.pop_front();
        match next {
            Some(Expectation::Product { id: expected, response }) if expected == id => response,
            other => Err(self.reject(format!("fetch_product({id})"), other)),
        }
    }
}

/// Builder for `fetch_stock` expectations.
pub struct StockExpectationBuilder {
    id: ProductId,
    state: Shared,
}

impl StockExpectationBuilder {
    /// The call succeeds with `amount` units available.
    pub fn return_ok(self, amount: u32) {
        lock(&self.state).expectations.push_back(Expectation::Stock {
            id: self.id,
            response: Ok(Stock::new(self.id, amount)),
        });
    }

    /// The call fails with `error`.
    pub fn return_err(self, error: CatalogError) {
        lock(&self.state).expectations.push_back(Expectation::Stock {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `fetch_product` expectations.
pub struct ProductExpectationBuilder {
    id: ProductId,
    state: Shared,
}

impl ProductExpectationBuilder {
    /// The call succeeds with `product`.
    pub fn return_ok(self, product: CatalogProduct) {
        lock(&self.state).expectations.push_back(Expectation::Product {
            id: self.id,
            response: Ok(product),
        });
    }

    /// The call fails with `error`.
    pub fn return_err(self, error: CatalogError) {
        lock(&self.state).expectations.push_back(Expectation::Product {
            id: self.id,
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn expectations_are_consumed_in_order() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1)).return_ok(4);
        mock.expect_stock(ProductId(2)).return_err(CatalogError::NotFound(ProductId(2)));

        assert_eq!(mock.fetch_stock(ProductId(1)).await.unwrap().amount, 4);
        assert!(mock.fetch_stock(ProductId(2)).await.is_err());
        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_call_keeps_the_expectation_and_is_reported() {
        let mock = MockCatalog::new();
        mock.expect_stock(ProductId(1)).return_ok(4);

        let err = mock.fetch_product(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unexpected(_)));
        assert_eq!(mock.remaining(), 1);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_panics_on_leftovers() {
        let mock = MockCatalog::new();
        mock.expect_product(ProductId(3))
            .return_ok(CatalogProduct::new(ProductId(3), "Boot", 1.0, ""));
        mock.verify();
    }
}
