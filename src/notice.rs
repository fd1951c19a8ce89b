//! # User-Facing Notices
//!
//! The cart reports failures as [`CartError`] values and leaves presentation
//! to the caller. This module is the presentation side used by the storefront:
//! it maps a failed operation to one of the five notice categories and the
//! text shown to the shopper, and formats the header's cart size.

use std::fmt::Display;

use crate::cart_actor::CartError;
use crate::model::Cart;

/// The cart operation that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

/// What the shopper is told when an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InsufficientStockOnAdd,
    AddFailed,
    RemoveFailed,
    InsufficientStockOnUpdate,
    UpdateFailed,
}

impl Notice {
    /// Picks the notice for `error` raised by `operation`.
    ///
    /// Insufficient stock has its own notice on add and update; anything else
    /// collapses into the operation's generic failure.
    pub fn for_failure(operation: CartOperation, error: &CartError) -> Self {
        match (operation, error.is_insufficient_stock()) {
            (CartOperation::Add, true) => Notice::InsufficientStockOnAdd,
            (CartOperation::Add, false) => Notice::AddFailed,
            (CartOperation::UpdateAmount, true) => Notice::InsufficientStockOnUpdate,
            (CartOperation::UpdateAmount, false) => Notice::UpdateFailed,
            (CartOperation::Remove, _) => Notice::RemoveFailed,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::InsufficientStockOnAdd | Notice::InsufficientStockOnUpdate => {
                "Quantidade solicitada fora de estoque"
            }
            Notice::AddFailed => "Erro na adição do produto",
            Notice::RemoveFailed => "Erro na remoção do produto",
            Notice::UpdateFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Header label for the number of distinct products in `cart`.
pub fn cart_size_label(cart: &Cart) -> String {
    match cart.distinct_count() {
        1 => "1 item".to_string(),
        n => format!("{n} itens"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::model::{CatalogProduct, ProductId};

    fn insufficient() -> CartError {
        CartError::InsufficientStock {
            product_id: ProductId(1),
            requested: 2,
            available: 1,
        }
    }

    #[test]
    fn stock_failures_get_their_own_notice() {
        assert_eq!(
            Notice::for_failure(CartOperation::Add, &insufficient()),
            Notice::InsufficientStockOnAdd
        );
        assert_eq!(
            Notice::for_failure(CartOperation::UpdateAmount, &insufficient()),
            Notice::InsufficientStockOnUpdate
        );
        assert_eq!(
            Notice::InsufficientStockOnAdd.message(),
            Notice::InsufficientStockOnUpdate.message()
        );
    }

    #[test]
    fn other_failures_collapse_per_operation() {
        let lookup = CartError::Catalog(CatalogError::NotFound(ProductId(1)));
        let missing = CartError::NotInCart(ProductId(1));

        assert_eq!(Notice::for_failure(CartOperation::Add, &lookup), Notice::AddFailed);
        assert_eq!(
            Notice::for_failure(CartOperation::UpdateAmount, &missing),
            Notice::UpdateFailed
        );
        assert_eq!(Notice::for_failure(CartOperation::Remove, &missing), Notice::RemoveFailed);
        assert_eq!(Notice::RemoveFailed.to_string(), "Erro na remoção do produto");
    }

    #[test]
    fn header_label_pluralizes() {
        let mut cart = Cart::new();
        assert_eq!(cart_size_label(&cart), "0 itens");

        cart.push_new(CatalogProduct::new(ProductId(1), "Shoe", 1.0, ""));
        cart.increment(ProductId(1));
        assert_eq!(cart_size_label(&cart), "1 item");

        cart.push_new(CatalogProduct::new(ProductId(2), "Boot", 1.0, ""));
        assert_eq!(cart_size_label(&cart), "2 itens");
    }
}
