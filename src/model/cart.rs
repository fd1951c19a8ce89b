//! The cart: an ordered list of line items, unique by product id.
//!
//! Order is insertion order. It carries no meaning beyond keeping the display
//! stable between renders.

use serde::{Deserialize, Serialize};

use super::{CatalogProduct, Product, ProductId};

/// Ordered sequence of [`Product`] line items.
///
/// No two entries share an id. Serialized as a plain JSON array, which is also
/// the persisted format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw line items.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence.
    pub fn from_items(items: impl IntoIterator<Item = Product>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if !cart.contains(item.id) {
                cart.items.push(item);
            }
        }
        cart
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity of `id` currently in the cart, 0 when absent.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |p| p.amount)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products, as shown in the header.
    ///
    /// Ids are unique, so this is the number of line items.
    pub fn distinct_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all amounts.
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|p| p.amount).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(Product::line_total).sum()
    }

    /// Appends a new line item with amount 1.
    ///
    /// Returns `false` and leaves the cart untouched if the id is already present.
    pub fn push_new(&mut self, product: CatalogProduct) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(Product::with_amount(product, 1));
        true
    }

    /// Adds one unit to an existing line item, returning the new amount.
    ///
    /// Returns `None` and leaves the cart untouched if `id` is absent or its
    /// amount is already `u32::MAX`.
    pub fn increment(&mut self, id: ProductId) -> Option<u32> {
        let item = self.items.iter_mut().find(|p| p.id == id)?;
        item.amount = item.amount.checked_add(1)?;
        Some(item.amount)
    }

    /// Removes the line item for `id`, returning it if it was present.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(index))
    }
}

impl From<Vec<Product>> for Cart {
    fn from(items: Vec<Product>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
