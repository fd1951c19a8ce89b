//! Products as the catalog returns them and as they live in the cart.
//!
//! The catalog returns a [`CatalogProduct`], which carries no amount. It only
//! becomes a [`Product`] when it is inserted into a [`Cart`](crate::model::Cart),
//! at which point the amount starts at 1.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Assigned by the remote catalog; serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product record fetched from `GET products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(alias = "title")]
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl CatalogProduct {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// A cart line item: catalog data plus the quantity currently in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(alias = "title")]
    pub name: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl Product {
    /// Creates a line item from catalog data with the given amount.
    pub fn with_amount(product: CatalogProduct, amount: u32) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            amount,
        }
    }

    /// Price of the whole line (`price * amount`).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_product_accepts_title_field() {
        let json = r#"{"id":3,"title":"Tênis","price":139.9,"image":"https://img/3.jpg"}"#;
        let product: CatalogProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.name, "Tênis");
    }

    #[test]
    fn line_total_multiplies_price_by_amount() {
        let product = Product::with_amount(CatalogProduct::new(ProductId(1), "Shoe", 99.5, ""), 2);
        assert_eq!(product.line_total(), 199.0);
    }

    #[test]
    fn product_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ProductId(42)).unwrap(), "42");
        assert_eq!(ProductId(42).to_string(), "product_42");
    }
}
