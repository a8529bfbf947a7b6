//! Cart line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Minimum quantity per line item.
pub const MIN_QUANTITY: u32 = 1;

/// Maximum quantity per line item. Adding beyond this caps silently.
pub const MAX_QUANTITY: u32 = 99;

/// One product-quantity pair in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier; unique within the cart.
    pub id: ProductId,
    /// Display name (denormalized from the catalog).
    pub name: String,
    /// Listing description.
    pub description: String,
    /// Image reference.
    pub image: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, always within [`MIN_QUANTITY`]..=[`MAX_QUANTITY`].
    pub quantity: u32,
}

impl LineItem {
    /// Total for this line (unit price x quantity).
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// A request to add a product to the cart, as the view layer sends it.
///
/// The price is a raw decimal here; it is validated (finite, non-negative)
/// before a [`LineItem`] is created from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItem {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub quantity: u32,
}

impl AddItem {
    /// Build a request from a catalog product.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.blurb.clone(),
            image: product
                .primary_image()
                .map(|i| i.url.clone())
                .unwrap_or_default(),
            price: product.price.to_decimal(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem {
            id: ProductId::new("p-01"),
            name: "Thing".to_string(),
            description: String::new(),
            image: String::new(),
            price: Money::from_cents(699),
            quantity: 5,
        };
        assert_eq!(item.line_total(), Money::from_cents(3495));
    }

    #[test]
    fn test_add_item_from_product() {
        let product = Product::new("p-01", "Thing", Money::from_cents(1250))
            .with_blurb("A thing")
            .with_image("/img/thing.jpg", "Thing");
        let request = AddItem::from_product(&product, 2);
        assert_eq!(request.id, ProductId::new("p-01"));
        assert_eq!(request.price, 12.50);
        assert_eq!(request.image, "/img/thing.jpg");
        assert_eq!(request.quantity, 2);
    }
}
