//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::SavedProduct;

/// One line of a cart: a saved product reference plus a quantity.
///
/// Matches the durable record row exactly (flat fields, price as a JSON
/// number). At most one item per `id` exists in a cart; re-adding an id
/// accumulates quantity on the existing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Positive; a line whose quantity reaches zero is removed entirely.
    pub quantity: u32,
    pub image: String,
    pub slug: String,
}

impl CartItem {
    /// Build a line from a saved product reference and a quantity.
    #[must_use]
    pub fn new(product: &SavedProduct, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.image.clone(),
            slug: product.slug.clone(),
        }
    }

    /// Price of the whole line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
