//! Product records at the catalog boundary.
//!
//! [`Product`] is the shape the backend client hands to this core after
//! fetching the catalog; [`SavedProduct`] is the subset the wishlist keeps
//! and the cart starts from. Prices serialize as plain JSON numbers in the
//! durable records, so the `Decimal` fields use the float representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product reference saved by the shopper.
///
/// This is both the wishlist entry shape and the input to a cart add. The
/// store does not validate `image` or `slug`; they pass through to the UI
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProduct {
    /// Opaque product/variant identifier, unique within a store partition.
    pub id: ProductId,
    /// Display name (may encode a color variant as a suffix).
    pub name: String,
    /// Unit price, non-negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// URL or local path reference to the product image.
    pub image: String,
    /// Human-readable routing identifier; never used as a key.
    pub slug: String,
}

/// A catalog product record as supplied by the backend client.
///
/// Used to populate cart/wishlist entries and to drive the color-variant
/// grouping and filter utilities. This core never fetches these itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    pub slug: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
}

/// A named attribute with its option values (e.g., `Size: [S, M, L]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Product {
    /// The subset of this record a shopper saves to a cart or wishlist.
    ///
    /// The first image becomes the saved image; the UI falls back on its
    /// own placeholder when the catalog record has none.
    #[must_use]
    pub fn to_saved(&self) -> SavedProduct {
        SavedProduct {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.images.first().cloned().unwrap_or_default(),
            slug: self.slug.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: ProductId::from(7),
            name: "Widget".to_owned(),
            price: Decimal::new(1050, 2),
            images: vec![
                "https://cdn.example/widget-main.jpg".to_owned(),
                "https://cdn.example/widget-alt.jpg".to_owned(),
            ],
            slug: "widget".to_owned(),
            categories: vec!["gadgets".to_owned()],
            attributes: vec![],
        }
    }

    #[test]
    fn test_to_saved_takes_first_image() {
        let saved = widget().to_saved();
        assert_eq!(saved.id, ProductId::from(7));
        assert_eq!(saved.image, "https://cdn.example/widget-main.jpg");
        assert_eq!(saved.price, Decimal::new(1050, 2));
    }

    #[test]
    fn test_to_saved_without_images() {
        let mut product = widget();
        product.images.clear();
        assert_eq!(product.to_saved().image, "");
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = serde_json::to_value(widget().to_saved()).expect("serialize");
        assert_eq!(json["price"], serde_json::json!(10.5));
    }
}
