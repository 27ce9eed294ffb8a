//! Integration tests for Golden Fig.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p golden-fig-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flows` - Guest/login/logout partition switching on disk
//! - `durable_records` - Durable record wire format and corruption tolerance
//!
//! This crate exports the fixtures the test files share.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use golden_fig_core::{Product, ProductId, SavedProduct};

/// A saved product reference with a deterministic name/slug for `id`.
#[must_use]
pub fn saved_product(id: i64, price_cents: i64) -> SavedProduct {
    SavedProduct {
        id: ProductId::from(id),
        name: format!("Product {id}"),
        price: Decimal::new(price_cents, 2),
        image: format!("https://cdn.goldenfig.shop/p/{id}.jpg"),
        slug: format!("product-{id}"),
    }
}

/// A catalog record as the backend client would hand it over.
#[must_use]
pub fn catalog_product(id: i64, name: &str, price_cents: i64, images: &[&str]) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        price: Decimal::new(price_cents, 2),
        images: images.iter().map(|s| (*s).to_owned()).collect(),
        slug: name.to_ascii_lowercase().replace(' ', "-"),
        categories: vec![],
        attributes: vec![],
    }
}
