//! Core types for Golden Fig.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod identity;
pub mod price;
pub mod product;

pub use cart::CartItem;
pub use id::{ProductId, UserId};
pub use identity::Identity;
pub use price::{CurrencyCode, UnknownCurrency};
pub use product::{Product, ProductAttribute, SavedProduct};
