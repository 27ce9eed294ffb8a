//! Golden Fig Storefront - client-side state core.
//!
//! This crate owns the storefront state that lives on the shopper's device:
//! the cart, the wishlist, their identity-partitioned persistence, and a
//! couple of derivations over the fetched catalog (color-variant grouping,
//! filter/sort). Everything else - inventory, pricing, orders, payments,
//! authentication - belongs to the external WooCommerce/Stripe backends and
//! is consumed through thin clients outside this crate.
//!
//! # Architecture
//!
//! - [`session::ShopperSession`] - one explicitly constructed object per UI,
//!   owning the stores and writing every change through to durable storage
//! - [`cart::CartStore`] / [`wishlist::WishlistStore`] - reducer-style
//!   in-memory stores with change notification
//! - [`persistence`] - partition-key derivation, the storage trait, and the
//!   corruption-tolerant bridge
//! - [`catalog`] - pure utilities over an already-fetched product list
//!
//! The whole crate is synchronous and single-threaded by design: UI event,
//! state transition, durable write, in that order, nothing suspends.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod observer;
pub mod persistence;
pub mod session;
pub mod wishlist;

pub use cart::CartStore;
pub use config::{ConfigError, StorefrontConfig};
pub use error::StorageError;
pub use observer::SubscriptionId;
pub use persistence::{
    DiskStorage, MemoryStorage, PersistenceBridge, Storage, StoreKind, partition_key,
};
pub use session::ShopperSession;
pub use wishlist::WishlistStore;
