//! Identity-partitioned persistence for the cart and wishlist stores.
//!
//! Each (store kind, identity) pair maps to one durable key:
//! `cart_guest`, `cart_user_<id>`, `wishlist_guest`, `wishlist_user_<id>`.
//! The bridge serializes the full item list on every save and replaces the
//! in-memory list on every load - there is no incremental diffing and no
//! cross-partition merging.

pub mod storage;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use golden_fig_core::Identity;

use crate::error::StorageError;

pub use storage::{DiskStorage, MemoryStorage, Storage};

/// Which store a durable record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Cart,
    Wishlist,
}

impl StoreKind {
    /// Stable lowercase name used in partition keys.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
        }
    }
}

/// Durable-storage key for a store kind under an identity.
///
/// Deterministic and pure: `"<kind>_guest"` or `"<kind>_user_<id>"`.
#[must_use]
pub fn partition_key(kind: StoreKind, identity: &Identity) -> String {
    format!("{}_{}", kind.as_str(), identity.partition_suffix())
}

/// Synchronizes in-memory item lists with durable storage.
///
/// Load-side failures (absent key, unparsable record, unreadable backend)
/// all degrade to an empty list: a shopper with a corrupted cart record
/// gets an empty cart, not an error page. Save-side failures propagate.
#[derive(Clone)]
pub struct PersistenceBridge {
    storage: Arc<dyn Storage>,
}

impl PersistenceBridge {
    /// Create a bridge over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Load the item list stored under `key`.
    ///
    /// Returns an empty list when the key is absent or the record is
    /// malformed; corruption is logged and swallowed.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key, error = %err, "failed to read durable record, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(key, error = %err, "malformed durable record, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize `items` and overwrite the record under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the storage write
    /// fails; the caller owns user-visible messaging for that case.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.storage.write(key, &raw)?;
        debug!(key, count = items.len(), "persisted item list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use golden_fig_core::{CartItem, ProductId, SavedProduct, UserId};

    use super::*;

    fn saved(id: i64) -> SavedProduct {
        SavedProduct {
            id: ProductId::from(id),
            name: format!("Product {id}"),
            price: Decimal::new(999, 2),
            image: format!("https://cdn.example/{id}.jpg"),
            slug: format!("product-{id}"),
        }
    }

    fn bridge() -> (PersistenceBridge, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (PersistenceBridge::new(storage.clone()), storage)
    }

    // =========================================================================
    // Key derivation
    // =========================================================================

    #[test]
    fn test_partition_keys() {
        assert_eq!(partition_key(StoreKind::Cart, &Identity::Guest), "cart_guest");
        assert_eq!(
            partition_key(StoreKind::Cart, &Identity::Authenticated(UserId::new(42))),
            "cart_user_42"
        );
        assert_eq!(
            partition_key(StoreKind::Wishlist, &Identity::Guest),
            "wishlist_guest"
        );
        assert_eq!(
            partition_key(StoreKind::Wishlist, &Identity::Authenticated(UserId::new(7))),
            "wishlist_user_7"
        );
    }

    // =========================================================================
    // Load/save semantics
    // =========================================================================

    #[test]
    fn test_round_trip_preserves_items() {
        let (bridge, _) = bridge();
        let items = vec![CartItem::new(&saved(1), 2), CartItem::new(&saved(2), 5)];

        bridge.save("cart_guest", &items).expect("save");
        let loaded: Vec<CartItem> = bridge.load("cart_guest");

        assert_eq!(loaded, items);
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let (bridge, _) = bridge();
        let loaded: Vec<CartItem> = bridge.load("cart_user_999");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupted_record_loads_empty() {
        let (bridge, storage) = bridge();
        storage.write("cart_guest", "{not json").expect("write");

        let loaded: Vec<CartItem> = bridge.load("cart_guest");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_non_list_record_loads_empty() {
        let (bridge, storage) = bridge();
        storage
            .write("wishlist_guest", "{\"id\": 1}")
            .expect("write");

        let loaded: Vec<SavedProduct> = bridge.load("wishlist_guest");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let (bridge, _) = bridge();
        bridge
            .save("cart_guest", &[CartItem::new(&saved(1), 1)])
            .expect("save");
        bridge
            .save("cart_guest", &[CartItem::new(&saved(2), 3)])
            .expect("save");

        let loaded: Vec<CartItem> = bridge.load("cart_guest");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.first().map(|i| i.id.clone()), Some(ProductId::from(2)));
    }

    #[test]
    fn test_empty_list_is_canonical_empty_record() {
        let (bridge, storage) = bridge();
        let empty: [CartItem; 0] = [];
        bridge.save("cart_guest", &empty).expect("save");
        assert_eq!(storage.read("cart_guest").expect("read").as_deref(), Some("[]"));
    }
}
