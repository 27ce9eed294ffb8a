//! In-memory wishlist state for the current identity.
//!
//! Same shape as [`crate::cart::CartStore`] minus quantities: a wishlist is
//! a set of saved product references, keyed by product id, with idempotent
//! adds.

use golden_fig_core::{ProductId, SavedProduct};

use crate::observer::{Listeners, SubscriptionId};

/// The set of saved products for one identity, plus change listeners.
///
/// Invariant: at most one entry per product id.
#[derive(Default)]
pub struct WishlistStore {
    items: Vec<SavedProduct>,
    listeners: Listeners<SavedProduct>,
}

impl WishlistStore {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[SavedProduct] {
        &self.items
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership check used by the UI to toggle save affordances.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| item.id == *id)
    }

    /// Save a product. Idempotent: re-adding a present id is a no-op.
    ///
    /// Returns `true` if the list changed.
    pub fn add(&mut self, product: &SavedProduct) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product.clone());
        self.listeners.notify(&self.items);
        true
    }

    /// Remove the entry with the given id. No-op if absent.
    ///
    /// Returns `true` if the list changed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        let changed = self.items.len() != before;
        if changed {
            self.listeners.notify(&self.items);
        }
        changed
    }

    /// Drop every entry.
    ///
    /// Returns `true` if the list changed.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        self.listeners.notify(&self.items);
        true
    }

    /// Replace the whole list after an identity switch.
    pub(crate) fn replace_items(&mut self, items: Vec<SavedProduct>) {
        self.items = items;
        self.listeners.notify(&self.items);
    }

    /// Register a callback invoked with the new item list after each change.
    pub fn subscribe(&mut self, callback: impl Fn(&[SavedProduct]) + 'static) -> SubscriptionId {
        self.listeners.subscribe(Box::new(callback))
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
