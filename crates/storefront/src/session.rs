//! The shopper session: stores + persistence + identity, wired together.
//!
//! A [`ShopperSession`] is an explicitly constructed object the UI layer
//! owns and passes by reference to whoever needs it - there are no
//! module-level singletons. Control flow for every mutation is: reducer
//! transition on the in-memory store, then a full-list write to durable
//! storage under the current identity's partition key.

use std::sync::Arc;

use tracing::debug;

use golden_fig_core::{CartItem, Identity, ProductId, SavedProduct};

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::error::StorageError;
use crate::observer::SubscriptionId;
use crate::persistence::{DiskStorage, PersistenceBridge, Storage, StoreKind, partition_key};
use crate::wishlist::WishlistStore;

/// Cart and wishlist state for the shopper currently driving the UI.
pub struct ShopperSession {
    identity: Identity,
    cart: CartStore,
    wishlist: WishlistStore,
    bridge: PersistenceBridge,
}

impl ShopperSession {
    /// Open a session over the given storage backend.
    ///
    /// Loads both partitions for `identity`; a partition with no durable
    /// record starts empty.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, identity: Identity) -> Self {
        let bridge = PersistenceBridge::new(storage);
        let mut cart = CartStore::new();
        let mut wishlist = WishlistStore::new();

        cart.replace_items(bridge.load(&partition_key(StoreKind::Cart, &identity)));
        wishlist.replace_items(bridge.load(&partition_key(StoreKind::Wishlist, &identity)));

        Self {
            identity,
            cart,
            wishlist,
            bridge,
        }
    }

    /// Open a session on disk-backed storage at the configured state dir.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the state directory cannot be
    /// created.
    pub fn from_config(
        config: &StorefrontConfig,
        identity: Identity,
    ) -> Result<Self, StorageError> {
        let storage = DiskStorage::open(&config.state_dir)?;
        Ok(Self::new(Arc::new(storage), identity))
    }

    /// Identity whose partitions are currently active.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// Read access to the cart store (items, totals).
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Read access to the wishlist store (items, membership).
    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    // =========================================================================
    // Identity transitions
    // =========================================================================

    /// Switch the active identity, e.g. when login completes or on logout.
    ///
    /// Replaces in-memory state wholesale with whatever is stored under the
    /// new identity's partitions. There is no merge: the previous
    /// partition's durable record stays intact (each mutation already
    /// persisted it) and reappears when that identity becomes active again.
    pub fn set_identity(&mut self, identity: Identity) {
        if identity == self.identity {
            return;
        }

        debug!(from = %self.identity, to = %identity, "switching store partitions");
        self.identity = identity;
        self.cart
            .replace_items(self.bridge.load(&partition_key(StoreKind::Cart, &identity)));
        self.wishlist
            .replace_items(self.bridge.load(&partition_key(StoreKind::Wishlist, &identity)));
    }

    // =========================================================================
    // Cart operations (write-through)
    // =========================================================================

    /// Add `quantity` units of a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the new list fails; the
    /// in-memory state keeps the change either way.
    pub fn add_to_cart(
        &mut self,
        product: &SavedProduct,
        quantity: u32,
    ) -> Result<(), StorageError> {
        if self.cart.add(product, quantity) {
            self.persist_cart()?;
        }
        Ok(())
    }

    /// Remove a cart line. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the new list fails.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Result<(), StorageError> {
        if self.cart.remove(id) {
            self.persist_cart()?;
        }
        Ok(())
    }

    /// Set a cart line's quantity; zero or negative removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the new list fails.
    pub fn update_cart_quantity(
        &mut self,
        id: &ProductId,
        quantity: i64,
    ) -> Result<(), StorageError> {
        if self.cart.update_quantity(id, quantity) {
            self.persist_cart()?;
        }
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the empty list fails.
    pub fn clear_cart(&mut self) -> Result<(), StorageError> {
        if self.cart.clear() {
            self.persist_cart()?;
        }
        Ok(())
    }

    // =========================================================================
    // Wishlist operations (write-through)
    // =========================================================================

    /// Save a product to the wishlist. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the new list fails.
    pub fn add_to_wishlist(&mut self, product: &SavedProduct) -> Result<(), StorageError> {
        if self.wishlist.add(product) {
            self.persist_wishlist()?;
        }
        Ok(())
    }

    /// Remove a wishlist entry. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the new list fails.
    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> Result<(), StorageError> {
        if self.wishlist.remove(id) {
            self.persist_wishlist()?;
        }
        Ok(())
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the empty list fails.
    pub fn clear_wishlist(&mut self) -> Result<(), StorageError> {
        if self.wishlist.clear() {
            self.persist_wishlist()?;
        }
        Ok(())
    }

    // =========================================================================
    // Change notification passthrough
    // =========================================================================

    /// Register a cart change callback.
    pub fn subscribe_cart(&mut self, callback: impl Fn(&[CartItem]) + 'static) -> SubscriptionId {
        self.cart.subscribe(callback)
    }

    /// Register a wishlist change callback.
    pub fn subscribe_wishlist(
        &mut self,
        callback: impl Fn(&[SavedProduct]) + 'static,
    ) -> SubscriptionId {
        self.wishlist.subscribe(callback)
    }

    /// Remove a cart change callback.
    pub fn unsubscribe_cart(&mut self, id: SubscriptionId) -> bool {
        self.cart.unsubscribe(id)
    }

    /// Remove a wishlist change callback.
    pub fn unsubscribe_wishlist(&mut self, id: SubscriptionId) -> bool {
        self.wishlist.unsubscribe(id)
    }

    fn persist_cart(&self) -> Result<(), StorageError> {
        self.bridge.save(
            &partition_key(StoreKind::Cart, &self.identity),
            self.cart.items(),
        )
    }

    fn persist_wishlist(&self) -> Result<(), StorageError> {
        self.bridge.save(
            &partition_key(StoreKind::Wishlist, &self.identity),
            self.wishlist.items(),
        )
    }
}
