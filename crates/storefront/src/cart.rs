//! In-memory cart state for the current identity.
//!
//! The store is a plain reducer over its item list: every operation is a
//! total function that either produces a changed list or leaves it alone.
//! Persistence and identity handling live in [`crate::session`]; this type
//! never touches storage.

use rust_decimal::Decimal;

use golden_fig_core::{CartItem, ProductId, SavedProduct};

use crate::observer::{Listeners, SubscriptionId};

/// The set of cart line items for one identity, plus change listeners.
///
/// Invariant: at most one item per product id. Re-adding an id accumulates
/// quantity on the existing line; the line's non-quantity fields keep their
/// first-seen values (see [`CartStore::add`]).
#[derive(Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    listeners: Listeners<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Add `quantity` units of a product.
    ///
    /// If a line with the product's id already exists its quantity grows by
    /// `quantity`; the line's name/price/image are NOT refreshed from the
    /// incoming product - the first-added values win. That mirrors the
    /// upstream storefront behavior and is pinned by a regression test; see
    /// DESIGN.md before "fixing" it.
    ///
    /// A zero `quantity` is a no-op, keeping the positive-quantity invariant.
    ///
    /// Returns `true` if the list changed.
    pub fn add(&mut self, product: &SavedProduct, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }

        if let Some(line) = self.items.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem::new(product, quantity));
        }

        self.listeners.notify(&self.items);
        true
    }

    /// Remove the line with the given id. No-op if absent.
    ///
    /// Returns `true` if the list changed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != *id);
        let changed = self.items.len() != before;
        if changed {
            self.listeners.notify(&self.items);
        }
        changed
    }

    /// Set the quantity of the line with the given id.
    ///
    /// Negative input clamps to zero, and a zero quantity removes the line
    /// in the same operation. Unknown ids are a no-op.
    ///
    /// Returns `true` if the list changed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);

        if clamped == 0 {
            return self.remove(id);
        }

        let Some(line) = self.items.iter_mut().find(|line| line.id == *id) else {
            return false;
        };
        if line.quantity == clamped {
            return false;
        }

        line.quantity = clamped;
        self.listeners.notify(&self.items);
        true
    }

    /// Drop every line.
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

    /// Replace the whole list, e.g. after an identity switch loads another
    /// partition. Listeners are notified even if the lists happen to match;
    /// the view layer treats a partition swap as a fresh render.
    pub(crate) fn replace_items(&mut self, items: Vec<CartItem>) {
        self.items = items;
        self.listeners.notify(&self.items);
    }

    // =========================================================================
    // Derived aggregates (computed fresh on every read)
    // =========================================================================

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    /// Register a callback invoked with the new item list after each change.
    pub fn subscribe(&mut self, callback: impl Fn(&[CartItem]) + 'static) -> SubscriptionId {
        self.listeners.subscribe(Box::new(callback))
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn saved(id: i64, price: Decimal) -> SavedProduct {
        SavedProduct {
            id: ProductId::from(id),
            name: format!("Product {id}"),
            price,
            image: format!("https://cdn.example/{id}.jpg"),
            slug: format!("product-{id}"),
        }
    }

    fn line_quantity(cart: &CartStore, id: i64) -> Option<u32> {
        cart.items()
            .iter()
            .find(|line| line.id == ProductId::from(id))
            .map(|line| line.quantity)
    }

    // =========================================================================
    // add
    // =========================================================================

    #[test]
    fn test_add_accumulates_quantity_for_existing_id() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 2);
        cart.add(&saved(1, Decimal::TEN), 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(line_quantity(&cart, 1), Some(5));
    }

    #[test]
    fn test_add_keeps_first_seen_fields() {
        // Re-adding an id with a different price/name only bumps quantity;
        // upstream behavior, intentionally preserved.
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 1);

        let mut changed = saved(1, Decimal::ONE);
        changed.name = "Renamed".to_owned();
        cart.add(&changed, 1);

        let line = cart.items().first().expect("line");
        assert_eq!(line.price, Decimal::TEN);
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = CartStore::new();
        assert!(!cart.add(&saved(1, Decimal::TEN), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_string_and_number_ids_are_distinct_lines() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 1);

        let mut other = saved(1, Decimal::TEN);
        other.id = ProductId::from("1");
        cart.add(&other, 1);

        assert_eq!(cart.items().len(), 2);
    }

    // =========================================================================
    // remove / update_quantity / clear
    // =========================================================================

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 1);
        assert!(!cart.remove(&ProductId::from(99)));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 1);
        assert!(cart.update_quantity(&ProductId::from(1), 7));
        assert_eq!(line_quantity(&cart, 1), Some(7));
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 3);
        assert!(cart.update_quantity(&ProductId::from(1), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_clamps_to_removal() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 3);
        assert!(cart.update_quantity(&ProductId::from(1), -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        assert!(!cart.update_quantity(&ProductId::from(1), 4));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 1);
        cart.add(&saved(2, Decimal::ONE), 2);
        assert!(cart.clear());
        assert!(cart.is_empty());
        assert!(!cart.clear());
    }

    // =========================================================================
    // Derived aggregates
    // =========================================================================

    #[test]
    fn test_totals() {
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 2);
        cart.add(&saved(2, Decimal::new(5, 0)), 3);

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), Decimal::new(35, 0));
    }

    #[test]
    fn test_totals_of_empty_cart_are_zero() {
        let cart = CartStore::new();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_totals_follow_mutations() {
        // computed fresh on each read, never cached
        let mut cart = CartStore::new();
        cart.add(&saved(1, Decimal::TEN), 2);
        assert_eq!(cart.total_price(), Decimal::new(20, 0));

        cart.update_quantity(&ProductId::from(1), 1);
        assert_eq!(cart.total_price(), Decimal::TEN);
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    #[test]
    fn test_listeners_fire_only_on_change() {
        let counter = Rc::new(RefCell::new(0_u32));
        let mut cart = CartStore::new();

        let seen = Rc::clone(&counter);
        cart.subscribe(move |_| *seen.borrow_mut() += 1);

        cart.add(&saved(1, Decimal::TEN), 1); // fires
        cart.remove(&ProductId::from(99)); // no-op, silent
        cart.update_quantity(&ProductId::from(1), 1); // same value, silent
        cart.clear(); // fires

        assert_eq!(*counter.borrow(), 2);
    }
}
