//! Change notification for the in-memory stores.
//!
//! The original design re-rendered implicitly on every state change; here
//! the stores carry an explicit list of callbacks that interested callers
//! (typically the view layer) register against. Everything is synchronous
//! and single-threaded: a notification runs inside the mutating call,
//! before persistence.

/// Handle identifying one registered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of change listeners for an item slice.
pub(crate) struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Box<dyn Fn(&[T])>)>,
}

impl<T> Listeners<T> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback; returns the handle needed to unsubscribe.
    pub(crate) fn subscribe(&mut self, callback: Box<dyn Fn(&[T])>) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        SubscriptionId(id)
    }

    /// Remove a callback. Returns `false` if the handle was not registered.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id.0);
        self.entries.len() != before
    }

    /// Invoke every callback with the new item list, in registration order.
    pub(crate) fn notify(&self, items: &[T]) {
        for (_, callback) in &self.entries {
            callback(items);
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
