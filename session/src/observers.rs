//! Field subscription registry.
//!
//! Each observable field owns one [`SubscriberList`]. Callbacks run
//! synchronously, in registration order, on every write to that field.

use std::fmt;

/// Handle identifying one subscription.
///
/// Returned by the `subscribe_*` methods on [`crate::UserState`] and
/// accepted by [`crate::UserState::unsubscribe`]. Handles are unique across
/// all fields of one state instance, so releasing one does not require
/// remembering which field it was registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered callback registry for a single field.
///
/// `Debug` is manually implemented because boxed closures have no useful
/// representation; it prints the subscriber count instead.
pub(crate) struct SubscriberList<T> {
    entries: Vec<(SubscriptionId, Box<dyn FnMut(T)>)>,
}

impl<T> Default for SubscriberList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for SubscriberList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberList")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

impl<T: Copy> SubscriberList<T> {
    pub(crate) fn insert(&mut self, id: SubscriptionId, callback: impl FnMut(T) + 'static) {
        self.entries.push((id, Box::new(callback)));
    }

    /// Remove the subscription with this handle. Returns whether it was
    /// present.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every callback with `value`, in registration order.
    pub(crate) fn notify(&mut self, value: T) {
        for (_, callback) in &mut self.entries {
            callback(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
