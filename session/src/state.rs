//! Session-scoped user state.
//!
//! [`UserState`] holds the signed-in user's mutable app state. One instance
//! is constructed at startup and handed by reference to every consumer;
//! there is no global. All access is synchronous and single-threaded, so
//! the struct carries no locks.

use imprint_types::SubscriptionPlan;

use crate::observers::{SubscriberList, SubscriptionId};

/// Token balance granted to a brand-new account.
pub const DEFAULT_TOKEN_BALANCE: i64 = 150;

/// Mutable per-user application state with per-field change subscriptions.
///
/// Every setter overwrites unconditionally and then notifies that field's
/// subscribers exactly once per call, in registration order. Notification
/// completes before the setter returns. Writes are never coalesced: setting
/// a field to its current value still notifies.
///
/// The token balance is unclamped. A balance below zero is surfaced in the
/// UI, not treated as an error here.
#[derive(Debug)]
pub struct UserState {
    card_created: bool,
    token_balance: i64,
    plan: SubscriptionPlan,
    next_subscription: u64,
    card_created_subscribers: SubscriberList<bool>,
    token_balance_subscribers: SubscriberList<i64>,
    plan_subscribers: SubscriberList<SubscriptionPlan>,
}

impl Default for UserState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserState {
    /// State for a fresh session: no card yet, starter tokens, free plan.
    #[must_use]
    pub fn new() -> Self {
        Self {
            card_created: false,
            token_balance: DEFAULT_TOKEN_BALANCE,
            plan: SubscriptionPlan::default(),
            next_subscription: 1,
            card_created_subscribers: SubscriberList::default(),
            token_balance_subscribers: SubscriberList::default(),
            plan_subscribers: SubscriberList::default(),
        }
    }

    /// Whether the user has created their own card yet.
    #[must_use]
    pub fn card_created(&self) -> bool {
        self.card_created
    }

    #[must_use]
    pub fn token_balance(&self) -> i64 {
        self.token_balance
    }

    #[must_use]
    pub fn plan(&self) -> SubscriptionPlan {
        self.plan
    }

    /// Overwrite the card-created flag and notify its subscribers.
    pub fn set_card_created(&mut self, value: bool) {
        self.card_created = value;
        tracing::debug!(value, "card_created updated");
        self.card_created_subscribers.notify(value);
    }

    /// Overwrite the token balance and notify its subscribers.
    ///
    /// Negative and zero balances are stored as-is.
    pub fn set_token_balance(&mut self, value: i64) {
        self.token_balance = value;
        tracing::debug!(value, "token_balance updated");
        self.token_balance_subscribers.notify(value);
    }

    /// Overwrite the subscription plan and notify its subscribers.
    pub fn set_plan(&mut self, value: SubscriptionPlan) {
        self.plan = value;
        tracing::debug!(plan = value.as_str(), "plan updated");
        self.plan_subscribers.notify(value);
    }

    /// Subscribe to writes of the card-created flag.
    ///
    /// The callback runs synchronously inside every later
    /// [`UserState::set_card_created`] call until unsubscribed.
    pub fn subscribe_card_created(
        &mut self,
        callback: impl FnMut(bool) + 'static,
    ) -> SubscriptionId {
        let id = self.mint_subscription_id();
        self.card_created_subscribers.insert(id, callback);
        id
    }

    /// Subscribe to writes of the token balance.
    pub fn subscribe_token_balance(
        &mut self,
        callback: impl FnMut(i64) + 'static,
    ) -> SubscriptionId {
        let id = self.mint_subscription_id();
        self.token_balance_subscribers.insert(id, callback);
        id
    }

    /// Subscribe to writes of the subscription plan.
    pub fn subscribe_plan(
        &mut self,
        callback: impl FnMut(SubscriptionPlan) + 'static,
    ) -> SubscriptionId {
        let id = self.mint_subscription_id();
        self.plan_subscribers.insert(id, callback);
        id
    }

    /// Release one subscription.
    ///
    /// Unknown or already-released handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        let removed = self.card_created_subscribers.remove(id)
            || self.token_balance_subscribers.remove(id)
            || self.plan_subscribers.remove(id);
        if !removed {
            tracing::debug!(%id, "unsubscribe ignored for unknown handle");
        }
    }

    fn mint_subscription_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        id
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.card_created_subscribers.len()
            + self.token_balance_subscribers.len()
            + self.plan_subscribers.len()
    }
}
