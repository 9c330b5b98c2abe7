//! Session-scoped application state for Imprint.
//!
//! This crate owns the one mutable thing in the app: the signed-in user's
//! state, observable field by field. Everything is synchronous and
//! single-threaded; rendering layers subscribe and are re-invoked inline on
//! every write.

mod observers;
mod state;

pub use observers::SubscriptionId;
pub use state::{DEFAULT_TOKEN_BALANCE, UserState};
