//! Core domain types for Imprint.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod contact;
mod directory;
mod plan;
mod samples;

pub use contact::{ContactId, ContactInput, ContactRecord, ContactRecordError};
pub use directory::{ContactDirectory, DirectoryError};
pub use plan::SubscriptionPlan;
pub use samples::sample_contacts;
