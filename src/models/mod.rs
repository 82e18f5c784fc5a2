//! Data models for the contact assistant.
//!
//! A `ContactRecord` aggregates the validated value objects from `domain`.

pub mod record;

pub use record::{ContactRecord, PHONE_SEPARATOR};
