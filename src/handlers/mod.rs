//! Event handlers.
//!
//! Turns drained [`crate::events::AppEvent`]s into overlay actions.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, Dispatch};
