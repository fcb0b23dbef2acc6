//! Ripple overlay.
//!
//! The controller owns the single ripple and drives a platform surface
//! through the [`OverlaySurface`] trait.

pub mod controller;
pub mod surface;

pub use controller::RippleOverlay;
pub use surface::{OverlaySurface, Placement};
