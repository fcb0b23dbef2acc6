//! Ripple domain model.
//!
//! Pure values (no FFI): the ripple configuration, colors and the constants
//! they default to.

pub mod color;
pub mod config;
pub mod constants;

pub use color::Rgba;
pub use config::RippleConfig;
pub use constants::*;
