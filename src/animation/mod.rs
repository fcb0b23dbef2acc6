//! Ripple animation (pure Rust, no FFI).
//!
//! - [`easing`]: ease-out quintic and linear interpolation
//! - [`ripple`]: the frame counter state machine and per-frame parameters

pub mod easing;
pub mod ripple;

pub use easing::{ease_out_quint, lerp};
pub use ripple::{AnimationPhase, RippleAnimation, RippleFrame, Tick};
