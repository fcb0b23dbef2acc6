//! Overlay window and its rendering.

pub mod renderer;
pub mod window;

pub use renderer::paint_ripple;
pub use window::{RippleWindow, TIMER_RIPPLE};
