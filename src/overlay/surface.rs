//! Seam between the ripple logic and the window that shows it.

use crate::animation::RippleFrame;

/// Square window position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub left: i32,
    pub top: i32,
    pub size: i32,
}

impl Placement {
    /// Square of side `size` whose center is (x, y).
    pub fn centered_on(x: i32, y: i32, size: i32) -> Self {
        Self {
            left: x - size / 2,
            top: y - size / 2,
            size,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.left + self.size / 2, self.top + self.size / 2)
    }
}

/// A borderless, topmost, click-through window that shows one ripple.
///
/// Calls are best-effort: implementations log failures and carry on.
pub trait OverlaySurface {
    /// Move and resize the window.
    fn place(&mut self, placement: Placement);
    fn show(&mut self);
    fn hide(&mut self);
    /// Paint one frame, centered in the window.
    fn render(&mut self, frame: &RippleFrame);
    /// Start (or restart) the periodic tick.
    fn start_ticks(&mut self, interval_ms: u32);
    fn stop_ticks(&mut self);
}
