//! Ripple configuration (pure Rust, no FFI).
//!
//! Built once at start-up from the constants in [`super::constants`].

use super::color::Rgba;
use super::constants::*;
use crate::clamp;

/// Visual and timing parameters of a ripple.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleConfig {
    /// Length of one ripple in milliseconds.
    pub duration_ms: u32,
    /// Timer rate while a ripple is running.
    pub fps: u32,
    /// Ring radius on the first frame, in pixels.
    pub start_radius: f64,
    /// Ring radius on the last frame, in pixels.
    pub end_radius: f64,
    /// Ring stroke on the first frame, in pixels.
    pub start_thickness: f64,
    /// Ring stroke on the last frame, in pixels.
    pub end_thickness: f64,
    /// Glow stroke, constant across frames.
    pub glow_width: f64,
    /// Ring color; its alpha is replaced by the animated opacity.
    pub ring_color: Rgba,
    /// Glow color; its alpha is replaced by the animated glow alpha.
    pub glow_color: Rgba,
    pub glow_alpha_start: f64,
    pub glow_alpha_end: f64,
    pub opacity_start: f64,
    pub opacity_end: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        let white = Rgba::new(1.0, 1.0, 1.0, 1.0);
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            fps: DEFAULT_FPS,
            start_radius: DEFAULT_START_RADIUS,
            end_radius: DEFAULT_END_RADIUS,
            start_thickness: DEFAULT_START_THICKNESS,
            end_thickness: DEFAULT_END_THICKNESS,
            glow_width: DEFAULT_GLOW_WIDTH,
            ring_color: Rgba::from_hex(DEFAULT_RING_COLOR).unwrap_or(white),
            glow_color: Rgba::from_hex(DEFAULT_GLOW_COLOR).unwrap_or(white),
            glow_alpha_start: DEFAULT_GLOW_ALPHA_START,
            glow_alpha_end: DEFAULT_GLOW_ALPHA_END,
            opacity_start: DEFAULT_OPACITY_START,
            opacity_end: DEFAULT_OPACITY_END,
        }
    }
}

impl RippleConfig {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.duration_ms = self.duration_ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS);
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        self.start_radius = clamp(self.start_radius, 0.0, MAX_EXTENT);
        self.end_radius = clamp(self.end_radius, 0.0, MAX_EXTENT);
        self.start_thickness = clamp(self.start_thickness, 0.0, MAX_EXTENT);
        self.end_thickness = clamp(self.end_thickness, 0.0, MAX_EXTENT);
        self.glow_width = clamp(self.glow_width, 0.0, MAX_EXTENT);
        self.ring_color = self.ring_color.clamped();
        self.glow_color = self.glow_color.clamped();
        self.glow_alpha_start = clamp(self.glow_alpha_start, 0.0, 1.0);
        self.glow_alpha_end = clamp(self.glow_alpha_end, 0.0, 1.0);
        self.opacity_start = clamp(self.opacity_start, 0.0, 1.0);
        self.opacity_end = clamp(self.opacity_end, 0.0, 1.0);
    }

    /// Number of timer ticks a ripple lasts. Never zero.
    pub fn total_frames(&self) -> u32 {
        let frames = u64::from(self.duration_ms) * u64::from(self.fps) / 1000;
        frames.clamp(1, u64::from(u32::MAX)) as u32
    }

    /// Timer period in whole milliseconds.
    pub fn tick_interval_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }

    /// Side of the square overlay window in pixels.
    pub fn window_size(&self) -> i32 {
        ((self.end_radius + self.glow_width) * WINDOW_SIZE_FACTOR) as i32
    }
}
