//! Ripple constants and validation limits.
//!
//! These are the fixed values the overlay is built from. Nothing here is
//! read from disk or the environment.

// === Timing ===

/// Length of one ripple in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Redraw rate while a ripple is running.
pub const DEFAULT_FPS: u32 = 60;

// === Geometry ===

/// Ring radius on the first frame, in pixels.
pub const DEFAULT_START_RADIUS: f64 = 12.0;

/// Ring radius on the last frame, in pixels.
pub const DEFAULT_END_RADIUS: f64 = 36.0;

/// Ring stroke width on the first frame, in pixels.
pub const DEFAULT_START_THICKNESS: f64 = 9.0;

/// Ring stroke width on the last frame, in pixels.
pub const DEFAULT_END_THICKNESS: f64 = 3.0;

/// Stroke width of the glow drawn under the ring, in pixels.
pub const DEFAULT_GLOW_WIDTH: f64 = 14.0;

/// The overlay window is this many times `end_radius + glow_width` wide.
pub const WINDOW_SIZE_FACTOR: f64 = 4.0;

// === Colors ===

/// Main ring color.
pub const DEFAULT_RING_COLOR: &str = "#26F7FF";

/// Glow color.
pub const DEFAULT_GLOW_COLOR: &str = "#8AFDFF";

/// Glow alpha on the first frame (80 out of 255).
pub const DEFAULT_GLOW_ALPHA_START: f64 = 80.0 / 255.0;

/// Glow alpha on the last frame.
pub const DEFAULT_GLOW_ALPHA_END: f64 = 0.0;

/// Ring opacity on the first frame.
pub const DEFAULT_OPACITY_START: f64 = 1.0;

/// Ring opacity on the last frame.
pub const DEFAULT_OPACITY_END: f64 = 0.0;

// === Sounds ===

/// Folder next to the executable that holds click sounds.
pub const SOUND_FOLDER_NAME: &str = "click_sounds";

/// Only files with this extension (any case) are played.
pub const SOUND_EXTENSION: &str = "wav";

// === Validation Limits ===

/// Minimum frame rate.
pub const MIN_FPS: u32 = 1;

/// Maximum frame rate.
pub const MAX_FPS: u32 = 240;

/// Minimum ripple duration in milliseconds.
pub const MIN_DURATION_MS: u32 = 1;

/// Maximum ripple duration in milliseconds.
pub const MAX_DURATION_MS: u32 = 10_000;

/// Largest radius, thickness or glow width accepted, in pixels.
pub const MAX_EXTENT: f64 = 1_000.0;
