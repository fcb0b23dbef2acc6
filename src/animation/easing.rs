//! Easing curves.

/// Ease-out quintic: `1 - (1 - t)^5`.
///
/// Fast at the start, decelerating towards the end. `t` is clamped to
/// [0, 1] first.
pub fn ease_out_quint(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(5)
}

/// Linear interpolation from `start` to `end`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
