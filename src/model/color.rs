//! Normalised RGBA color.

use crate::{clamp, color_to_hex, parse_hex_color};

/// Color with every channel in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex_color(s).map(|(r, g, b, a)| Self::new(r, g, b, a))
    }

    pub fn to_hex(&self) -> String {
        color_to_hex(self.r, self.g, self.b, self.a)
    }

    /// Same color with a different alpha (clamped).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: clamp(a, 0.0, 1.0),
            ..self
        }
    }

    /// Alpha as a byte, truncated like an integer pen alpha.
    pub fn alpha_byte(&self) -> u8 {
        (clamp(self.a, 0.0, 1.0) * 255.0) as u8
    }

    pub fn clamped(self) -> Self {
        Self {
            r: clamp(self.r, 0.0, 1.0),
            g: clamp(self.g, 0.0, 1.0),
            b: clamp(self.b, 0.0, 1.0),
            a: clamp(self.a, 0.0, 1.0),
        }
    }
}
