// File: crates/popchart-core/src/color.rs
// Summary: CSS-style RGBA color used by chart configs; converts to Skia colors for rendering.

use serde::{Serialize, Serializer};
use skia_safe as skia;
use std::fmt;

/// 8-bit RGB channels with a fractional alpha, matching the CSS `rgba()` notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0.0, 1.0]`.
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_skia(self) -> skia::Color {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        skia::Color::from_argb(alpha, self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// Serialized as a CSS color string so the config can be handed to web chart libraries as-is.
impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
