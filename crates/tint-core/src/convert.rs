//! Conversions between the four color types.
//!
//! Every ordered pair has a [`From`] impl, so any type can be built from any
//! other. The rules are:
//!
//! | From -> To | Rule |
//! |------------|------|
//! | float -> float | r, g, b copied; alpha added as 1.0 or dropped |
//! | byte -> byte | r, g, b copied as-is; alpha added as 255 or dropped |
//! | byte -> float | each byte divided by 255 |
//! | float -> byte | [`float_to_byte`] (scale, round, clamp) |
//!
//! All conversions are total, non-finite floats included.
//!
//! ```rust
//! use tint_core::{Color, Color24, Color32, ColorA};
//!
//! let hdr = Color::new(2.0, 0.5, f32::NAN);
//! assert_eq!(Color24::from(hdr), Color24::new(255, 128, 0));
//!
//! let c32 = Color32::from(ColorA::new(0.0, 1.0, 0.0, 0.5));
//! assert_eq!(c32, Color32::new(0, 255, 0, 128));
//! ```

use crate::channel::float_to_byte;
use crate::color::Color;
use crate::color24::Color24;
use crate::color32::Color32;
use crate::color_a::ColorA;

impl ColorA {
    /// Converts a 24-bit color with the given float alpha.
    #[inline]
    pub fn from_color24(c: Color24, a: f32) -> Self {
        Self::from_color(c.to_color(), a)
    }
}

impl Color32 {
    /// Converts a float RGB color with the given float alpha.
    ///
    /// Alpha goes through the same rounding rule as the color channels.
    #[inline]
    pub fn from_color(c: Color, a: f32) -> Self {
        Self::new(
            float_to_byte(c.r),
            float_to_byte(c.g),
            float_to_byte(c.b),
            float_to_byte(a),
        )
    }
}

// ============================================================================
// Into Color
// ============================================================================

impl From<ColorA> for Color {
    #[inline]
    fn from(c: ColorA) -> Self {
        c.rgb()
    }
}

impl From<Color24> for Color {
    #[inline]
    fn from(c: Color24) -> Self {
        c.to_color()
    }
}

impl From<Color32> for Color {
    #[inline]
    fn from(c: Color32) -> Self {
        c.to_color()
    }
}

// ============================================================================
// Into ColorA
// ============================================================================

impl From<Color> for ColorA {
    #[inline]
    fn from(c: Color) -> Self {
        Self::from_color(c, 1.0)
    }
}

impl From<Color24> for ColorA {
    #[inline]
    fn from(c: Color24) -> Self {
        Self::from_color24(c, 1.0)
    }
}

impl From<Color32> for ColorA {
    #[inline]
    fn from(c: Color32) -> Self {
        c.to_color_a()
    }
}

// ============================================================================
// Into Color24
// ============================================================================

impl From<Color> for Color24 {
    #[inline]
    fn from(c: Color) -> Self {
        Self::new(float_to_byte(c.r), float_to_byte(c.g), float_to_byte(c.b))
    }
}

impl From<ColorA> for Color24 {
    #[inline]
    fn from(c: ColorA) -> Self {
        Self::from(c.rgb())
    }
}

impl From<Color32> for Color24 {
    #[inline]
    fn from(c: Color32) -> Self {
        c.rgb()
    }
}

// ============================================================================
// Into Color32
// ============================================================================

impl From<Color> for Color32 {
    #[inline]
    fn from(c: Color) -> Self {
        Self::from_color(c, 1.0)
    }
}

impl From<ColorA> for Color32 {
    #[inline]
    fn from(c: ColorA) -> Self {
        Self::from_color(c.rgb(), c.a)
    }
}

impl From<Color24> for Color32 {
    #[inline]
    fn from(c: Color24) -> Self {
        Self::from_color24(c, 255)
    }
}
