//! Elementwise math on float colors.
//!
//! Each function applies the matching `f32` method to r, g and b through
//! [`FloatColor::applied`]. For [`ColorA`] the alpha channel passes through.
//!
//! ```rust
//! use tint_core::{math, Color, ColorA};
//!
//! let c = math::pow(Color::new(4.0, 9.0, 16.0), 0.5);
//! assert_eq!(c, Color::new(2.0, 3.0, 4.0));
//!
//! let ca = math::sqrt(ColorA::new(4.0, 9.0, 16.0, 0.25));
//! assert_eq!(ca, ColorA::new(2.0, 3.0, 4.0, 0.25));
//! ```

use crate::color::Color;
use crate::color_a::ColorA;

/// Float color types that support elementwise application.
pub trait FloatColor: Copy {
    /// Returns a copy with `f` applied to the color channels.
    fn applied<F: Fn(f32) -> f32>(self, f: F) -> Self;
}

impl FloatColor for Color {
    #[inline]
    fn applied<F: Fn(f32) -> f32>(self, f: F) -> Self {
        Color::applied(self, f)
    }
}

impl FloatColor for ColorA {
    #[inline]
    fn applied<F: Fn(f32) -> f32>(self, f: F) -> Self {
        ColorA::applied(self, f)
    }
}

/// Absolute value of each channel.
#[inline]
pub fn abs<C: FloatColor>(c: C) -> C {
    c.applied(f32::abs)
}

/// `e^x` of each channel.
#[inline]
pub fn exp<C: FloatColor>(c: C) -> C {
    c.applied(f32::exp)
}

/// `2^x` of each channel.
#[inline]
pub fn exp2<C: FloatColor>(c: C) -> C {
    c.applied(f32::exp2)
}

/// Natural logarithm of each channel.
#[inline]
pub fn ln<C: FloatColor>(c: C) -> C {
    c.applied(f32::ln)
}

/// Base-10 logarithm of each channel.
#[inline]
pub fn log10<C: FloatColor>(c: C) -> C {
    c.applied(f32::log10)
}

/// Base-2 logarithm of each channel.
#[inline]
pub fn log2<C: FloatColor>(c: C) -> C {
    c.applied(f32::log2)
}

/// Square root of each channel. Negative channels become NaN.
#[inline]
pub fn sqrt<C: FloatColor>(c: C) -> C {
    c.applied(f32::sqrt)
}

/// Raises each channel to `exponent`.
#[inline]
pub fn pow<C: FloatColor>(c: C, exponent: f32) -> C {
    c.applied(|v| v.powf(exponent))
}
