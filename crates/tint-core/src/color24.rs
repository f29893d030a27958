//! 24-bit RGB color with three `u8` components.
//!
//! Byte colors are storage types: they carry no arithmetic operators. Convert
//! to [`Color`] for math and back when done; the round trip through
//! [`float_to_byte`](crate::float_to_byte) is exact for every byte value.

use crate::channel::{byte_to_float, parse_hex};
use crate::color::Color;
use crate::color_a::ColorA;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// 24-bit RGB color with 3 unsigned byte components.
///
/// # Example
///
/// ```rust
/// use tint_core::Color24;
///
/// let c: Color24 = "#ff8000".parse().unwrap();
/// assert_eq!(c, Color24::new(255, 128, 0));
/// assert_eq!(c.sum(), 383);
/// assert_eq!(Color24::from(c.to_color()), c);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Color24 {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
}

impl Color24 {
    /// Number of stored components.
    pub const COMPONENTS: usize = 3;

    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all components set to `v`.
    #[inline]
    pub const fn splat(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [u8; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Sets all three components.
    #[inline]
    pub fn set(&mut self, r: u8, g: u8, b: u8) {
        *self = Self::new(r, g, b);
    }

    /// Sets the color to black.
    #[inline]
    pub fn set_black(&mut self) {
        *self = Self::BLACK;
    }

    /// Sets the color to white.
    #[inline]
    pub fn set_white(&mut self) {
        *self = Self::WHITE;
    }

    /// Writes r, g, b into the first three slots of `out`.
    pub fn copy_to(self, out: &mut [u8]) -> Result<()> {
        if out.len() < Self::COMPONENTS {
            return Err(Error::slice_length(Self::COMPONENTS, out.len()));
        }
        out[..Self::COMPONENTS].copy_from_slice(&self.to_array());
        Ok(())
    }

    /// Converts to a float color, each byte divided by 255.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::new(byte_to_float(self.r), byte_to_float(self.g), byte_to_float(self.b))
    }

    /// Converts to an opaque float RGBA color.
    #[inline]
    pub fn to_color_a(self) -> ColorA {
        ColorA::from_color(self.to_color(), 1.0)
    }

    /// Sum of the components (0..=765).
    #[inline]
    pub fn sum(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    /// Average of the components, computed as `(sum + 1) / 3`.
    #[inline]
    pub fn gray(self) -> u8 {
        ((self.sum() + 1) / 3) as u8
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Returns true if all components are zero.
    #[inline]
    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Raises every component to at least `min`.
    #[inline]
    pub fn clamp_min(self, min: u8) -> Self {
        Self::new(self.r.max(min), self.g.max(min), self.b.max(min))
    }

    /// Lowers every component to at most `max`.
    #[inline]
    pub fn clamp_max(self, max: u8) -> Self {
        Self::new(self.r.min(max), self.g.min(max), self.b.min(max))
    }

    /// Clamps every component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: u8, max: u8) -> Self {
        self.clamp_min(min).clamp_max(max)
    }

    /// Formats as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns component `i` (r=0, g=1, b=2).
    pub fn get(&self, i: usize) -> Result<u8> {
        match i {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }

    /// Returns a mutable reference to component `i`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut u8> {
        match i {
            0 => Ok(&mut self.r),
            1 => Ok(&mut self.g),
            2 => Ok(&mut self.b),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }
}

impl fmt::Display for Color24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color24 {
    type Err = Error;

    /// Parses `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        match parse_hex(s)? {
            ([r, g, b, _], 3) => Ok(Self::new(r, g, b)),
            _ => Err(Error::invalid_hex(s)),
        }
    }
}

impl Index<usize> for Color24 {
    type Output = u8;

    #[inline]
    fn index(&self, i: usize) -> &u8 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Color24 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Color24 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut u8 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Color24 index out of bounds: {}", i),
        }
    }
}

impl From<[u8; 3]> for Color24 {
    #[inline]
    fn from(a: [u8; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color24> for [u8; 3] {
    #[inline]
    fn from(c: Color24) -> [u8; 3] {
        c.to_array()
    }
}

impl TryFrom<&[u8]> for Color24 {
    type Error = Error;

    fn try_from(s: &[u8]) -> Result<Self> {
        match *s {
            [r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(Error::slice_length(Self::COMPONENTS, s.len())),
        }
    }
}
