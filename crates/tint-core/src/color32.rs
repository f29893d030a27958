//! 32-bit RGBA color with four `u8` components.
//!
//! Unlike the float RGBA type, byte clamping and `min`/`max` cover alpha too.

use crate::channel::{byte_to_float, parse_hex};
use crate::color::Color;
use crate::color24::Color24;
use crate::color_a::ColorA;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// 32-bit RGBA color with 4 unsigned byte components.
///
/// # Example
///
/// ```rust
/// use tint_core::{Color24, Color32};
///
/// let c = Color32::from_color24(Color24::new(10, 20, 30), 128);
/// assert_eq!(c.to_hex(), "#0a141e80");
/// assert_eq!(c.rgb(), Color24::new(10, 20, 30));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Color32 {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
    /// Alpha channel value.
    pub a: u8,
}

impl Color32 {
    /// Number of stored components.
    pub const COMPONENTS: usize = 4;

    /// Opaque black (0, 0, 0, 255).
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Opaque white (255, 255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color (alpha = 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a gray color with the given alpha.
    #[inline]
    pub const fn splat(v: u8, a: u8) -> Self {
        Self::new(v, v, v, a)
    }

    /// Creates from a 24-bit color with the given alpha.
    #[inline]
    pub const fn from_color24(c: Color24, a: u8) -> Self {
        Self::new(c.r, c.g, c.b, a)
    }

    /// Black with the given alpha.
    #[inline]
    pub const fn black(alpha: u8) -> Self {
        Self::new(0, 0, 0, alpha)
    }

    /// White with the given alpha.
    #[inline]
    pub const fn white(alpha: u8) -> Self {
        Self::new(255, 255, 255, alpha)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [u8; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the RGB part, discarding alpha.
    #[inline]
    pub const fn rgb(self) -> Color24 {
        Color24::new(self.r, self.g, self.b)
    }

    /// Sets all four components.
    #[inline]
    pub fn set(&mut self, r: u8, g: u8, b: u8, a: u8) {
        *self = Self::new(r, g, b, a);
    }

    /// Sets RGB to zero and alpha as given.
    #[inline]
    pub fn set_black(&mut self, alpha: u8) {
        *self = Self::black(alpha);
    }

    /// Sets RGB to 255 and alpha as given.
    #[inline]
    pub fn set_white(&mut self, alpha: u8) {
        *self = Self::white(alpha);
    }

    /// Writes r, g, b, a into the first four slots of `out`.
    pub fn copy_to(self, out: &mut [u8]) -> Result<()> {
        if out.len() < Self::COMPONENTS {
            return Err(Error::slice_length(Self::COMPONENTS, out.len()));
        }
        out[..Self::COMPONENTS].copy_from_slice(&self.to_array());
        Ok(())
    }

    /// Converts the RGB part to a float color.
    #[inline]
    pub fn to_color(self) -> Color {
        self.rgb().to_color()
    }

    /// Converts to a float RGBA color, alpha included.
    #[inline]
    pub fn to_color_a(self) -> ColorA {
        ColorA::from_color(self.to_color(), byte_to_float(self.a))
    }

    /// Sum of r, g, b (0..=765). Alpha is not included.
    #[inline]
    pub fn sum(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    /// Average of r, g, b, computed as `(sum + 1) / 3`.
    #[inline]
    pub fn gray(self) -> u8 {
        ((self.sum() + 1) / 3) as u8
    }

    /// Smallest of all four components, alpha included.
    #[inline]
    pub fn min(self) -> u8 {
        self.r.min(self.g).min(self.b.min(self.a))
    }

    /// Largest of all four components, alpha included.
    #[inline]
    pub fn max(self) -> u8 {
        self.r.max(self.g).max(self.b.max(self.a))
    }

    /// Returns true if r, g and b are zero, whatever the alpha.
    #[inline]
    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Raises every component, alpha included, to at least `min`.
    #[inline]
    pub fn clamp_min(self, min: u8) -> Self {
        Self::new(self.r.max(min), self.g.max(min), self.b.max(min), self.a.max(min))
    }

    /// Lowers every component, alpha included, to at most `max`.
    #[inline]
    pub fn clamp_max(self, max: u8) -> Self {
        Self::new(self.r.min(max), self.g.min(max), self.b.min(max), self.a.min(max))
    }

    /// Clamps every component, alpha included, to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: u8, max: u8) -> Self {
        self.clamp_min(min).clamp_max(max)
    }

    /// Formats as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Returns component `i` (r=0, g=1, b=2, a=3).
    pub fn get(&self, i: usize) -> Result<u8> {
        match i {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            3 => Ok(self.a),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }

    /// Returns a mutable reference to component `i`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut u8> {
        match i {
            0 => Ok(&mut self.r),
            1 => Ok(&mut self.g),
            2 => Ok(&mut self.b),
            3 => Ok(&mut self.a),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }
}

impl Default for Color32 {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color32 {
    type Err = Error;

    /// Parses `#rrggbbaa`, or `#rrggbb` as opaque.
    fn from_str(s: &str) -> Result<Self> {
        let ([r, g, b, a], _) = parse_hex(s)?;
        Ok(Self::new(r, g, b, a))
    }
}

impl Index<usize> for Color32 {
    type Output = u8;

    #[inline]
    fn index(&self, i: usize) -> &u8 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("Color32 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Color32 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut u8 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("Color32 index out of bounds: {}", i),
        }
    }
}

impl From<[u8; 4]> for Color32 {
    #[inline]
    fn from(a: [u8; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color32> for [u8; 4] {
    #[inline]
    fn from(c: Color32) -> [u8; 4] {
        c.to_array()
    }
}

impl TryFrom<&[u8]> for Color32 {
    type Error = Error;

    fn try_from(s: &[u8]) -> Result<Self> {
        match *s {
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => Err(Error::slice_length(Self::COMPONENTS, s.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_constructors() {
        assert_eq!(Color32::default(), Color32::new(0, 0, 0, 255));
        assert_eq!(Color32::opaque(1, 2, 3).a, 255);
        assert_eq!(Color32::splat(9, 0), Color32::new(9, 9, 9, 0));
        assert_eq!(Color32::black(0), Color32::new(0, 0, 0, 0));
        assert_eq!(Color32::white(10), Color32::new(255, 255, 255, 10));
        assert_eq!(Color32::from_array([1, 2, 3, 4]).to_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_color32_setters() {
        let mut c = Color32::default();
        c.set(1, 2, 3, 4);
        assert_eq!(c, Color32::new(1, 2, 3, 4));
        c.set_white(100);
        assert_eq!(c, Color32::white(100));
        c.set_black(0);
        assert!(c.is_black());
        assert_eq!(c.a, 0);
    }

    #[test]
    fn test_color32_queries() {
        let c = Color32::new(10, 20, 30, 5);
        assert_eq!(c.sum(), 60);
        assert_eq!(c.gray(), 20);
        assert_eq!(c.min(), 5);
        assert_eq!(Color32::new(10, 20, 30, 250).max(), 250);
        assert_eq!(Color32::white(0).gray(), 255);
        assert!(Color32::black(128).is_black());
    }

    #[test]
    fn test_color32_clamp_includes_alpha() {
        let c = Color32::new(5, 100, 250, 0);
        assert_eq!(c.clamp_min(10), Color32::new(10, 100, 250, 10));
        assert_eq!(c.clamp_max(200), Color32::new(5, 100, 200, 0));
        assert_eq!(c.clamp(10, 200), Color32::new(10, 100, 200, 10));
    }

    #[test]
    fn test_color32_to_float() {
        assert_eq!(Color32::white(0).to_color(), Color::WHITE);
        assert_eq!(Color32::white(0).to_color_a(), ColorA::white(0.0));
        assert_eq!(Color32::BLACK.to_color_a(), ColorA::BLACK);
    }

    #[test]
    fn test_color32_hex() {
        let c = Color32::new(255, 128, 0, 64);
        assert_eq!(c.to_hex(), "#ff800040");
        assert_eq!("#ff800040".parse::<Color32>(), Ok(c));
        assert_eq!("#ff8000".parse::<Color32>(), Ok(Color32::opaque(255, 128, 0)));
        assert!(matches!(
            "nothex".parse::<Color32>(),
            Err(Error::InvalidHex(_))
        ));
    }

    #[test]
    fn test_color32_index() {
        let mut c = Color32::new(1, 2, 3, 4);
        assert_eq!(c[3], 4);
        c[3] = 8;
        assert_eq!(c.a, 8);
        assert_eq!(c.get(4), Err(Error::out_of_range(4, 4)));
        *c.get_mut(0).unwrap() = 0;
        assert_eq!(c.r, 0);
    }

    #[test]
    #[should_panic(expected = "Color32 index out of bounds")]
    fn test_color32_index_panics() {
        let _ = Color32::BLACK[4];
    }

    #[test]
    fn test_color32_slices() {
        assert_eq!(
            Color32::try_from(&[1u8, 2, 3, 4][..]),
            Ok(Color32::new(1, 2, 3, 4))
        );
        assert!(Color32::try_from(&[1u8, 2, 3][..]).is_err());
        let mut out = [0u8; 5];
        Color32::new(1, 2, 3, 4).copy_to(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_color32_display() {
        assert_eq!(Color32::new(1, 2, 3, 4).to_string(), "RGBA(1, 2, 3, 4)");
    }
}
