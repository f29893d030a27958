//! RGB color with three `f32` components.
//!
//! [`Color`] is the working type for shading and compositing math. Its
//! components are unconstrained: they may be negative, exceed 1.0, or be
//! non-finite until explicitly clamped.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::Color;
//!
//! let c = Color::new(0.5, 0.25, 1.5);
//! let lit = c * 2.0 + Color::splat(0.1);
//! let display = lit.clamp01().linear_to_srgb();
//! assert!(display.max() <= 1.0);
//! ```

use crate::channel::{REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R};
use crate::channel::{REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use tint_transfer::srgb;

/// RGB color with 3 float components.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B]`. Component access by
/// index goes through [`Index`] or [`Color::get`], never through the layout.
///
/// # Example
///
/// ```rust
/// use tint_core::Color;
///
/// let c = Color::new(1.0, 2.0, 3.0);
/// assert_eq!(c[1], 2.0);
/// assert_eq!(2.0 * c, Color::new(2.0, 4.0, 6.0));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Color {
    /// Red channel value.
    pub r: f32,
    /// Green channel value.
    pub g: f32,
    /// Blue channel value.
    pub b: f32,
}

impl Color {
    /// Number of stored components.
    pub const COMPONENTS: usize = 3;

    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Sets all three components.
    #[inline]
    pub fn set(&mut self, r: f32, g: f32, b: f32) {
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
    ///
    /// Fails with [`Error::SliceLength`] if `out` is shorter than 3.
    pub fn copy_to(self, out: &mut [f32]) -> Result<()> {
        if out.len() < Self::COMPONENTS {
            return Err(Error::slice_length(Self::COMPONENTS, out.len()));
        }
        out[..Self::COMPONENTS].copy_from_slice(&self.to_array());
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Gray-scale queries
    // ------------------------------------------------------------------------

    /// Sum of the components.
    #[inline]
    pub fn sum(self) -> f32 {
        self.r + self.g + self.b
    }

    /// Average of the components.
    #[inline]
    pub fn gray(self) -> f32 {
        self.sum() / 3.0
    }

    /// Luma with Rec.601 weights: `0.299*R + 0.587*G + 0.114*B`.
    #[inline]
    pub fn luma1(self) -> f32 {
        REC601_LUMA_R * self.r + REC601_LUMA_G * self.g + REC601_LUMA_B * self.b
    }

    /// Luma with Rec.709 weights: `0.2126*R + 0.7152*G + 0.0722*B`.
    #[inline]
    pub fn luma2(self) -> f32 {
        REC709_LUMA_R * self.r + REC709_LUMA_G * self.g + REC709_LUMA_B * self.b
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    // ------------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------------

    /// Returns true if any component is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.r < 0.0 || self.g < 0.0 || self.b < 0.0
    }

    /// Returns true if all components are exactly zero.
    #[inline]
    pub fn is_black(self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    // ------------------------------------------------------------------------
    // Transfer functions
    // ------------------------------------------------------------------------

    /// Encodes linear RGB to sRGB.
    #[inline]
    pub fn linear_to_srgb(self) -> Self {
        self.applied(srgb::oetf)
    }

    /// Decodes sRGB to linear RGB.
    #[inline]
    pub fn srgb_to_linear(self) -> Self {
        self.applied(srgb::eotf)
    }

    // ------------------------------------------------------------------------
    // Elementwise application
    // ------------------------------------------------------------------------

    /// Replaces each component with `f(component)`.
    #[inline]
    pub fn apply<F: Fn(f32) -> f32>(&mut self, f: F) {
        self.r = f(self.r);
        self.g = f(self.g);
        self.b = f(self.b);
    }

    /// Returns a copy with `f` applied to each component.
    #[inline]
    pub fn applied<F: Fn(f32) -> f32>(mut self, f: F) -> Self {
        self.apply(f);
        self
    }

    // ------------------------------------------------------------------------
    // Limits
    // ------------------------------------------------------------------------

    /// Raises every component to at least `min`.
    #[inline]
    pub fn clamp_min(self, min: f32) -> Self {
        self.applied(|v| v.max(min))
    }

    /// Lowers every component to at most `max`.
    #[inline]
    pub fn clamp_max(self, max: f32) -> Self {
        self.applied(|v| v.min(max))
    }

    /// Clamps every component to `[min, max]`.
    ///
    /// Applies `clamp_min` then `clamp_max`, so an inverted range resolves to `max`.
    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        self.clamp_min(min).clamp_max(max)
    }

    /// Clamps every component to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.applied(f32::abs)
    }

    // ------------------------------------------------------------------------
    // Checked access
    // ------------------------------------------------------------------------

    /// Returns component `i` (r=0, g=1, b=2).
    pub fn get(&self, i: usize) -> Result<f32> {
        match i {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }

    /// Returns a mutable reference to component `i`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut f32> {
        match i {
            0 => Ok(&mut self.r),
            1 => Ok(&mut self.g),
            2 => Ok(&mut self.b),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

// Indexing
impl Index<usize> for Color {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Color index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Color {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Color index out of bounds: {}", i),
        }
    }
}

// -Color
impl Neg for Color {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.r, -self.g, -self.b)
    }
}

// Color + Color
impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

// Color - Color
impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

// Color * Color (component-wise)
impl Mul for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

// Color / Color (component-wise)
impl Div for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.r / rhs.r, self.g / rhs.g, self.b / rhs.b)
    }
}

// Color + f32
impl Add<f32> for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        Self::new(self.r + rhs, self.g + rhs, self.b + rhs)
    }
}

// Color - f32
impl Sub<f32> for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        Self::new(self.r - rhs, self.g - rhs, self.b - rhs)
    }
}

// Color * f32
impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

// Color / f32
impl Div<f32> for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

// f32 + Color
impl Add<Color> for f32 {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        rhs + self
    }
}

// f32 - Color
impl Sub<Color> for f32 {
    type Output = Color;

    #[inline]
    fn sub(self, rhs: Color) -> Color {
        -(rhs - self)
    }
}

// f32 * Color
impl Mul<Color> for f32 {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

// f32 / Color
impl Div<Color> for f32 {
    type Output = Color;

    #[inline]
    fn div(self, rhs: Color) -> Color {
        Color::new(self / rhs.r, self / rhs.g, self / rhs.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Color {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Color {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Color {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl AddAssign<f32> for Color {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign<f32> for Color {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Color {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Color {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color> for [f32; 3] {
    #[inline]
    fn from(c: Color) -> [f32; 3] {
        c.to_array()
    }
}

impl TryFrom<&[f32]> for Color {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self> {
        match *s {
            [r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(Error::slice_length(Self::COMPONENTS, s.len())),
        }
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec3> for Color {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<Color> for glam::Vec3 {
    #[inline]
    fn from(c: Color) -> glam::Vec3 {
        glam::Vec3::new(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_color_new() {
        let c = Color::new(1.0, 2.0, 3.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 2.0);
        assert_eq!(c.b, 3.0);
        assert_eq!(Color::splat(0.5), Color::new(0.5, 0.5, 0.5));
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_color_setters() {
        let mut c = Color::BLACK;
        c.set(0.1, 0.2, 0.3);
        assert_eq!(c, Color::new(0.1, 0.2, 0.3));
        c.set_white();
        assert_eq!(c, Color::WHITE);
        c.set_black();
        assert!(c.is_black());
    }

    #[test]
    fn test_color_identities() {
        let c = Color::new(1.0, 2.0, 3.0);
        assert_eq!(c + Color::BLACK, c);
        assert_eq!(c * 1.0, c);
        assert_eq!(c - c, Color::BLACK);
        assert_eq!(c / 1.0, c);
    }

    #[test]
    fn test_color_scalar_commutes() {
        let c = Color::new(1.0, 2.0, 3.0);
        assert_eq!(2.0 * c, c * 2.0);
        assert_eq!(c * 2.0, Color::new(2.0, 4.0, 6.0));
        assert_eq!(1.0 + c, c + 1.0);
    }

    #[test]
    fn test_color_scalar_lhs() {
        let c = Color::new(1.0, 2.0, 4.0);
        assert_eq!(10.0 - c, Color::new(9.0, 8.0, 6.0));
        assert_eq!(4.0 / c, Color::new(4.0, 2.0, 1.0));
    }

    #[test]
    fn test_color_componentwise() {
        let a = Color::new(1.0, 2.0, 3.0);
        let b = Color::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Color::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Color::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Color::new(4.0, 10.0, 18.0));
        assert_eq!(b / Color::new(2.0, 5.0, 3.0), Color::new(2.0, 1.0, 2.0));
        assert_eq!(-a, Color::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_color_assign_ops() {
        let mut c = Color::new(1.0, 2.0, 3.0);
        c += Color::splat(1.0);
        assert_eq!(c, Color::new(2.0, 3.0, 4.0));
        c -= 1.0;
        assert_eq!(c, Color::new(1.0, 2.0, 3.0));
        c *= 2.0;
        assert_eq!(c, Color::new(2.0, 4.0, 6.0));
        c /= Color::new(2.0, 4.0, 6.0);
        assert_eq!(c, Color::WHITE);
        c *= Color::new(3.0, 2.0, 1.0);
        c -= Color::new(1.0, 1.0, 1.0);
        c /= 2.0;
        c += 0.5;
        assert_eq!(c, Color::new(1.5, 1.0, 0.5));
    }

    #[test]
    fn test_color_queries() {
        let c = Color::new(0.2, 0.4, 0.9);
        assert_abs_diff_eq!(c.sum(), 1.5, epsilon = 1e-6);
        assert_abs_diff_eq!(c.gray(), 0.5, epsilon = 1e-6);
        assert_eq!(c.min(), 0.2);
        assert_eq!(c.max(), 0.9);
        assert_eq!(Color::WHITE.gray(), 1.0);
        assert_abs_diff_eq!(Color::WHITE.luma1(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Color::WHITE.luma2(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Color::new(1.0, 0.0, 0.0).luma1(), 0.299, epsilon = 1e-7);
        assert_abs_diff_eq!(Color::new(0.0, 1.0, 0.0).luma2(), 0.7152, epsilon = 1e-7);
    }

    #[test]
    fn test_color_predicates() {
        assert!(Color::BLACK.is_black());
        assert!(!Color::new(0.0, 0.0, 1e-9).is_black());
        assert!(Color::new(-1.0, 0.0, 0.0).is_negative());
        assert!(!Color::WHITE.is_negative());
        assert!(!Color::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Color::new(0.0, f32::INFINITY, 0.0).is_finite());
        assert!(Color::WHITE.is_finite());
    }

    #[test]
    fn test_color_nan_equality() {
        let c = Color::new(f32::NAN, 0.0, 0.0);
        assert_ne!(c, c);
    }

    #[test]
    fn test_color_clamp() {
        let c = Color::new(-1.0, 0.5, 2.0);
        assert_eq!(c.clamp01(), Color::new(0.0, 0.5, 1.0));
        assert_eq!(c.clamp_min(0.0), Color::new(0.0, 0.5, 2.0));
        assert_eq!(c.clamp_max(1.0), Color::new(-1.0, 0.5, 1.0));
        assert_eq!(c.clamp(-0.5, 0.75), Color::new(-0.5, 0.5, 0.75));
        assert_eq!(c.abs(), Color::new(1.0, 0.5, 2.0));
    }

    #[test]
    fn test_color_apply() {
        let mut c = Color::new(1.0, 4.0, 9.0);
        let roots = c.applied(f32::sqrt);
        assert_eq!(roots, Color::new(1.0, 2.0, 3.0));
        // applied leaves the original untouched
        assert_eq!(c, Color::new(1.0, 4.0, 9.0));
        c.apply(|v| v + 1.0);
        assert_eq!(c, Color::new(2.0, 5.0, 10.0));
    }

    #[test]
    fn test_color_srgb() {
        let lin = Color::new(0.0, 0.18, 1.0);
        let enc = lin.linear_to_srgb();
        assert_eq!(enc.r, 0.0);
        assert_abs_diff_eq!(enc.g, 0.461362, epsilon = 1e-5);
        let back = enc.srgb_to_linear();
        assert_abs_diff_eq!(back.g, 0.18, epsilon = 1e-5);
        assert_abs_diff_eq!(back.b, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_color_index() {
        let mut c = Color::new(1.0, 2.0, 3.0);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 2.0);
        assert_eq!(c[2], 3.0);
        c[2] = 7.0;
        assert_eq!(c.b, 7.0);
        assert_eq!(c.get(1), Ok(2.0));
        assert_eq!(c.get(3), Err(Error::out_of_range(3, 3)));
        *c.get_mut(0).unwrap() = 5.0;
        assert_eq!(c.r, 5.0);
        assert!(c.get_mut(9).is_err());
    }

    #[test]
    #[should_panic(expected = "Color index out of bounds")]
    fn test_color_index_panics() {
        let c = Color::WHITE;
        let _ = c[3];
    }

    #[test]
    fn test_color_slices() {
        let c = Color::try_from(&[0.1f32, 0.2, 0.3][..]).unwrap();
        assert_eq!(c, Color::new(0.1, 0.2, 0.3));
        assert_eq!(
            Color::try_from(&[0.1f32, 0.2][..]),
            Err(Error::slice_length(3, 2))
        );

        let mut out = [0.0f32; 4];
        c.copy_to(&mut out).unwrap();
        assert_eq!(out, [0.1, 0.2, 0.3, 0.0]);
        assert!(c.copy_to(&mut [0.0f32; 2]).is_err());

        let arr: [f32; 3] = c.into();
        assert_eq!(Color::from(arr), c);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::new(1.0, 0.5, 0.0).to_string(), "RGB(1, 0.5, 0)");
    }
}
