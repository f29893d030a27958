//! RGBA color with four `f32` components.
//!
//! Alpha is **not** premultiplied. Operators and equality treat alpha like any
//! other component, but the elementwise helpers ([`ColorA::apply`],
//! [`ColorA::applied`], clamping, `abs`, transfer functions and the
//! [`math`](crate::math) functions) only touch r, g, b and pass alpha through.

use crate::channel::{REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R};
use crate::channel::{REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
use crate::color::Color;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// RGBA color with 4 float components.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
///
/// # Example
///
/// ```rust
/// use tint_core::{Color, ColorA};
///
/// let c = ColorA::from_color(Color::new(1.0, 0.5, 0.25), 0.5);
/// assert_eq!(c.rgb(), Color::new(1.0, 0.5, 0.25));
///
/// // Clamping leaves alpha alone
/// let hot = ColorA::new(2.0, 0.5, -1.0, 3.0).clamp01();
/// assert_eq!(hot, ColorA::new(1.0, 0.5, 0.0, 3.0));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct ColorA {
    /// Red channel value.
    pub r: f32,
    /// Green channel value.
    pub g: f32,
    /// Blue channel value.
    pub b: f32,
    /// Alpha channel value.
    pub a: f32,
}

impl ColorA {
    /// Number of stored components.
    pub const COMPONENTS: usize = 4;

    /// Opaque black (0, 0, 0, 1).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white (1, 1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color (alpha = 1.0).
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a gray color with the given alpha.
    #[inline]
    pub const fn splat(v: f32, a: f32) -> Self {
        Self::new(v, v, v, a)
    }

    /// Creates from an RGB color with the given alpha.
    #[inline]
    pub const fn from_color(c: Color, a: f32) -> Self {
        Self::new(c.r, c.g, c.b, a)
    }

    /// Black with the given alpha.
    #[inline]
    pub const fn black(alpha: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, alpha)
    }

    /// White with the given alpha.
    #[inline]
    pub const fn white(alpha: f32) -> Self {
        Self::new(1.0, 1.0, 1.0, alpha)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the RGB part, discarding alpha.
    #[inline]
    pub const fn rgb(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }

    /// Sets all four components.
    #[inline]
    pub fn set(&mut self, r: f32, g: f32, b: f32, a: f32) {
        *self = Self::new(r, g, b, a);
    }

    /// Sets RGB to zero and alpha as given.
    #[inline]
    pub fn set_black(&mut self, alpha: f32) {
        *self = Self::black(alpha);
    }

    /// Sets RGB to one and alpha as given.
    #[inline]
    pub fn set_white(&mut self, alpha: f32) {
        *self = Self::white(alpha);
    }

    /// Writes r, g, b, a into the first four slots of `out`.
    pub fn copy_to(self, out: &mut [f32]) -> Result<()> {
        if out.len() < Self::COMPONENTS {
            return Err(Error::slice_length(Self::COMPONENTS, out.len()));
        }
        out[..Self::COMPONENTS].copy_from_slice(&self.to_array());
        Ok(())
    }

    /// Sum of r, g, b. Alpha is not included.
    #[inline]
    pub fn sum(self) -> f32 {
        self.r + self.g + self.b
    }

    /// Average of r, g, b.
    #[inline]
    pub fn gray(self) -> f32 {
        self.sum() / 3.0
    }

    /// Rec.601 luma of the RGB part.
    #[inline]
    pub fn luma1(self) -> f32 {
        REC601_LUMA_R * self.r + REC601_LUMA_G * self.g + REC601_LUMA_B * self.b
    }

    /// Rec.709 luma of the RGB part.
    #[inline]
    pub fn luma2(self) -> f32 {
        REC709_LUMA_R * self.r + REC709_LUMA_G * self.g + REC709_LUMA_B * self.b
    }

    /// Smallest of all four components, alpha included.
    #[inline]
    pub fn min(self) -> f32 {
        self.r.min(self.g).min(self.b.min(self.a))
    }

    /// Largest of all four components, alpha included.
    #[inline]
    pub fn max(self) -> f32 {
        self.r.max(self.g).max(self.b.max(self.a))
    }

    /// Returns true if any component, alpha included, is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.r < 0.0 || self.g < 0.0 || self.b < 0.0 || self.a < 0.0
    }

    /// Returns true if r, g and b are exactly zero, whatever the alpha.
    #[inline]
    pub fn is_black(self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Returns true if all four components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Encodes linear RGB to sRGB, keeping alpha.
    #[inline]
    pub fn linear_to_srgb(self) -> Self {
        Self::from_color(self.rgb().linear_to_srgb(), self.a)
    }

    /// Decodes sRGB to linear RGB, keeping alpha.
    #[inline]
    pub fn srgb_to_linear(self) -> Self {
        Self::from_color(self.rgb().srgb_to_linear(), self.a)
    }

    /// Replaces r, g and b with `f(component)`. Alpha is untouched.
    #[inline]
    pub fn apply<F: Fn(f32) -> f32>(&mut self, f: F) {
        self.r = f(self.r);
        self.g = f(self.g);
        self.b = f(self.b);
    }

    /// Returns a copy with `f` applied to r, g and b.
    #[inline]
    pub fn applied<F: Fn(f32) -> f32>(mut self, f: F) -> Self {
        self.apply(f);
        self
    }

    /// Returns a copy with `f` applied to all four channels, alpha included.
    #[inline]
    pub fn map<F: Fn(f32) -> f32>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }

    /// Raises r, g, b to at least `min`.
    #[inline]
    pub fn clamp_min(self, min: f32) -> Self {
        self.applied(|v| v.max(min))
    }

    /// Lowers r, g, b to at most `max`.
    #[inline]
    pub fn clamp_max(self, max: f32) -> Self {
        self.applied(|v| v.min(max))
    }

    /// Clamps r, g, b to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        self.clamp_min(min).clamp_max(max)
    }

    /// Clamps r, g, b to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    /// Absolute value of r, g, b.
    #[inline]
    pub fn abs(self) -> Self {
        self.applied(f32::abs)
    }

    /// Returns component `i` (r=0, g=1, b=2, a=3).
    pub fn get(&self, i: usize) -> Result<f32> {
        match i {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            3 => Ok(self.a),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }

    /// Returns a mutable reference to component `i`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut f32> {
        match i {
            0 => Ok(&mut self.r),
            1 => Ok(&mut self.g),
            2 => Ok(&mut self.b),
            3 => Ok(&mut self.a),
            _ => Err(Error::out_of_range(i, Self::COMPONENTS)),
        }
    }
}

impl Default for ColorA {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for ColorA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Index<usize> for ColorA {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("ColorA index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for ColorA {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("ColorA index out of bounds: {}", i),
        }
    }
}

impl Neg for ColorA {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.r, -self.g, -self.b, -self.a)
    }
}

impl Add for ColorA {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Sub for ColorA {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl Mul for ColorA {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl Div for ColorA {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.r / rhs.r, self.g / rhs.g, self.b / rhs.b, self.a / rhs.a)
    }
}

impl Add<f32> for ColorA {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        Self::new(self.r + rhs, self.g + rhs, self.b + rhs, self.a + rhs)
    }
}

impl Sub<f32> for ColorA {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        Self::new(self.r - rhs, self.g - rhs, self.b - rhs, self.a - rhs)
    }
}

impl Mul<f32> for ColorA {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Div<f32> for ColorA {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}

impl Add<ColorA> for f32 {
    type Output = ColorA;

    #[inline]
    fn add(self, rhs: ColorA) -> ColorA {
        rhs + self
    }
}

impl Sub<ColorA> for f32 {
    type Output = ColorA;

    #[inline]
    fn sub(self, rhs: ColorA) -> ColorA {
        -(rhs - self)
    }
}

impl Mul<ColorA> for f32 {
    type Output = ColorA;

    #[inline]
    fn mul(self, rhs: ColorA) -> ColorA {
        rhs * self
    }
}

impl Div<ColorA> for f32 {
    type Output = ColorA;

    #[inline]
    fn div(self, rhs: ColorA) -> ColorA {
        ColorA::new(self / rhs.r, self / rhs.g, self / rhs.b, self / rhs.a)
    }
}

impl AddAssign for ColorA {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ColorA {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for ColorA {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for ColorA {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl AddAssign<f32> for ColorA {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign<f32> for ColorA {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for ColorA {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for ColorA {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 4]> for ColorA {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<ColorA> for [f32; 4] {
    #[inline]
    fn from(c: ColorA) -> [f32; 4] {
        c.to_array()
    }
}

impl TryFrom<&[f32]> for ColorA {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self> {
        match *s {
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => Err(Error::slice_length(Self::COMPONENTS, s.len())),
        }
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec4> for ColorA {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(feature = "glam")]
impl From<ColorA> for glam::Vec4 {
    #[inline]
    fn from(c: ColorA) -> glam::Vec4 {
        glam::Vec4::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_color_a_constructors() {
        assert_eq!(ColorA::default(), ColorA::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(ColorA::opaque(0.1, 0.2, 0.3).a, 1.0);
        assert_eq!(ColorA::splat(0.5, 0.25), ColorA::new(0.5, 0.5, 0.5, 0.25));
        assert_eq!(ColorA::black(0.0), ColorA::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(ColorA::white(0.5), ColorA::new(1.0, 1.0, 1.0, 0.5));
        assert_eq!(ColorA::WHITE, ColorA::white(1.0));
    }

    #[test]
    fn test_color_a_setters() {
        let mut c = ColorA::default();
        c.set(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
        c.set_white(0.5);
        assert_eq!(c, ColorA::white(0.5));
        c.set_black(0.25);
        assert!(c.is_black());
        assert_eq!(c.a, 0.25);
    }

    #[test]
    fn test_color_a_ops_include_alpha() {
        let a = ColorA::new(1.0, 2.0, 3.0, 4.0);
        let b = ColorA::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a + b, ColorA::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a - b, ColorA::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(a * 2.0, ColorA::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, ColorA::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(a / a, ColorA::white(1.0));
        assert_eq!(a * b, a);
        assert_eq!(-a, ColorA::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(5.0 - a, ColorA::new(4.0, 3.0, 2.0, 1.0));
        assert_eq!(1.0 + a, a + 1.0);
        assert_eq!(4.0 / a, ColorA::new(4.0, 2.0, 4.0 / 3.0, 1.0));
    }

    #[test]
    fn test_color_a_assign_ops() {
        let mut c = ColorA::new(1.0, 2.0, 3.0, 4.0);
        c += 1.0;
        assert_eq!(c, ColorA::new(2.0, 3.0, 4.0, 5.0));
        c -= ColorA::new(1.0, 1.0, 1.0, 1.0);
        c *= ColorA::new(2.0, 2.0, 2.0, 0.5);
        assert_eq!(c, ColorA::new(2.0, 4.0, 6.0, 2.0));
        c /= 2.0;
        assert_eq!(c, ColorA::new(1.0, 2.0, 3.0, 1.0));
        c /= ColorA::new(1.0, 2.0, 3.0, 1.0);
        c -= 0.5;
        c *= 4.0;
        c += ColorA::black(0.0);
        assert_eq!(c, ColorA::splat(2.0, 2.0));
    }

    #[test]
    fn test_color_a_queries() {
        let c = ColorA::new(0.3, 0.6, 0.9, 0.1);
        assert_abs_diff_eq!(c.sum(), 1.8, epsilon = 1e-6);
        assert_abs_diff_eq!(c.gray(), 0.6, epsilon = 1e-6);
        // Alpha participates in min/max only
        assert_eq!(c.min(), 0.1);
        assert_eq!(ColorA::new(0.3, 0.6, 0.9, 2.0).max(), 2.0);
        assert_abs_diff_eq!(ColorA::white(0.0).luma1(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ColorA::white(0.0).luma2(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_color_a_predicates() {
        assert!(ColorA::black(0.5).is_black());
        assert!(ColorA::new(0.0, 0.0, 0.0, -1.0).is_negative());
        assert!(!ColorA::opaque(0.0, 0.0, 0.0).is_negative());
        assert!(!ColorA::new(0.0, 0.0, 0.0, f32::NAN).is_finite());
        assert!(ColorA::WHITE.is_finite());
    }

    #[test]
    fn test_color_a_apply_skips_alpha() {
        let mut c = ColorA::new(1.0, 4.0, 9.0, 16.0);
        assert_eq!(c.applied(f32::sqrt), ColorA::new(1.0, 2.0, 3.0, 16.0));
        assert_eq!(c.map(f32::sqrt), ColorA::new(1.0, 2.0, 3.0, 4.0));
        c.apply(|v| -v);
        assert_eq!(c, ColorA::new(-1.0, -4.0, -9.0, 16.0));
        assert_eq!(c.abs(), ColorA::new(1.0, 4.0, 9.0, 16.0));
    }

    #[test]
    fn test_color_a_clamp_skips_alpha() {
        let c = ColorA::new(-1.0, 0.5, 2.0, -3.0);
        assert_eq!(c.clamp01(), ColorA::new(0.0, 0.5, 1.0, -3.0));
        assert_eq!(c.clamp_min(0.0).a, -3.0);
        assert_eq!(c.clamp_max(0.0), ColorA::new(-1.0, 0.0, 0.0, -3.0));
        assert_eq!(c.clamp(0.25, 0.75), ColorA::new(0.25, 0.5, 0.75, -3.0));
    }

    #[test]
    fn test_color_a_srgb_keeps_alpha() {
        let c = ColorA::new(0.18, 0.5, 1.0, 0.18);
        let enc = c.linear_to_srgb();
        assert_eq!(enc.a, 0.18);
        assert_eq!(enc.rgb(), c.rgb().linear_to_srgb());
        let back = enc.srgb_to_linear();
        assert_eq!(back.a, 0.18);
        assert_abs_diff_eq!(back.r, 0.18, epsilon = 1e-5);
    }

    #[test]
    fn test_color_a_index() {
        let mut c = ColorA::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(c[3], 4.0);
        c[3] = 0.5;
        assert_eq!(c.a, 0.5);
        assert_eq!(c.get(3), Ok(0.5));
        assert_eq!(c.get(4), Err(Error::out_of_range(4, 4)));
        *c.get_mut(2).unwrap() = 9.0;
        assert_eq!(c.b, 9.0);
    }

    #[test]
    #[should_panic(expected = "ColorA index out of bounds")]
    fn test_color_a_index_panics() {
        let mut c = ColorA::WHITE;
        c[4] = 1.0;
    }

    #[test]
    fn test_color_a_slices() {
        let c = ColorA::try_from(&[0.1f32, 0.2, 0.3, 0.4][..]).unwrap();
        assert_eq!(c, ColorA::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(
            ColorA::try_from(&[0.1f32, 0.2, 0.3][..]),
            Err(Error::slice_length(4, 3))
        );
        let mut out = [0.0f32; 3];
        assert_eq!(c.copy_to(&mut out), Err(Error::slice_length(4, 3)));
    }

    #[test]
    fn test_color_a_display() {
        assert_eq!(ColorA::new(1.0, 0.5, 0.0, 1.0).to_string(), "RGBA(1, 0.5, 0, 1)");
    }
}
