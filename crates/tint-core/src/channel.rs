//! Channel-level conversion rules and luma weights.
//!
//! Every place a float channel becomes a byte goes through [`float_to_byte`],
//! and every byte becomes a float through [`byte_to_float`]. Keeping the two
//! rules in one spot is what makes `float_to_byte(byte_to_float(b)) == b`
//! hold for all 256 byte values.
//!
//! # Used By
//!
//! - [`Color24`](crate::Color24), [`Color32`](crate::Color32) - construction from float colors
//! - [`Color`](crate::Color), [`ColorA`](crate::ColorA) - construction from byte colors
//! - `luma1` / `luma2` on the float types

use crate::error::{Error, Result};

// ============================================================================
// Luma Weights
// ============================================================================

/// Rec.601 luma coefficient for red channel.
///
/// Used in `Y = 0.299*R + 0.587*G + 0.114*B`
pub const REC601_LUMA_R: f32 = 0.299;

/// Rec.601 luma coefficient for green channel.
pub const REC601_LUMA_G: f32 = 0.587;

/// Rec.601 luma coefficient for blue channel.
pub const REC601_LUMA_B: f32 = 0.114;

/// Rec.709 luminance coefficient for red channel.
///
/// Used in `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.601 coefficients as an array [R, G, B].
pub const REC601_LUMA: [f32; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Rec.709 coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

// ============================================================================
// Byte <-> Float
// ============================================================================

/// Converts a float channel to a byte.
///
/// Scales by 255, adds 0.5 and truncates toward zero, then clamps into
/// `[0, 255]` before narrowing. Out-of-range and non-finite inputs never wrap:
/// NaN and `-inf` give 0, `+inf` gives 255.
///
/// # Example
///
/// ```
/// use tint_core::float_to_byte;
///
/// assert_eq!(float_to_byte(0.5), 128);
/// assert_eq!(float_to_byte(2.0), 255);
/// assert_eq!(float_to_byte(-1.0), 0);
/// ```
#[inline]
pub fn float_to_byte(v: f32) -> u8 {
    // `as i32` saturates and maps NaN to 0.
    clamp_int((v * 255.0 + 0.5) as i32)
}

/// Converts a byte channel to a float in `[0.0, 1.0]`.
///
/// Exact at the endpoints: 0 -> 0.0, 255 -> 1.0.
#[inline]
pub fn byte_to_float(b: u8) -> f32 {
    b as f32 / 255.0
}

#[inline]
fn clamp_int(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

// ============================================================================
// Hex Text
// ============================================================================

/// Parses `#rrggbb` / `#rrggbbaa` (leading `#` optional).
///
/// Returns the bytes and how many were given (3 or 4). A missing alpha is 255.
pub(crate) fn parse_hex(text: &str) -> Result<([u8; 4], usize)> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_hex(text));
    }
    let count = match digits.len() {
        6 => 3,
        8 => 4,
        _ => return Err(Error::invalid_hex(text)),
    };

    let mut out = [0, 0, 0, 255];
    for (i, slot) in out.iter_mut().take(count).enumerate() {
        let pair = &digits[i * 2..i * 2 + 2];
        *slot = u8::from_str_radix(pair, 16).map_err(|_| Error::invalid_hex(text))?;
    }
    Ok((out, count))
}
