//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! The encoding side uses the fixed exponent [`OETF_EXPONENT`] (`0.41666`)
//! rather than an exact `1/2.4`. Downstream byte values depend on it, so it
//! must not be "corrected".
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Values outside the range are not clamped; negative
//!   inputs stay on the linear segment.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Linear-side breakpoint of the OETF. Inputs strictly below use the linear segment.
pub const LINEAR_BREAK: f32 = 0.0031308;

/// Encoded-side breakpoint of the EOTF. Inputs at or below use the linear segment.
pub const ENCODED_BREAK: f32 = 0.04045;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f32 = 12.92;

/// Scale of the power segment.
pub const POWER_SCALE: f32 = 1.055;

/// Offset of the power segment.
pub const POWER_OFFSET: f32 = 0.055;

/// Exponent used when encoding (approximation of `1/2.4`).
pub const OETF_EXPONENT: f32 = 0.41666;

/// Exponent used when decoding.
pub const EOTF_EXPONENT: f32 = 2.4;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= ENCODED_BREAK {
        v / LINEAR_SLOPE
    } else {
        ((v + POWER_OFFSET) / POWER_SCALE).powf(EOTF_EXPONENT)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L < 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^0.41666 - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < LINEAR_BREAK {
        l * LINEAR_SLOPE
    } else {
        l.powf(OETF_EXPONENT) * POWER_SCALE - POWER_OFFSET
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
