//! # tint-core
//!
//! Core color value types for graphics and image code.
//!
//! - [`Color`] - RGB, three `f32` components, unconstrained range
//! - [`ColorA`] - RGBA, four `f32` components (straight alpha)
//! - [`Color24`] - RGB, three `u8` components
//! - [`Color32`] - RGBA, four `u8` components
//!
//! All four are small `Copy` types with public fields and `#[repr(C)]`
//! layout. The float types carry the full set of arithmetic operators; the
//! byte types are for storage and carry none.
//!
//! ## Conversions
//!
//! Any type converts to any other through [`From`]. Bytes become floats by
//! dividing by 255; floats become bytes through [`float_to_byte`], which
//! rounds and clamps so that out-of-range values saturate instead of wrapping:
//!
//! ```
//! use tint_core::prelude::*;
//!
//! let linear = Color::new(0.18, 0.5, 2.0);
//! let display = Color24::from(linear.linear_to_srgb());
//! assert_eq!(display.b, 255);
//!
//! let back = Color::from(display).srgb_to_linear();
//! assert!((back.g - 0.5).abs() < 0.01);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tint-transfer (sRGB OETF/EOTF)
//!    ^
//!    |
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-cli
//!    +-- tint-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for all color types
//! - `bytemuck` - `Pod`/`Zeroable` for zero-copy buffer upload
//! - `glam` - conversions to and from `glam::Vec3` / `glam::Vec4`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod color;
pub mod color24;
pub mod color32;
pub mod color_a;
pub mod convert;
pub mod error;
pub mod math;

// Re-exports for convenience
pub use channel::{byte_to_float, float_to_byte, REC601_LUMA, REC709_LUMA};
pub use color::Color;
pub use color24::Color24;
pub use color32::Color32;
pub use color_a::ColorA;
pub use error::{Error, Result};
pub use math::FloatColor;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{byte_to_float, float_to_byte};
    pub use crate::color::Color;
    pub use crate::color24::Color24;
    pub use crate::color32::Color32;
    pub use crate::color_a::ColorA;
    pub use crate::error::{Error, Result};
    pub use crate::math::FloatColor;
}
