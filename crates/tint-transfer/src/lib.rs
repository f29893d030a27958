//! # tint-transfer
//!
//! Transfer functions (OETF/EOTF) for color encoding and decoding.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage, display, or transmission.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use tint_transfer::srgb;
//!
//! // Decode sRGB to linear
//! let linear = srgb::eotf(0.5);
//!
//! // Encode linear to sRGB
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-4);
//! ```
//!
//! # Used By
//!
//! - `tint-core` - `linear_to_srgb` / `srgb_to_linear` on the float color types
//! - `tint-cli` - `tint convert --to srgb|linear`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

// Re-export common functions
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
