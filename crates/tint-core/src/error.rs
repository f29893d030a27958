//! Error types for tint-core operations.
//!
//! Arithmetic and conversions between the color types are total and never
//! fail. Errors only arise at the edges: checked component access, building
//! a color from a slice of the wrong length, and parsing hex text.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Color, Error};
//!
//! let c = Color::new(0.1, 0.2, 0.3);
//! assert!(matches!(c.get(5), Err(Error::ComponentOutOfRange { index: 5, len: 3 })));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when accessing or building color values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Component index is outside the stored components.
    ///
    /// Valid indices are `0..3` for RGB types and `0..4` for RGBA types.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Error;
    ///
    /// let err = Error::ComponentOutOfRange { index: 4, len: 4 };
    /// assert!(err.to_string().contains("4"));
    /// ```
    #[error("component index {index} out of range for {len}-component color")]
    ComponentOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of stored components
        len: usize,
    },

    /// Slice does not hold the number of components the color needs.
    #[error("slice length mismatch: expected {expected} components, got {actual}")]
    SliceLength {
        /// Required number of components
        expected: usize,
        /// Length of the supplied slice
        actual: usize,
    },

    /// Text is not a valid `#rrggbb` / `#rrggbbaa` color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

impl Error {
    /// Creates an [`Error::ComponentOutOfRange`] error.
    #[inline]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::ComponentOutOfRange { index, len }
    }

    /// Creates an [`Error::SliceLength`] error.
    #[inline]
    pub fn slice_length(expected: usize, actual: usize) -> Self {
        Self::SliceLength { expected, actual }
    }

    /// Creates an [`Error::InvalidHex`] error.
    #[inline]
    pub fn invalid_hex(text: impl Into<String>) -> Self {
        Self::InvalidHex(text.into())
    }

    /// Returns `true` if this is a component-index error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::ComponentOutOfRange { .. })
    }
}
