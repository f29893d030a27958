//! Integration tests for tint crates.
//!
//! End-to-end checks of the properties that span more than one type or
//! crate: the conversion graph, sRGB round trips, and the optional
//! integrations all enabled together.
