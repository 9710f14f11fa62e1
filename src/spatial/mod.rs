//! Pixel buffers and coordinate handling
//!
//! This module contains spatial-related functionality including:
//! - Coordinates and offsets
//! - Owned row-major image buffers
//! - Toroidal wrapping against image bounds
//! - Per-pixel resolution status

/// Toroidal wrapping and clipping against image bounds
pub mod boundary;
/// Signed pixel coordinates
pub mod coord;
/// Owned row-major pixel buffers
pub mod image;
/// Resolution state of output pixels
pub mod status;

pub use coord::Coord;
pub use image::Image;
