//! Owned row-major pixel buffers
//!
//! Pixels are stored contiguously with `depth` byte channels each. The
//! accessors return `None` for coordinates outside the image instead of
//! panicking; callers are expected to resolve or reject coordinates first.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::coord::Coord;

/// Largest channel count an image may carry
pub const MAX_DEPTH: usize = 4;

/// Number of channels that take part in matching and copying
pub const MAX_INPUT_BYTES: usize = 3;

/// Row-major image with 1 to 4 byte channels per pixel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    depth: usize,
    data: Vec<u8>,
}

/// Byte length of a `width x height x depth` buffer
///
/// Validates the depth and rejects sizes whose length overflows `usize`.
fn buffer_len(width: usize, height: usize, depth: usize) -> Result<usize> {
    if !(1..=MAX_DEPTH).contains(&depth) {
        return Err(invalid_parameter(
            "depth",
            &depth,
            &"channel count must be between 1 and 4",
        ));
    }

    width
        .checked_mul(height)
        .and_then(|area| area.checked_mul(depth))
        .ok_or_else(|| {
            invalid_parameter(
                "data",
                &format!("{width}x{height}x{depth}"),
                &"buffer length overflows usize",
            )
        })
}

impl Image {
    /// Wrap an existing pixel buffer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `depth` is outside `1..=4`
    /// - `width * height * depth` overflows
    /// - The buffer length does not equal `width * height * depth`
    pub fn new(width: usize, height: usize, depth: usize, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height, depth)?;
        if data.len() != expected {
            return Err(invalid_parameter(
                "data",
                &data.len(),
                &format!("expected {expected} bytes for {width}x{height}x{depth}"),
            ));
        }

        Ok(Self {
            width,
            height,
            depth,
            data,
        })
    }

    /// Create a zero-filled image
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is outside `1..=4` or the buffer length
    /// overflows; nothing is allocated in that case
    pub fn blank(width: usize, height: usize, depth: usize) -> Result<Self> {
        let len = buffer_len(width, height, depth)?;
        Self::new(width, height, depth, vec![0; len])
    }

    /// Create an image where every pixel has the same channel values
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel has no channels or more than four, or
    /// if the buffer length overflows
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Result<Self> {
        buffer_len(width, height, pixel.len())?;
        let data = pixel.repeat(width * height);
        Self::new(width, height, pixel.len(), data)
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Channels per pixel
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of pixels
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Channels that participate in synthesis: the color channels without alpha
    pub fn input_bytes(&self) -> usize {
        self.depth.min(MAX_INPUT_BYTES)
    }

    /// Raw row-major channel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its channel data
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of the first channel of `point`
    pub fn offset(&self, point: Coord) -> Option<usize> {
        point
            .is_within(self.width, self.height)
            .then(|| (point.y as usize * self.width + point.x as usize) * self.depth)
    }

    /// Channels of the pixel at `point`
    pub fn pixel(&self, point: Coord) -> Option<&[u8]> {
        let start = self.offset(point)?;
        self.data.get(start..start + self.depth)
    }

    /// Mutable channels of the pixel at `point`
    pub fn pixel_mut(&mut self, point: Coord) -> Option<&mut [u8]> {
        let start = self.offset(point)?;
        self.data.get_mut(start..start + self.depth)
    }

    /// Iterate over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.depth)
    }
}
