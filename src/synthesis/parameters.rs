//! Tunable synthesis parameters and their valid ranges

use crate::io::configuration::{
    CIRCLE_NEIGHBORHOOD_SIZES, DEFAULT_AUTISM, DEFAULT_MAGIC, DEFAULT_NEIGHBORS, DEFAULT_POLISH,
    DEFAULT_TRIES, MAX_MAGIC, MAX_NEIGHBORS, MAX_POLISH, MAX_SQUARE_RADIUS, MAX_TRIES,
};
use crate::spatial::boundary::Tiling;

/// Settings that stay fixed for a whole synthesis run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// Wrap the output horizontally
    pub h_tile: bool,
    /// Wrap the output vertically
    pub v_tile: bool,
    /// Sensitivity to outlier differences in `[0, 1]`; `0` demands exact matches
    pub autism: f64,
    /// Number of resolved neighbors compared per pixel
    pub neighbors: usize,
    /// Random corpus locations tried per pixel after back-references
    pub tries: usize,
    /// Extra shuffled passes over the output
    pub polish: usize,
    /// Decay numerator (over 256) of the revisits appended per pass
    pub magic: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h_tile: true,
            v_tile: true,
            autism: DEFAULT_AUTISM,
            neighbors: DEFAULT_NEIGHBORS,
            tries: DEFAULT_TRIES,
            polish: DEFAULT_POLISH,
            magic: DEFAULT_MAGIC,
        }
    }
}

impl Parameters {
    /// Clamp every field into its supported range
    ///
    /// A NaN `autism` is treated as zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        let autism = if self.autism.is_nan() {
            0.0
        } else {
            self.autism.clamp(0.0, 1.0)
        };

        Self {
            autism,
            neighbors: self.neighbors.min(MAX_NEIGHBORS),
            tries: self.tries.min(MAX_TRIES),
            polish: self.polish.min(MAX_POLISH),
            magic: self.magic.min(MAX_MAGIC),
            ..self
        }
    }

    /// Wrapping behavior of the output image
    pub const fn tiling(&self) -> Tiling {
        Tiling {
            horizontal: self.h_tile,
            vertical: self.v_tile,
        }
    }
}

/// Neighbor count of a filled `(2r + 1)²` square, radius clamped to its range
pub fn square_neighborhood(radius: usize) -> usize {
    let side = 2 * radius.min(MAX_SQUARE_RADIUS) + 1;
    side * side
}

/// Neighbor count of a filled disc of the given radius
///
/// The radius is clamped to `1..=128`; counts are the number of lattice
/// points within the disc centered on a lattice point.
pub fn circle_neighborhood(radius: usize) -> usize {
    let index = radius.clamp(1, CIRCLE_NEIGHBORHOOD_SIZES.len()) - 1;
    CIRCLE_NEIGHBORHOOD_SIZES
        .get(index)
        .copied()
        .unwrap_or(MAX_NEIGHBORS)
}
