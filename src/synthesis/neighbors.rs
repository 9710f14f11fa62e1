//! Collection of already-resolved context around an output pixel

use crate::spatial::boundary::Tiling;
use crate::spatial::coord::Coord;
use crate::spatial::image::{Image, MAX_INPUT_BYTES};
use crate::spatial::status::StatusMap;
use crate::synthesis::offsets::OffsetTable;

/// A resolved output pixel near the pixel being synthesized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    /// Offset from the target pixel, as listed in the offset table
    pub offset: Coord,
    /// Output color at the time of gathering (first input channels only)
    pub value: [u8; MAX_INPUT_BYTES],
    /// Wrapped output coordinate, used to look the neighbor's status up
    pub position: Coord,
}

/// Reusable neighbor scratch buffer for one run
#[derive(Clone, Debug)]
pub struct NeighborSet {
    neighbors: Vec<Neighbor>,
    capacity: usize,
}

impl NeighborSet {
    /// Create an empty set that collects at most `capacity` neighbors
    pub fn new(capacity: usize) -> Self {
        Self {
            neighbors: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of neighbors collected per pixel
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Collect resolved neighbors of `target`, closest first
    ///
    /// Each offset is applied to `target` and resolved against the output
    /// bounds with `tiling`; unusable or valueless positions are skipped.
    /// Stops after `capacity` neighbors or when the offsets run out.
    pub fn gather(
        &mut self,
        target: Coord,
        offsets: &OffsetTable,
        tiling: Tiling,
        output: &Image,
        status: &StatusMap,
        input_bytes: usize,
    ) {
        self.neighbors.clear();
        if self.capacity == 0 {
            return;
        }

        for offset in offsets.iter() {
            let Some(position) = tiling.resolve(target + offset, output.width(), output.height())
            else {
                continue;
            };
            if !status.get(position).is_some_and(|s| s.has_value) {
                continue;
            }

            let mut value = [0; MAX_INPUT_BYTES];
            if let Some(pixel) = output.pixel(position) {
                for (dst, &src) in value.iter_mut().zip(pixel).take(input_bytes) {
                    *dst = src;
                }
            }

            self.neighbors.push(Neighbor {
                offset,
                value,
                position,
            });
            if self.neighbors.len() >= self.capacity {
                break;
            }
        }
    }

    /// Gathered neighbors in closest-first order
    pub fn as_slice(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Number of gathered neighbors
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether no neighbor was gathered
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
