//! Per-pixel resolution state of the output image

use crate::spatial::coord::Coord;
use ndarray::Array2;

/// Resolution record of a single output pixel
///
/// `has_value` is set when the pixel is first visited and never cleared.
/// `source` is only meaningful while `has_source` is true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status {
    /// The pixel has been visited and will carry a committed color
    pub has_value: bool,
    /// A corpus provenance coordinate has been recorded
    pub has_source: bool,
    /// Corpus coordinate whose color was last copied here
    pub source: Coord,
}

impl Status {
    /// Corpus provenance, if one has been recorded
    pub const fn source(&self) -> Option<Coord> {
        if self.has_source {
            Some(self.source)
        } else {
            None
        }
    }

    /// Whether the pixel has both a value and a provenance
    pub const fn is_resolved(&self) -> bool {
        self.has_value && self.has_source
    }
}

/// Status records for every output pixel, indexed by `[row, col]`
#[derive(Clone, Debug)]
pub struct StatusMap {
    records: Array2<Status>,
}

impl StatusMap {
    /// Create a map where every pixel is unresolved
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            records: Array2::default((height, width)),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.records.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.records.nrows()
    }

    /// Status of the pixel at `point`
    pub fn get(&self, point: Coord) -> Option<&Status> {
        if point.is_within(self.width(), self.height()) {
            self.records.get(point.index())
        } else {
            None
        }
    }

    /// Flag the pixel as carrying a value from now on
    pub fn mark_pending(&mut self, point: Coord) {
        if let Some(status) = self.get_mut(point) {
            status.has_value = true;
        }
    }

    /// Record the corpus provenance of a committed pixel
    pub fn mark_resolved(&mut self, point: Coord, source: Coord) {
        if let Some(status) = self.get_mut(point) {
            status.has_value = true;
            status.has_source = true;
            status.source = source;
        }
    }

    /// Iterate over all records in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        self.records.iter()
    }

    fn get_mut(&mut self, point: Coord) -> Option<&mut Status> {
        if point.is_within(self.width(), self.height()) {
            self.records.get_mut(point.index())
        } else {
            None
        }
    }
}
