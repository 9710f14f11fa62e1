use crate::spatial::coord::Coord;

/// Relative offsets ordered from the closest to the farthest
///
/// Covers every `(dx, dy)` that can align two points inside the overlap
/// of the corpus and output extents. Neighbor gathering walks it in order
/// so that the nearest known context is collected first.
#[derive(Clone, Debug)]
pub struct OffsetTable {
    offsets: Vec<Coord>,
}

impl OffsetTable {
    /// Build the table for the overlap of two images
    ///
    /// With `W = min(corpus_width, output_width)` and
    /// `H = min(corpus_height, output_height)`, every offset with
    /// `dx` in `(-W, W)` and `dy` in `(-H, H)` is produced, sorted by
    /// ascending `dx² + dy²`. Ties keep row-major generation order.
    /// All dimensions must fit in an `i32`.
    pub fn new(
        corpus_width: usize,
        corpus_height: usize,
        output_width: usize,
        output_height: usize,
    ) -> Self {
        let width = corpus_width.min(output_width) as i32;
        let height = corpus_height.min(output_height) as i32;

        let mut offsets = Vec::with_capacity(Self::expected_len(width, height));
        for y in (1 - height)..height {
            for x in (1 - width)..width {
                offsets.push(Coord::new(x, y));
            }
        }
        offsets.sort_by_key(|offset| offset.norm_squared());

        Self { offsets }
    }

    /// `(2W - 1)(2H - 1)`, zero for an empty overlap
    const fn expected_len(width: i32, height: i32) -> usize {
        if width <= 0 || height <= 0 {
            0
        } else {
            ((2 * width - 1) as usize) * ((2 * height - 1) as usize)
        }
    }

    /// Number of offsets
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the overlap was empty
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offsets in closest-first order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.offsets.iter().copied()
    }

    /// Offsets as a slice
    pub fn as_slice(&self) -> &[Coord] {
        &self.offsets
    }
}
