//! Visiting order of output pixels
//!
//! The order is consumed back to front. Every polish pass reshuffles the
//! one-per-pixel prefix and then appends geometrically shrinking prefixes
//! of the list, so the appended revisits are processed first and the later
//! a position sits in the shuffled prefix the less likely it is to be
//! revisited.

use crate::spatial::coord::Coord;
use rand::Rng;
use rand::seq::SliceRandom;

/// Row-major list of every coordinate in a `width x height` image
///
/// Both dimensions must fit in an `i32`.
pub fn row_major(width: usize, height: usize) -> Vec<Coord> {
    let mut points = Vec::with_capacity(width.saturating_mul(height));
    for y in 0..height {
        for x in 0..width {
            points.push(Coord::new(x as i32, y as i32));
        }
    }
    points
}

/// Append decaying duplicates of the list's prefix
///
/// Starting from `n = base`, repeatedly sets `n = n * magic / 256` and
/// appends the first `n` entries of the growing list, until `n` reaches
/// zero. `magic = 0` appends nothing.
pub fn append_revisits(points: &mut Vec<Coord>, base: usize, magic: usize) {
    if magic == 0 {
        return;
    }

    let mut count = base;
    while count > 0 {
        count = count.saturating_mul(magic) / 256;
        points.extend_from_within(..count.min(points.len()));
    }
}

/// Build the complete visiting order for an output image
///
/// Each of the `polish` passes shuffles the leading `width * height`
/// entries and appends revisits decaying from that same count, so the list
/// grows linearly with the number of passes. With `polish = 0` the list is
/// the unshuffled row-major order.
pub fn build<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    polish: usize,
    magic: usize,
    rng: &mut R,
) -> Vec<Coord> {
    let mut points = row_major(width, height);
    let area = points.len();

    for _ in 0..polish {
        if let Some(base) = points.get_mut(..area) {
            base.shuffle(rng);
        }
        append_revisits(&mut points, area, magic);
    }

    points
}
