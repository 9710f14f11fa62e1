//! Toroidal wrapping and clipping of coordinates against image bounds

use crate::spatial::coord::Coord;

/// Per-axis wrapping behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tiling {
    /// Wrap the x axis
    pub horizontal: bool,
    /// Wrap the y axis
    pub vertical: bool,
}

impl Tiling {
    /// Wrap on both axes
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };

    /// Wrap on neither axis
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };

    /// Map `point` into `[0, width) x [0, height)`
    ///
    /// A tiling axis is wrapped by repeatedly adding or subtracting its
    /// dimension. A non-tiling axis that is out of range makes the whole
    /// point unusable and yields `None`, whatever the other axis does.
    pub fn resolve(self, point: Coord, width: usize, height: usize) -> Option<Coord> {
        let x = wrap_axis(point.x, width, self.horizontal)?;
        let y = wrap_axis(point.y, height, self.vertical)?;
        Some(Coord::new(x, y))
    }
}

fn wrap_axis(value: i32, dimension: usize, tiles: bool) -> Option<i32> {
    let dimension = i32::try_from(dimension).ok().filter(|&d| d > 0)?;

    if (0..dimension).contains(&value) {
        Some(value)
    } else if tiles {
        // Same result as stepping by whole dimensions until in range
        Some(value.rem_euclid(dimension))
    } else {
        None
    }
}
