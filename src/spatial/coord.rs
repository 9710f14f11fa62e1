//! Integer pixel coordinates and offsets

use std::ops::{Add, Sub};

/// Signed pixel coordinate, also used for relative offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance from the origin
    pub const fn norm_squared(self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        x * x + y * y
    }

    /// Check whether the coordinate lies in `[0, width) x [0, height)`
    pub const fn is_within(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }

    /// Row-major `[row, col]` index for ndarray lookups
    ///
    /// Only meaningful for coordinates already known to be non-negative.
    pub const fn index(self) -> [usize; 2] {
        [self.y as usize, self.x as usize]
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
