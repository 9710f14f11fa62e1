//! Robust per-channel difference costs
//!
//! Costs follow the negative log of a Cauchy distribution, `ln(x² + 1)`,
//! normalized so that the largest difference costs [`MAX_COST`]. Compared
//! with squared error, large outlier differences are discounted; `autism`
//! controls where that discount starts.

/// Cost of a maximal difference, and of any difference under a hard threshold
pub const MAX_COST: u32 = 65_536;

/// Number of table slots, covering differences `-256..256`
pub const TABLE_SIZE: usize = 512;

const CENTER: i32 = 256;

/// Precomputed cost for every signed byte difference
#[derive(Clone, Debug)]
pub struct DiffTable {
    costs: [u32; TABLE_SIZE],
}

fn neglog_cauchy(x: f64) -> f64 {
    x.mul_add(x, 1.0).ln()
}

impl DiffTable {
    /// Build the table for a given outlier sensitivity
    ///
    /// For `autism > 0` the cost of difference `d` is
    /// `round(65536 * f(d / 256 / autism) / f(1 / autism))`.
    /// For `autism <= 0` any non-zero difference costs [`MAX_COST`].
    pub fn new(autism: f64) -> Self {
        let mut costs = [0; TABLE_SIZE];

        for (slot, cost) in costs.iter_mut().enumerate() {
            let difference = slot as i32 - CENTER;
            *cost = if autism > 0.0 {
                let value = neglog_cauchy(f64::from(difference) / 256.0 / autism)
                    / neglog_cauchy(1.0 / autism)
                    * f64::from(MAX_COST);
                value.round() as u32
            } else if difference == 0 {
                0
            } else {
                MAX_COST
            };
        }

        Self { costs }
    }

    /// Cost of the difference `a - b` between two channel values
    pub fn cost(&self, a: u8, b: u8) -> u32 {
        self.cost_of(i32::from(a) - i32::from(b))
    }

    /// Cost of a signed difference in `-256..256`, zero outside that range
    pub fn cost_of(&self, difference: i32) -> u32 {
        usize::try_from(difference + CENTER)
            .ok()
            .and_then(|slot| self.costs.get(slot))
            .copied()
            .unwrap_or(0)
    }

    /// Penalty for a neighbor that falls outside the corpus
    ///
    /// Uses the `-256` slot rather than the `0` difference, once per
    /// compared channel.
    pub fn missing_penalty(&self, input_bytes: usize) -> u32 {
        self.cost_of(-CENTER) * input_bytes as u32
    }

    /// All table slots, indexed by `256 + difference`
    pub const fn as_slice(&self) -> &[u32; TABLE_SIZE] {
        &self.costs
    }
}
