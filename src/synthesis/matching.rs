//! Branch-and-bound scoring of corpus candidates

use crate::spatial::coord::Coord;
use crate::spatial::image::Image;
use crate::synthesis::difference::DiffTable;
use crate::synthesis::neighbors::Neighbor;

/// Best candidate found so far for the pixel being synthesized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestMatch {
    /// Lowest total cost seen, `u64::MAX` before any candidate completed
    pub score: u64,
    /// Corpus coordinate that achieved `score`
    pub point: Coord,
    /// Candidates scored since the last reset, pruned ones included
    pub evaluated: usize,
}

impl Default for BestMatch {
    fn default() -> Self {
        Self {
            score: u64::MAX,
            point: Coord::default(),
            evaluated: 0,
        }
    }
}

impl BestMatch {
    /// Forget the score for a new pixel
    ///
    /// The point is kept: a pixel that scores no candidate at all reuses
    /// the previous winner, which is always a valid corpus coordinate.
    pub const fn reset(&mut self) {
        self.score = u64::MAX;
        self.evaluated = 0;
    }

    /// Whether a zero-cost candidate has been found
    pub const fn is_perfect(&self) -> bool {
        self.score == 0
    }
}

/// Scores candidates against a neighbor list using a cost table
pub struct CandidateScorer<'a> {
    corpus: &'a Image,
    diff_table: &'a DiffTable,
    input_bytes: usize,
    missing_penalty: u64,
}

impl<'a> CandidateScorer<'a> {
    /// Create a scorer over `corpus` comparing `input_bytes` channels
    pub fn new(corpus: &'a Image, diff_table: &'a DiffTable, input_bytes: usize) -> Self {
        Self {
            corpus,
            diff_table,
            input_bytes,
            missing_penalty: u64::from(diff_table.missing_penalty(input_bytes)),
        }
    }

    /// Score `candidate` and record it in `best` if it wins
    ///
    /// Each neighbor is looked up at `candidate + offset` in the corpus,
    /// without wrapping. A lookup outside the corpus costs the missing
    /// penalty. The first neighbor's channel differences are never counted.
    /// Scoring stops as soon as the running sum reaches `best.score`.
    ///
    /// Returns `true` if `candidate` became the new best.
    pub fn try_candidate(
        &self,
        candidate: Coord,
        neighbors: &[Neighbor],
        best: &mut BestMatch,
    ) -> bool {
        best.evaluated += 1;
        let mut sum = 0_u64;

        for (index, neighbor) in neighbors.iter().enumerate() {
            match self.corpus.pixel(candidate + neighbor.offset) {
                None => sum += self.missing_penalty,
                Some(pixel) if index > 0 => {
                    sum += neighbor
                        .value
                        .iter()
                        .zip(pixel)
                        .take(self.input_bytes)
                        .map(|(&a, &b)| u64::from(self.diff_table.cost(a, b)))
                        .sum::<u64>();
                }
                Some(_) => {}
            }

            if sum >= best.score {
                return false;
            }
        }

        best.score = sum;
        best.point = candidate;
        true
    }
}
