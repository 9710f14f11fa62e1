use crate::io::error::{Result, invalid_dimensions, invalid_parameter};
use crate::spatial::coord::Coord;
use crate::spatial::image::Image;
use crate::spatial::status::{Status, StatusMap};
use crate::synthesis::cache::TriedMap;
use crate::synthesis::difference::DiffTable;
use crate::synthesis::matching::{BestMatch, CandidateScorer};
use crate::synthesis::neighbors::NeighborSet;
use crate::synthesis::offsets::OffsetTable;
use crate::synthesis::parameters::Parameters;
use crate::synthesis::schedule;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Outcome of synthesizing one scheduled pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitReport {
    /// Processing index of the visit; indices count down to zero
    pub step: usize,
    /// Output pixel that was (re)synthesized
    pub position: Coord,
    /// Corpus pixel copied into `position`
    pub source: Coord,
    /// Winning cost, `None` when no candidate was scored
    pub score: Option<u64>,
    /// Candidates scored, including those pruned early
    pub candidates: usize,
}

/// Run context for resynthesizing one output image from one corpus
///
/// Owns every per-run structure (status and tried maps, offset and cost
/// tables, neighbor scratch, visiting order, random generator) while the
/// corpus and output buffers stay with the caller. Pixels are processed
/// strictly in schedule order: each visit reads the status and colors
/// committed by all earlier visits.
pub struct Resynthesizer<'a> {
    corpus: &'a Image,
    output: &'a mut Image,
    parameters: Parameters,
    input_bytes: usize,
    offsets: OffsetTable,
    diff_table: DiffTable,
    status: StatusMap,
    tried: TriedMap,
    neighbors: NeighborSet,
    schedule: Vec<Coord>,
    remaining: usize,
    best: BestMatch,
    rng: StdRng,
}

impl<'a> Resynthesizer<'a> {
    /// Prepare a run that fills `output` with texture from `corpus`
    ///
    /// Parameters are clamped into their supported ranges. The same seed
    /// with the same inputs always produces the same output bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A corpus or output dimension does not fit in an `i32`
    /// - The corpus or output has zero width or height
    /// - The output has fewer channels than the corpus' color channels
    pub fn new(
        corpus: &'a Image,
        output: &'a mut Image,
        parameters: Parameters,
        seed: u64,
    ) -> Result<Self> {
        // Coordinates are i32 from here on
        for (parameter, value) in [
            ("corpus width", corpus.width()),
            ("corpus height", corpus.height()),
            ("output width", output.width()),
            ("output height", output.height()),
        ] {
            i32::try_from(value).map_err(|e| invalid_parameter(parameter, &value, &e))?;
        }

        if corpus.area() == 0 || output.area() == 0 {
            return Err(invalid_dimensions(
                (corpus.width(), corpus.height()),
                (output.width(), output.height()),
            ));
        }

        let input_bytes = corpus.input_bytes();
        if output.depth() < input_bytes {
            return Err(invalid_parameter(
                "output depth",
                &output.depth(),
                &format!("corpus matches on {input_bytes} channel(s)"),
            ));
        }

        let parameters = parameters.clamped();
        let mut rng = StdRng::seed_from_u64(seed);

        let schedule = schedule::build(
            output.width(),
            output.height(),
            parameters.polish,
            parameters.magic,
            &mut rng,
        );
        let offsets = OffsetTable::new(
            corpus.width(),
            corpus.height(),
            output.width(),
            output.height(),
        );

        debug!(
            "corpus {}x{}x{}, output {}x{}, {} offsets, {} visits, {:?}",
            corpus.width(),
            corpus.height(),
            corpus.depth(),
            output.width(),
            output.height(),
            offsets.len(),
            schedule.len(),
            parameters
        );

        Ok(Self {
            corpus,
            parameters,
            input_bytes,
            offsets,
            diff_table: DiffTable::new(parameters.autism),
            status: StatusMap::new(output.width(), output.height()),
            tried: TriedMap::new(corpus.width(), corpus.height()),
            neighbors: NeighborSet::new(parameters.neighbors),
            remaining: schedule.len(),
            schedule,
            best: BestMatch::default(),
            rng,
            output,
        })
    }

    /// Synthesize the next scheduled pixel
    ///
    /// Returns `None` once every scheduled visit has been processed.
    pub fn execute_visit(&mut self) -> Option<VisitReport> {
        let step = self.remaining.checked_sub(1)?;
        let position = *self.schedule.get(step)?;
        self.remaining = step;

        // Pixels visited from here on see this one as known context
        self.status.mark_pending(position);

        self.neighbors.gather(
            position,
            &self.offsets,
            self.parameters.tiling(),
            self.output,
            &self.status,
            self.input_bytes,
        );
        self.best.reset();

        let corpus = self.corpus;
        let scorer = CandidateScorer::new(corpus, &self.diff_table, self.input_bytes);
        let neighbors = self.neighbors.as_slice();

        // Extrapolate from where each resolved neighbor was copied from
        for neighbor in neighbors {
            if self.best.is_perfect() {
                break;
            }
            let Some(source) = self.status.get(neighbor.position).and_then(Status::source) else {
                continue;
            };
            let candidate = source - neighbor.offset;
            if !candidate.is_within(corpus.width(), corpus.height()) {
                continue;
            }
            if self.tried.claim(candidate, step) {
                scorer.try_candidate(candidate, neighbors, &mut self.best);
            }
        }

        for _ in 0..self.parameters.tries {
            if self.best.is_perfect() {
                break;
            }
            let index = self.rng.random_range(0..corpus.area());
            let candidate = Coord::new(
                (index % corpus.width()) as i32,
                (index / corpus.width()) as i32,
            );
            scorer.try_candidate(candidate, neighbors, &mut self.best);
        }

        let source = self.best.point;
        if let (Some(target), Some(pixel)) = (self.output.pixel_mut(position), corpus.pixel(source))
        {
            for (dst, &src) in target.iter_mut().zip(pixel).take(self.input_bytes) {
                *dst = src;
            }
        }
        self.status.mark_resolved(position, source);

        Some(VisitReport {
            step,
            position,
            source,
            score: (self.best.score != u64::MAX).then_some(self.best.score),
            candidates: self.best.evaluated,
        })
    }

    /// Process every remaining visit
    ///
    /// Returns the number of visits processed by this call.
    pub fn run(&mut self) -> usize {
        let mut visits = 0;
        while self.execute_visit().is_some() {
            visits += 1;
        }
        debug!(
            "{visits} visits done, {} duplicate back-reference candidates skipped",
            self.tried.skipped
        );
        visits
    }

    /// Total number of scheduled visits, revisits included
    pub fn total_visits(&self) -> usize {
        self.schedule.len()
    }

    /// Visits not processed yet
    pub const fn remaining_visits(&self) -> usize {
        self.remaining
    }

    /// Visiting order; it is consumed from the back
    pub fn schedule(&self) -> &[Coord] {
        &self.schedule
    }

    /// Resolution state of every output pixel
    pub const fn status(&self) -> &StatusMap {
        &self.status
    }

    /// Clamped parameters used by this run
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Channels compared and copied per pixel
    pub const fn input_bytes(&self) -> usize {
        self.input_bytes
    }

    /// Offsets searched for neighbors, closest first
    pub const fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    /// Per-channel difference costs
    pub const fn diff_table(&self) -> &DiffTable {
        &self.diff_table
    }

    /// Finish the run, releasing the output buffer and returning the status map
    pub fn finish(self) -> StatusMap {
        self.status
    }
}

/// Fill `output` with texture resynthesized from `corpus` in one call
///
/// # Errors
///
/// Returns an error if the corpus or output is empty, or if the output has
/// fewer channels than the corpus' color channels
pub fn resynthesize(
    corpus: &Image,
    output: &mut Image,
    parameters: Parameters,
    seed: u64,
) -> Result<StatusMap> {
    let mut run = Resynthesizer::new(corpus, output, parameters, seed)?;
    run.run();
    Ok(run.finish())
}
