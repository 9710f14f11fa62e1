use crate::spatial::coord::Coord;
use ndarray::Array2;

/// Per-corpus-pixel marker of the last processing step that scored it
///
/// Lets one output pixel skip corpus locations that several of its
/// neighbors point back to. Markers from earlier steps never match the
/// current one, so nothing has to be cleared between pixels.
#[derive(Clone, Debug)]
pub struct TriedMap {
    steps: Array2<Option<usize>>,
    /// Candidates skipped because they were already scored this step
    pub skipped: usize,
}

impl TriedMap {
    /// Create a map where no corpus location has been tried
    pub fn new(corpus_width: usize, corpus_height: usize) -> Self {
        Self {
            steps: Array2::from_elem((corpus_height, corpus_width), None),
            skipped: 0,
        }
    }

    /// Whether `point` was already scored during `step`
    pub fn was_tried(&self, point: Coord, step: usize) -> bool {
        point.is_within(self.steps.ncols(), self.steps.nrows())
            && self.steps.get(point.index()).copied().flatten() == Some(step)
    }

    /// Stamp `point` as scored during `step`
    pub fn mark(&mut self, point: Coord, step: usize) {
        let (width, height) = (self.steps.ncols(), self.steps.nrows());
        if let Some(slot) = point
            .is_within(width, height)
            .then(|| point.index())
            .and_then(|index| self.steps.get_mut(index))
        {
            *slot = Some(step);
        }
    }

    /// Claim `point` for `step`
    ///
    /// Returns `false` without changing anything if it was already tried
    /// during `step`; otherwise stamps it and returns `true`.
    pub fn claim(&mut self, point: Coord, step: usize) -> bool {
        if self.was_tried(point, step) {
            self.skipped += 1;
            false
        } else {
            self.mark(point, step);
            true
        }
    }
}
