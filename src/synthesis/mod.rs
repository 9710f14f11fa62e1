/// Per-corpus-pixel marker deduplicating candidates within one pixel's search
pub mod cache;
/// Robust per-channel difference cost table
pub mod difference;
/// Synthesis driver owning the per-run state
pub mod executor;
/// Branch-and-bound candidate scoring
pub mod matching;
/// Gathering of resolved neighbors around a target pixel
pub mod neighbors;
/// Spatial offsets sorted by distance from the origin
pub mod offsets;
/// Tunable synthesis parameters
pub mod parameters;
/// Shuffled and duplicated visiting order of output pixels
pub mod schedule;

pub use executor::{Resynthesizer, VisitReport, resynthesize};
pub use parameters::Parameters;
