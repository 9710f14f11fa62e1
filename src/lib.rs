//! Exemplar-based texture resynthesis
//!
//! Grows an output image of any size from a small corpus image. Output
//! pixels are visited in a shuffled order; each one copies the corpus pixel
//! whose surroundings best match the output pixel's already-known
//! surroundings, trying locations suggested by resolved neighbors first
//! and random corpus locations after that.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Pixel buffers, coordinates, wrapping, and resolution status
pub mod spatial;
/// Synthesis engine: cost tables, neighbor search, scheduling, and the run driver
pub mod synthesis;

pub use io::error::{AlgorithmError, Result};
pub use spatial::{Coord, Image};
pub use synthesis::{Parameters, Resynthesizer, resynthesize};
