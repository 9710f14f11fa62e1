//! Parameter defaults, supported ranges, and runtime settings

// Synthesis parameter defaults
/// Default outlier sensitivity, 32 on the command line's 0-256 scale
pub const DEFAULT_AUTISM: f64 = DEFAULT_AUTISM_STEPS / AUTISM_STEPS;
/// Default number of neighbors compared per pixel
pub const DEFAULT_NEIGHBORS: usize = 29;
/// Default number of random candidates per pixel
pub const DEFAULT_TRIES: usize = 192;
/// Default number of extra polish passes
pub const DEFAULT_POLISH: usize = 0;
/// Default revisit decay constant (192/256 = 3/4)
pub const DEFAULT_MAGIC: usize = 192;

// Command-line scales for the same parameters
/// Default autism as given on the command line, divided by 256 before use
pub const DEFAULT_AUTISM_STEPS: f64 = 32.0;
/// Divisor turning command-line autism steps into a sensitivity
pub const AUTISM_STEPS: f64 = 256.0;

// Supported ranges; larger values are clamped
/// Largest accepted neighbor count, the last circle neighborhood size
pub const MAX_NEIGHBORS: usize = 1093;
/// Largest number of random candidates per pixel
pub const MAX_TRIES: usize = 65_536;
/// Largest number of polish passes
pub const MAX_POLISH: usize = 9;
/// Largest revisit decay constant
pub const MAX_MAGIC: usize = 255;
/// Largest square neighborhood radius
pub const MAX_SQUARE_RADIUS: usize = 32;

/// Lattice points inside a disc of radius `r` (index `r - 1`), OEIS A057961
pub const CIRCLE_NEIGHBORHOOD_SIZES: [usize; 128] = [
    1, 5, 9, 13, 21, 25, 29, 37, 45, 49, 57, 61, 69, 81, 89, 97, 101, 109, 113, 121, 129, 137,
    145, 149, 161, 169, 177, 185, 193, 197, 213, 221, 225, 233, 241, 249, 253, 261, 277, 285, 293,
    301, 305, 317, 325, 333, 341, 349, 357, 365, 373, 377, 385, 401, 405, 421, 429, 437, 441, 457,
    465, 473, 481, 489, 497, 505, 509, 517, 529, 545, 553, 561, 569, 577, 593, 601, 609, 613, 621,
    633, 641, 657, 665, 673, 681, 697, 709, 717, 725, 733, 741, 749, 757, 761, 769, 777, 793, 797,
    805, 821, 829, 845, 853, 861, 869, 877, 885, 889, 901, 917, 925, 933, 941, 949, 965, 973, 981,
    989, 997, 1005, 1009, 1033, 1041, 1049, 1057, 1069, 1085, 1093,
];

// Output sizing
/// Default output scale, a multiplier of the corpus dimensions
pub const DEFAULT_SCALE: i32 = 1;
/// Smallest scale; negative values request an absolute square size
pub const MIN_SCALE: i32 = -8192;
/// Largest scale multiplier
pub const MAX_SCALE: i32 = 32;
/// Output edge length used when the scale is zero
pub const FALLBACK_OUTPUT_SIZE: usize = 256;

// Randomness
/// Seed value that asks for a time-derived seed
pub const TIME_SEED: u64 = 0;

// Output settings
/// Extension replacing the input's own extension on output files
pub const OUTPUT_EXTENSION: &str = "resynth.png";

// Progress bar display settings
/// Number of visits between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 4096;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
