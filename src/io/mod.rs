/// Command-line parsing and batch file processing
pub mod cli;
/// Parameter defaults, ranges and runtime settings
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Logger initialization
pub mod logging;
/// Progress bar management
pub mod progress;
