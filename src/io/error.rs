//! Error types for synthesis runs and the surrounding file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all resynthesis operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Corpus or output has no pixels along some axis
    ///
    /// Detected before any run buffer is allocated, so nothing is mutated.
    InvalidDimensions {
        /// Corpus (width, height)
        corpus: (usize, usize),
        /// Output (width, height)
        output: (usize, usize),
    },

    /// Parameter or buffer validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to decode a corpus image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Decoded image has a channel layout synthesis cannot use
    UnsupportedLayout {
        /// Path to the image file
        path: PathBuf,
        /// Channel count reported by the decoder
        channels: u8,
    },

    /// Failed to encode or write a synthesized image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The logger could not be installed
    Logging {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },

    /// Some files of a batch could not be processed
    BatchFailed {
        /// Number of files that failed
        failed: usize,
        /// Number of files in the batch
        total: usize,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { corpus, output } => {
                write!(
                    f,
                    "Invalid sizes: corpus is {}x{}, output is {}x{}",
                    corpus.0, corpus.1, output.0, output.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsupportedLayout { path, channels } => {
                write!(
                    f,
                    "Unsupported channel count {channels} in '{}'",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { source } => write!(f, "Failed to start logger: {source}"),
            Self::BatchFailed { failed, total } => {
                write!(f, "{failed} of {total} file(s) could not be resynthesized")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for resynthesis results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for AlgorithmError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimensions error from corpus and output sizes
pub const fn invalid_dimensions(
    corpus: (usize, usize),
    output: (usize, usize),
) -> AlgorithmError {
    AlgorithmError::InvalidDimensions { corpus, output }
}
