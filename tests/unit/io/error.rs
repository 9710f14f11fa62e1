//! Tests for error messages and sources

#[cfg(test)]
mod tests {
    use resynth::io::error::{AlgorithmError, invalid_dimensions, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests dimension errors name both sizes
    // Verified by swapping corpus and output in the message
    #[test]
    fn test_invalid_dimensions_message() {
        let err = invalid_dimensions((0, 4), (8, 8));
        assert_eq!(
            err.to_string(),
            "Invalid sizes: corpus is 0x4, output is 8x8"
        );
        assert!(err.source().is_none());
    }

    // Tests parameter errors carry the name, value and reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_parameter_message() {
        let err = invalid_parameter("depth", &7, &"too many channels");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'depth' = '7': too many channels"
        );
        assert!(matches!(
            err,
            AlgorithmError::InvalidParameter {
                parameter: "depth",
                ..
            }
        ));
    }

    // Tests I/O errors convert and keep their source
    // Verified by returning None from source()
    #[test]
    fn test_io_error_source() {
        let err: AlgorithmError = std::io::Error::other("disk full").into();
        assert!(matches!(err, AlgorithmError::FileSystem { .. }));
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("disk full"));
    }

    // Tests layout errors mention the channel count and path
    // Verified by omitting the path
    #[test]
    fn test_unsupported_layout_message() {
        let err = AlgorithmError::UnsupportedLayout {
            path: PathBuf::from("odd.tif"),
            channels: 5,
        };
        let message = err.to_string();
        assert!(message.contains('5'));
        assert!(message.contains("odd.tif"));
    }
}
