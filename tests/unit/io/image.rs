//! Tests for corpus loading and PNG export

#[cfg(test)]
mod tests {
    use resynth::AlgorithmError;
    use resynth::io::image::{load_corpus, save_png};
    use resynth::spatial::image::Image;
    use tempfile::TempDir;

    // Tests every channel layout survives a save and load
    // Verified by always saving RGBA
    #[test]
    fn test_round_trip_layouts() {
        let dir = TempDir::new().unwrap();

        for depth in 1..=4 {
            let data: Vec<u8> = (0..3 * 2 * depth).map(|i| (i * 17) as u8).collect();
            let img = Image::new(3, 2, depth, data).unwrap();
            let path = dir.path().join(format!("layout{depth}.png"));

            save_png(&img, &path).unwrap();
            let loaded = load_corpus(&path).unwrap();
            assert_eq!(loaded, img);
        }
    }

    // Tests missing parent directories are created
    // Verified by skipping create_dir_all
    #[test]
    fn test_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");
        let img = Image::filled(2, 2, &[1, 2, 3]).unwrap();

        save_png(&img, &path).unwrap();
        assert!(path.exists());
    }

    // Tests unreadable files report a load error with the path
    // Verified by mapping decode failures to file system errors
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.png");

        let result = load_corpus(&path);
        assert!(matches!(result, Err(AlgorithmError::ImageLoad { path: p, .. }) if p == path));
    }

    // Tests files that are not images are rejected
    // Verified by guessing a format from the extension only
    #[test]
    fn test_load_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(load_corpus(&path).is_err());
    }
}
