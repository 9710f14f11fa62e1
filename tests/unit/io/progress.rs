//! Tests for progress bar bookkeeping

#[cfg(test)]
mod tests {
    use resynth::io::configuration::PROGRESS_UPDATE_INTERVAL;
    use resynth::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a full batch lifecycle runs without a terminal
    // Verified by finishing a bar twice
    #[test]
    fn test_batch_lifecycle() {
        let mut progress = ProgressManager::new();
        progress.initialize(2);
        assert_eq!(progress.file_count(), 2);

        for name in ["a.png", "b.png"] {
            progress.start_file(Path::new(name), 3 * PROGRESS_UPDATE_INTERVAL);
            for done in 1..=3 * PROGRESS_UPDATE_INTERVAL {
                progress.update_visits(done);
            }
            progress.complete_file();
        }
        progress.finish();
    }

    // Tests a single file needs no batch bar and updates before start are ignored
    // Verified by updating a missing bar
    #[test]
    fn test_single_file() {
        let mut progress = ProgressManager::default();
        progress.initialize(1);
        progress.update_visits(PROGRESS_UPDATE_INTERVAL);
        progress.start_file(Path::new("dir/c.png"), 10);
        progress.start_file(Path::new(""), 10);
        progress.finish();
        assert_eq!(progress.file_count(), 1);
    }
}
