//! Progress bars for batch resynthesis

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};

/// Manages a per-file visit bar and, for batches, a file counter bar
pub struct ProgressManager {
    /// Container for coordinating multiple progress bars
    multi_progress: MultiProgress,
    /// Overall progress across all files (only when more than one file)
    batch_bar: Option<ProgressBar>,
    /// Visit progress of the file being synthesized
    file_bar: Option<ProgressBar>,
    /// Number of files in the batch
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static VISIT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{percent:>3}}% {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bar: None,
            file_count: 0,
        }
    }

    /// Prepare bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Number of files announced by [`Self::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Show a fresh visit bar for a file about to be synthesized
    pub fn start_file(&mut self, path: &Path, total_visits: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = ProgressBar::new(total_visits as u64);
        bar.set_style(VISIT_STYLE.clone());
        bar.set_prefix(display_name);

        if let Some(old) = self.file_bar.replace(self.multi_progress.add(bar)) {
            old.finish_and_clear();
        }
    }

    /// Report how many visits of the current file are done
    ///
    /// The bar only moves every [`PROGRESS_UPDATE_INTERVAL`] visits.
    pub fn update_visits(&self, done: usize) {
        if done % PROGRESS_UPDATE_INTERVAL != 0 {
            return;
        }
        if let Some(ref bar) = self.file_bar {
            bar.set_position(done as u64);
        }
    }

    /// Mark the current file as finished and advance the batch bar
    pub fn complete_file(&mut self) {
        if let Some(bar) = self.file_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(bar) = self.file_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
