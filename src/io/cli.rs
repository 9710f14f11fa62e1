//! Command-line interface for batch resynthesis of image files

use crate::io::configuration::{
    AUTISM_STEPS, DEFAULT_AUTISM_STEPS, DEFAULT_MAGIC, DEFAULT_NEIGHBORS, DEFAULT_POLISH,
    DEFAULT_SCALE, DEFAULT_TRIES, FALLBACK_OUTPUT_SIZE, MAX_SCALE, MIN_SCALE, OUTPUT_EXTENSION,
    TIME_SEED,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::{load_corpus, save_png};
use crate::io::progress::ProgressManager;
use crate::spatial::image::Image;
use crate::synthesis::executor::Resynthesizer;
use crate::synthesis::parameters::{Parameters, circle_neighborhood, square_neighborhood};
use clap::{ArgAction, Parser};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "resynth")]
#[command(
    version,
    about = "Resynthesize larger textures from small example images"
)]
/// Command-line arguments for the resynthesis tool
// Each wrapping axis and the output verbosity are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image files to open, resynthesize, and save as {name}.resynth.png
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Sensitivity to outliers, range [0,256]
    #[arg(short, long, default_value_t = DEFAULT_AUTISM_STEPS, allow_negative_numbers = true)]
    pub autism: f64,

    /// Points to use when sampling, range [0,1093] (default 29)
    #[arg(
        short = 'N',
        long,
        conflicts_with_all = ["radius", "circle_radius"],
        allow_negative_numbers = true
    )]
    pub neighbors: Option<i64>,

    /// Square neighborhood radius, range [0,32]
    #[arg(
        short = 'r',
        long,
        conflicts_with = "circle_radius",
        allow_negative_numbers = true
    )]
    pub radius: Option<i64>,

    /// Circle neighborhood radius, range [1,128]
    #[arg(short = 'R', long, allow_negative_numbers = true)]
    pub circle_radius: Option<i64>,

    /// Random points added to candidates, range [0,65536]
    #[arg(short = 'M', long, default_value_t = DEFAULT_TRIES as i64, allow_negative_numbers = true)]
    pub tries: i64,

    /// Extra iterations, range [0,9]
    #[arg(short, long, default_value_t = DEFAULT_POLISH as i64, allow_negative_numbers = true)]
    pub polish: i64,

    /// Magic constant affecting revisits, range [0,255]
    #[arg(short, long, default_value_t = DEFAULT_MAGIC as i64, allow_negative_numbers = true)]
    pub magic: i64,

    /// Output size multiplier; negative values set width and height, range [-8192,32]
    #[arg(short, long, default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    pub scale: i32,

    /// Initial RNG value; 0 derives one from the current time
    #[arg(short = 'S', long, default_value_t = TIME_SEED)]
    pub seed: u64,

    /// Do not wrap the output horizontally
    #[arg(long)]
    pub no_h_tile: bool,

    /// Do not wrap the output vertically
    #[arg(long)]
    pub no_v_tile: bool,

    /// Suppress progress output and all logging below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Neighbor count from whichever neighborhood option was given
    pub fn neighbor_count(&self) -> usize {
        match (self.circle_radius, self.radius, self.neighbors) {
            (Some(radius), _, _) => circle_neighborhood(non_negative(radius)),
            (None, Some(radius), _) => square_neighborhood(non_negative(radius)),
            (None, None, Some(count)) => non_negative(count),
            (None, None, None) => DEFAULT_NEIGHBORS,
        }
    }

    /// Synthesis parameters, clamped into their supported ranges
    pub fn parameters(&self) -> Parameters {
        Parameters {
            h_tile: !self.no_h_tile,
            v_tile: !self.no_v_tile,
            autism: self.autism / AUTISM_STEPS,
            neighbors: self.neighbor_count(),
            tries: non_negative(self.tries),
            polish: non_negative(self.polish),
            magic: non_negative(self.magic),
        }
        .clamped()
    }

    /// Output size for a corpus of the given size
    ///
    /// A positive scale multiplies the corpus dimensions, a negative one
    /// gives an absolute square size, and zero falls back to 256x256.
    pub fn output_dimensions(&self, corpus_width: usize, corpus_height: usize) -> (usize, usize) {
        let scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        let factor = scale.unsigned_abs() as usize;
        match scale {
            s if s > 0 => (corpus_width * factor, corpus_height * factor),
            s if s < 0 => (factor, factor),
            _ => (FALLBACK_OUTPUT_SIZE, FALLBACK_OUTPUT_SIZE),
        }
    }

    /// Seed for the next run, replacing 0 with the current UNIX time
    pub fn resolved_seed(&self) -> u64 {
        if self.seed == TIME_SEED {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(1, |elapsed| elapsed.as_secs())
        } else {
            self.seed
        }
    }

    /// Output path for an input: its extension replaced by `.resynth.png`
    pub fn output_path(input_path: &Path) -> PathBuf {
        input_path.with_extension(OUTPUT_EXTENSION)
    }
}

/// Clamp a command-line count to `0..`; values beyond `usize` saturate
fn non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Orchestrates batch resynthesis of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Resynthesize every file given on the command line
    ///
    /// A file that fails is logged and skipped; the others are still
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::BatchFailed`] if any file could not be
    /// loaded, synthesized, or written
    pub fn process(&mut self) -> Result<()> {
        let files = self.cli.files.clone();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut failed = 0;
        for file in &files {
            match self.process_file(file) {
                Ok(output_path) => Self::report_written(&output_path),
                Err(err) => {
                    error!("{}: {err}", file.display());
                    failed += 1;
                }
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if failed > 0 {
            return Err(AlgorithmError::BatchFailed {
                failed,
                total: files.len(),
            });
        }
        Ok(())
    }

    // The written path is the tool's only stdout output, for use in scripts
    #[allow(clippy::print_stdout)]
    fn report_written(output_path: &Path) {
        println!("{}", output_path.display());
    }

    /// Load, resynthesize and save a single file, returning the written path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded, has an unusable size,
    /// or the result cannot be written
    pub fn process_file(&mut self, input_path: &Path) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = Cli::output_path(input_path);

        let corpus = load_corpus(input_path)?;
        let (width, height) = self.cli.output_dimensions(corpus.width(), corpus.height());
        let mut output = Image::blank(width, height, corpus.input_bytes())?;
        let seed = self.cli.resolved_seed();

        info!(
            "{}: {}x{}x{} -> {width}x{height}, seed {seed}",
            input_path.display(),
            corpus.width(),
            corpus.height(),
            corpus.depth()
        );

        {
            let mut run = Resynthesizer::new(&corpus, &mut output, self.cli.parameters(), seed)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(input_path, run.total_visits());
            }

            let mut done = 0;
            while run.execute_visit().is_some() {
                done += 1;
                if let Some(ref pm) = self.progress_manager {
                    pm.update_visits(done);
                }
            }
        }

        save_png(&output, &output_path)?;

        info!(
            "{} written in {:.2?}",
            output_path.display(),
            start_time.elapsed()
        );
        Ok(output_path)
    }
}
