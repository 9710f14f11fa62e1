//! CLI entry point for texture resynthesis

use clap::Parser;
use resynth::io::cli::{Cli, FileProcessor};
use resynth::io::logging;

fn main() -> resynth::Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.quiet, cli.verbose)?;
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
