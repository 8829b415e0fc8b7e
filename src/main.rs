//! CLI entry point for Kolam generation and symmetry classification

use clap::Parser;
use kolam::io::cli::{Cli, FileProcessor};
use kolam::io::logging::init_logging;

fn main() -> kolam::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
