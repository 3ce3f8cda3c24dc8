//! CLI entry point for autostereogram generation

use autostereogram::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> autostereogram::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli)?;
    processor.process()
}
