//! Command-line entry point for silaba

use anyhow::Result;
use clap::Parser;
use silaba_cli::commands::Commands;

/// Spanish word syllabization and stress detection
#[derive(Debug, Parser)]
#[command(name = "silaba", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
