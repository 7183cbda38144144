//! tokselect command-line entry point

use clap::Parser;
use tokselect_cli::commands::Commands;

/// Keep or remove dictionary n-grams in tokenized corpora
#[derive(Debug, Parser)]
#[command(name = "tokselect", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
