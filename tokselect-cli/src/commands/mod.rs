//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod select;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Keep or remove dictionary n-grams in corpus files
    Select(select::SelectArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the chosen command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Select(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
