//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokselect_api::config::defaults;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the selection and execution settings");
        println!("2. Use it for selection:");
        println!(
            "   tokselect select -i corpus.txt -d dict.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template() -> String {
        format!(
            r#"# tokselect configuration
#
# Command-line flags take precedence over values in this file.
# Every key is optional.

[selection]
# "keep" retains dictionary matches, "remove" deletes them
mode = "keep"

# true: unselected tokens become 0 and documents keep their length
# false: unselected tokens are dropped
padding = false

# Tokens around each match that share its fate
window_left = 0
window_right = 0

[execution]
# Corpora with fewer tokens than this run on one thread
parallel_threshold_tokens = {threshold}

# Token volume per parallel partition
partition_tokens = {partition}

# Number of worker threads (0 = all available cores)
worker_threads = 0

[output]
# "text" (one document per line) or "json"
format = "text"

# Attach per-file statistics to JSON output
include_metadata = false

# Pretty print JSON output
pretty_json = true
"#,
            threshold = defaults::PARALLEL_THRESHOLD,
            partition = defaults::PARTITION_TOKENS,
        )
    }
}
