//! Output formatting module

use anyhow::Result;
use tokselect_api::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the filtered corpus of one input file
    fn format_source(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
