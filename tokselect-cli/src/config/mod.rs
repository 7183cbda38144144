//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokselect_api::Mode;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Selection configuration
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Execution configuration
    #[serde(default)]
    pub execution: ExecutionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse TOML configuration text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }
}

/// Selection-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// "keep" or "remove"
    pub mode: String,

    /// Replace unselected tokens with 0 instead of dropping them
    pub padding: bool,

    /// Context tokens selected before each match
    pub window_left: i64,

    /// Context tokens selected after each match
    pub window_right: i64,
}

impl SelectionConfig {
    /// Resolve the configured mode name
    pub fn mode(&self) -> Result<Mode, CliError> {
        match self.mode.to_ascii_lowercase().as_str() {
            "keep" => Ok(Mode::Keep),
            "remove" => Ok(Mode::Remove),
            other => Err(CliError::ConfigError(format!(
                "unknown mode '{other}' (expected 'keep' or 'remove')"
            ))),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            mode: "keep".to_string(),
            padding: false,
            window_left: 0,
            window_right: 0,
        }
    }
}

/// Execution-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Corpus size in tokens above which work is fanned out
    pub parallel_threshold_tokens: usize,

    /// Token volume per partition
    pub partition_tokens: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_tokens: tokselect_api::config::defaults::PARALLEL_THRESHOLD,
            partition_tokens: tokselect_api::config::defaults::PARTITION_TOKENS,
            worker_threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Include metadata in JSON output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}
