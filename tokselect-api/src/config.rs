//! High-level configuration API

use crate::error::{ApiError, Result};
use tokselect_core::{Mode, PaddingPolicy, SelectOptions, Window};
use tokselect_engine::{EngineConfig, ExecutionMode, PartitionPolicy};

/// Default configuration constants
pub mod defaults {
    /// Parallel processing threshold in tokens
    pub const PARALLEL_THRESHOLD: usize = 100_000;

    /// Token volume per partition
    pub const PARTITION_TOKENS: usize = 64 * 1024;
}

/// Validated configuration for a selection pass
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) options: SelectOptions,
    pub(crate) execution_mode: ExecutionMode,
    pub(crate) threads: Option<usize>, // None = all available threads
    pub(crate) parallel_threshold: usize,
    pub(crate) partition_tokens: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: SelectOptions::default(),
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            partition_tokens: defaults::PARTITION_TOKENS,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Keep matches, exact windows, compacted output
    pub fn keep() -> Self {
        Self::default()
    }

    /// Remove matches, exact windows, compacted output
    pub fn remove() -> Self {
        Self {
            options: SelectOptions::new(Mode::Remove),
            ..Default::default()
        }
    }

    /// Selection options
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// Selection mode
    pub fn mode(&self) -> Mode {
        self.options.mode
    }

    /// Whether unselected positions are padded
    pub fn padding(&self) -> bool {
        self.options.padding.is_padding()
    }

    /// Context window
    pub fn window(&self) -> Window {
        self.options.window
    }

    /// Execution mode preference
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Thread count override
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Convert to the engine configuration
    pub(crate) fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            execution_mode: self.execution_mode,
            partition_policy: PartitionPolicy::Balanced {
                target_tokens: self.partition_tokens,
            },
            threads: self.threads,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

/// Fluent builder for configuration
///
/// Host-style values (integer mode codes, signed window margins) are
/// accepted here and validated in [`ConfigBuilder::build`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    mode: Option<Mode>,
    mode_code: Option<i32>,
    padding: Option<bool>,
    window: Option<(i64, i64)>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
    partition_tokens: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self.mode_code = None;
        self
    }

    /// Set the selection mode from its integer code (1 = keep, 2 = remove)
    pub fn mode_code(mut self, code: i32) -> Self {
        self.mode_code = Some(code);
        self.mode = None;
        self
    }

    /// Pad unselected positions with 0 instead of dropping them
    pub fn padding(mut self, padding: bool) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the window margins
    pub fn window(mut self, left: i64, right: i64) -> Self {
        self.window = Some((left, right));
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the corpus size in tokens above which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, tokens: usize) -> Self {
        self.parallel_threshold = Some(tokens);
        self
    }

    /// Set the token volume per parallel partition
    pub fn partition_tokens(mut self, tokens: usize) -> Self {
        self.partition_tokens = Some(tokens);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.mode_code {
            config.options.mode = Mode::from_code(code)?;
        } else if let Some(mode) = self.mode {
            config.options.mode = mode;
        }

        if let Some(padding) = self.padding {
            config.options.padding = PaddingPolicy::from(padding);
        }

        if let Some((left, right)) = self.window {
            config.options.window = Window::from_signed(left, right)?;
        }

        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(ApiError::Config("threads must be greater than 0".into()));
            }
            config.threads = Some(threads);
        }

        if let Some(tokens) = self.parallel_threshold {
            config.parallel_threshold = tokens;
        }

        if let Some(tokens) = self.partition_tokens {
            if tokens == 0 {
                return Err(ApiError::Config(
                    "partition_tokens must be greater than 0".into(),
                ));
            }
            config.partition_tokens = tokens;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokselect_core::CoreError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode(), Mode::Keep);
        assert!(!config.padding());
        assert_eq!(config.window(), Window::EXACT);
        assert_eq!(config.execution_mode(), ExecutionMode::Adaptive);
        assert_eq!(Config::remove().mode(), Mode::Remove);
    }

    #[test]
    fn test_builder_with_host_values() {
        let config = Config::builder()
            .mode_code(2)
            .padding(true)
            .window(1, 3)
            .threads(Some(2))
            .build()
            .unwrap();

        assert_eq!(config.mode(), Mode::Remove);
        assert!(config.padding());
        assert_eq!(config.window(), Window::new(1, 3));
        assert_eq!(config.threads(), Some(2));
    }

    #[test]
    fn test_invalid_mode_code() {
        let error = Config::builder().mode_code(3).build().unwrap_err();
        assert!(matches!(error, ApiError::Core(CoreError::InvalidMode { code: 3 })));
    }

    #[test]
    fn test_negative_window() {
        let error = Config::builder().window(-1, 0).build().unwrap_err();
        assert!(matches!(error, ApiError::Core(CoreError::NegativeWindow { .. })));
    }

    #[test]
    fn test_zero_threads() {
        assert!(Config::builder().threads(Some(0)).build().is_err());
        assert!(Config::builder().partition_tokens(0).build().is_err());
    }

    #[test]
    fn test_last_mode_setter_wins() {
        let config = Config::builder()
            .mode_code(9)
            .mode(Mode::Remove)
            .build()
            .unwrap();
        assert_eq!(config.mode(), Mode::Remove);
    }

    #[test]
    fn test_engine_config_conversion() {
        let config = Config::builder()
            .parallel_threshold(10)
            .partition_tokens(500)
            .build()
            .unwrap();
        let engine = config.to_engine_config();

        assert_eq!(engine.parallel_threshold, 10);
        assert_eq!(
            engine.partition_policy,
            PartitionPolicy::Balanced { target_tokens: 500 }
        );
    }
}
