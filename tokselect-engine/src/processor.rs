//! Corpus processor and builder
//!
//! Entry point for filtering whole corpora with one dictionary.

use crate::{
    adaptive_dispatcher::AdaptiveDispatcher,
    config::{EngineConfig, PartitionPolicy},
    corpus::{CorpusFilter, FilterStats},
    error::{EngineError, Result},
    executor::{ExecutionMetrics, ExecutionMode, ProcessingOutput},
};
use std::ops::Range;
use std::sync::Arc;
use tokselect_core::{Dictionary, Document, Mode, PaddingPolicy, SelectOptions, Window};

/// Filters corpora against a fixed dictionary and options
pub struct CorpusProcessor {
    dispatcher: Arc<AdaptiveDispatcher>,
    filter: CorpusFilter,
}

impl CorpusProcessor {
    /// Create a processor with the default engine configuration
    pub fn new(dictionary: Dictionary, options: SelectOptions) -> Self {
        Self::with_config(Arc::new(dictionary), options, EngineConfig::default())
    }

    /// Create a processor with a custom engine configuration
    pub fn with_config(
        dictionary: Arc<Dictionary>,
        options: SelectOptions,
        config: EngineConfig,
    ) -> Self {
        Self {
            dispatcher: Arc::new(AdaptiveDispatcher::new(config)),
            filter: CorpusFilter::new(dictionary, options),
        }
    }

    /// Create a builder
    pub fn builder() -> CorpusProcessorBuilder {
        CorpusProcessorBuilder::new()
    }

    /// The shared filter state
    pub fn filter(&self) -> &CorpusFilter {
        &self.filter
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    /// Filter an owned corpus
    pub fn process(&self, corpus: Vec<Document>) -> Result<ProcessingOutput> {
        self.process_with_mode(corpus, self.config().execution_mode)
    }

    /// Filter an owned corpus with a specific execution mode
    pub fn process_with_mode(
        &self,
        mut corpus: Vec<Document>,
        mode: ExecutionMode,
    ) -> Result<ProcessingOutput> {
        let metrics = self
            .dispatcher
            .process_with_mode(&mut corpus, &self.filter, mode)?;

        Ok(ProcessingOutput {
            documents: corpus,
            metrics,
        })
    }

    /// Filter a corpus in place
    pub fn process_in_place(&self, corpus: &mut [Document]) -> Result<ExecutionMetrics> {
        self.dispatcher.process(corpus, &self.filter)
    }

    /// Filter only the documents with indices in `range`
    ///
    /// External schedulers call this over disjoint ranges that together
    /// cover the corpus.
    pub fn process_range(
        &self,
        corpus: &mut [Document],
        range: Range<usize>,
    ) -> Result<FilterStats> {
        self.filter.filter_range(corpus, range)
    }
}

/// Builder for CorpusProcessor
///
/// Provides a fluent interface for configuring the processor.
#[derive(Debug, Default)]
pub struct CorpusProcessorBuilder {
    dictionary: Option<Arc<Dictionary>>,
    options: SelectOptions,
    config: EngineConfig,
}

impl CorpusProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(Arc::new(dictionary));
        self
    }

    /// Set a dictionary that is already shared
    pub fn shared_dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Set all selection options at once
    pub fn options(mut self, options: SelectOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the selection mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Set the padding policy
    pub fn padding(mut self, padding: impl Into<PaddingPolicy>) -> Self {
        self.options.padding = padding.into();
        self
    }

    /// Set the context window
    pub fn window(mut self, window: Window) -> Self {
        self.options.window = window;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the parallel threshold in tokens
    pub fn parallel_threshold(mut self, tokens: usize) -> Self {
        self.config.parallel_threshold = tokens;
        self
    }

    /// Set the partition policy
    pub fn partition_policy(mut self, policy: PartitionPolicy) -> Self {
        self.config.partition_policy = policy;
        self
    }

    /// Replace the whole engine configuration
    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<CorpusProcessor> {
        let dictionary = self
            .dictionary
            .ok_or_else(|| EngineError::ConfigError("a dictionary is required".to_string()))?;

        if self.config.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".to_string(),
            ));
        }

        match self.config.partition_policy {
            PartitionPolicy::Fixed { documents: 0 }
            | PartitionPolicy::Balanced { target_tokens: 0 } => {
                return Err(EngineError::ConfigError(
                    "partition size must be greater than 0".to_string(),
                ));
            }
            _ => {}
        }

        Ok(CorpusProcessor::with_config(
            dictionary,
            self.options,
            self.config,
        ))
    }
}
