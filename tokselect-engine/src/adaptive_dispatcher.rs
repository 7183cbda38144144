//! Adaptive execution dispatcher
//!
//! Selects sequential or parallel execution from the corpus size and the
//! configured thread budget.

use crate::{
    config::EngineConfig,
    corpus::CorpusFilter,
    error::Result,
    executor::{auto_select, ExecutionMetrics, ExecutionMode, Executor, SequentialExecutor},
};
use tokselect_core::Document;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Adaptive execution dispatcher
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a new adaptive dispatcher with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.partition_policy, config.threads),
            config,
        }
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Select sequential or parallel execution for `corpus`
    ///
    /// A single document or a single thread never goes parallel.
    pub fn select_mode(&self, corpus: &[Document]) -> ExecutionMode {
        if corpus.len() < 2 || self.config.effective_threads() == 1 {
            return ExecutionMode::Sequential;
        }

        let total_tokens: usize = corpus.iter().map(Vec::len).sum();
        auto_select(total_tokens, self.config.parallel_threshold)
    }

    /// Filter with the configured execution mode
    pub fn process(&self, corpus: &mut [Document], filter: &CorpusFilter) -> Result<ExecutionMetrics> {
        self.process_with_mode(corpus, filter, self.config.execution_mode)
    }

    /// Filter with the specified execution mode
    pub fn process_with_mode(
        &self,
        corpus: &mut [Document],
        filter: &CorpusFilter,
        mode: ExecutionMode,
    ) -> Result<ExecutionMetrics> {
        match mode {
            ExecutionMode::Sequential => self.sequential_executor.execute(corpus, filter),
            ExecutionMode::Adaptive => {
                let selected_mode = self.select_mode(corpus);
                log::debug!(
                    "adaptive dispatch selected {} for {} documents",
                    selected_mode.as_str(),
                    corpus.len()
                );
                self.process_with_mode(corpus, filter, selected_mode)
            }
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel_executor.execute(corpus, filter),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                // Fallback to sequential if parallel is not available
                self.sequential_executor.execute(corpus, filter)
            }
        }
    }
}

impl Executor for AdaptiveDispatcher {
    fn execute(&self, corpus: &mut [Document], filter: &CorpusFilter) -> Result<ExecutionMetrics> {
        self.process(corpus, filter)
    }

    fn mode(&self) -> ExecutionMode {
        self.config.execution_mode
    }
}
