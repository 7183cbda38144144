//! Execution strategies for corpus filtering

use crate::{
    corpus::{CorpusFilter, FilterStats},
    error::Result,
};
use std::time::Duration;
use tokselect_core::Document;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Pick sequential or parallel from the corpus size
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Mode name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Metrics for one pass over a corpus
#[derive(Debug, Clone, Default)]
pub struct ExecutionMetrics {
    /// Execution mode that actually ran
    pub mode_used: ExecutionMode,
    /// Aggregated filter counters
    pub stats: FilterStats,
    /// Number of document ranges processed
    pub partitions: usize,
    /// Worker threads available to the pass
    pub threads: usize,
    /// Wall-clock time of the pass
    pub processing_time: Duration,
}

/// Filtered corpus together with its metrics
#[derive(Debug, Clone)]
pub struct ProcessingOutput {
    /// Filtered documents, in input order
    pub documents: Vec<Document>,
    /// Metrics of the pass
    pub metrics: ExecutionMetrics,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Filter every document of `corpus` in place
    fn execute(&self, corpus: &mut [Document], filter: &CorpusFilter) -> Result<ExecutionMetrics>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on corpus size in tokens
pub fn auto_select(total_tokens: usize, threshold: usize) -> ExecutionMode {
    if total_tokens < threshold {
        // Small corpora: thread hand-off costs more than it saves
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
