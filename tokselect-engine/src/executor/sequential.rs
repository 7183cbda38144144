//! Sequential execution strategy

use crate::{
    corpus::CorpusFilter,
    error::Result,
    executor::{ExecutionMetrics, ExecutionMode, Executor},
};
use std::time::Instant;
use tokselect_core::Document;

/// Sequential single-threaded executor
///
/// Treats the whole corpus as one range.
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(&self, corpus: &mut [Document], filter: &CorpusFilter) -> Result<ExecutionMetrics> {
        let start_time = Instant::now();
        let stats = filter.filter_slice(corpus);

        Ok(ExecutionMetrics {
            mode_used: ExecutionMode::Sequential,
            stats,
            partitions: usize::from(!corpus.is_empty()),
            threads: 1,
            processing_time: start_time.elapsed(),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
