//! Parallel execution strategy

use crate::{
    config::PartitionPolicy,
    corpus::{CorpusFilter, FilterStats},
    error::{EngineError, Result},
    executor::{ExecutionMetrics, ExecutionMode, Executor},
    partitioner::{split_mut, PartitionManager},
};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::OnceLock;
use std::time::Instant;
use tokselect_core::Document;

/// Parallel multi-threaded executor
///
/// Each contiguous range is filtered by one rayon task. Workers share only
/// the read-only dictionary.
#[derive(Debug)]
pub struct ParallelExecutor {
    partition_manager: PartitionManager,
    threads: Option<usize>,
    // Built on first use and reused by every later pass
    pool: OnceLock<std::result::Result<ThreadPool, String>>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    ///
    /// `threads: None` runs on the global rayon pool.
    pub fn new(partition_policy: PartitionPolicy, threads: Option<usize>) -> Self {
        Self {
            partition_manager: PartitionManager::new(partition_policy),
            threads,
            pool: OnceLock::new(),
        }
    }

    /// The dedicated pool, or `None` for the global rayon pool
    fn pool(&self) -> Result<Option<&ThreadPool>> {
        let Some(count) = self.threads else {
            return Ok(None);
        };

        self.pool
            .get_or_init(|| {
                log::debug!("building rayon pool with {} threads", count);
                ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map(Some)
            .map_err(|e| EngineError::ThreadPool(e.clone()))
    }

    fn process_parallel(
        &self,
        corpus: &mut [Document],
        filter: &CorpusFilter,
    ) -> Result<ExecutionMetrics> {
        let start_time = Instant::now();

        let result = match self.pool()? {
            Some(pool) => pool.install(|| self.run_partitions(corpus, filter)),
            None => self.run_partitions(corpus, filter),
        };

        result.map(|mut metrics| {
            metrics.processing_time = start_time.elapsed();
            metrics
        })
    }

    /// Partition and filter on the current rayon pool
    fn run_partitions(
        &self,
        corpus: &mut [Document],
        filter: &CorpusFilter,
    ) -> Result<ExecutionMetrics> {
        let threads = rayon::current_num_threads();
        let ranges = self.partition_manager.partition(corpus, threads)?;
        log::debug!(
            "filtering {} documents in {} partitions on {} threads",
            corpus.len(),
            ranges.len(),
            threads
        );

        let partitions = ranges.len();
        let parts = split_mut(corpus, &ranges)?;

        let stats = parts
            .into_par_iter()
            .zip(ranges.into_par_iter())
            .map(|(part, range)| {
                log::trace!("partition [{}, {})", range.start, range.end);
                filter.filter_slice(part)
            })
            .reduce(FilterStats::default, FilterStats::combine);

        Ok(ExecutionMetrics {
            mode_used: ExecutionMode::Parallel,
            stats,
            partitions,
            threads,
            processing_time: Default::default(),
        })
    }
}

impl Executor for ParallelExecutor {
    fn execute(&self, corpus: &mut [Document], filter: &CorpusFilter) -> Result<ExecutionMetrics> {
        self.process_parallel(corpus, filter)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
