//! Configuration types for the engine

use crate::ExecutionMode;

/// How a corpus is cut into contiguous document ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// Fixed number of documents per range
    Fixed {
        /// Documents in each range
        documents: usize,
    },
    /// Ranges of roughly equal token volume
    Balanced {
        /// Token count after which a range is closed
        target_tokens: usize,
    },
    /// One range per worker thread
    PerThread,
}

impl Default for PartitionPolicy {
    fn default() -> Self {
        PartitionPolicy::Balanced {
            target_tokens: 64 * 1024,
        } // 64K tokens
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Partition sizing policy
    pub partition_policy: PartitionPolicy,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum corpus size in tokens for parallel processing
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            partition_policy: PartitionPolicy::default(),
            threads: None,
            parallel_threshold: 100_000, // 100K tokens
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            ..Default::default()
        }
    }

    /// Create a fast configuration optimized for throughput
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            partition_policy: PartitionPolicy::PerThread,
            threads: None,              // Use all available
            parallel_threshold: 20_000, // 20K tokens
        }
    }

    /// Worker count used for partitioning
    pub fn effective_threads(&self) -> usize {
        match self.threads {
            Some(count) => count.max(1),
            #[cfg(feature = "parallel")]
            None => num_cpus::get(),
            #[cfg(not(feature = "parallel"))]
            None => 1,
        }
    }
}
