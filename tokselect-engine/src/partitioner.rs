//! Contiguous partitioning of a corpus

use crate::{
    config::PartitionPolicy,
    error::{EngineError, Result},
};
use std::ops::Range;
use tokselect_core::Document;

/// Cuts a corpus into disjoint, contiguous document ranges
///
/// The ranges are returned in order and cover `[0, len)` exactly once.
#[derive(Debug, Clone)]
pub struct PartitionManager {
    policy: PartitionPolicy,
}

impl PartitionManager {
    /// Create a new partition manager
    pub fn new(policy: PartitionPolicy) -> Self {
        Self { policy }
    }

    /// The active policy
    pub fn policy(&self) -> PartitionPolicy {
        self.policy
    }

    /// Partition `corpus` for `workers` threads
    pub fn partition(&self, corpus: &[Document], workers: usize) -> Result<Vec<Range<usize>>> {
        match self.policy {
            PartitionPolicy::Fixed { documents } => partition_fixed(corpus.len(), documents),
            PartitionPolicy::Balanced { target_tokens } => {
                partition_balanced(corpus, target_tokens)
            }
            PartitionPolicy::PerThread => {
                let per_worker = corpus.len().div_ceil(workers.max(1));
                partition_fixed(corpus.len(), per_worker.max(1))
            }
        }
    }
}

/// Equal document counts, the last range may be shorter
fn partition_fixed(len: usize, documents: usize) -> Result<Vec<Range<usize>>> {
    if documents == 0 {
        return Err(EngineError::ConfigError(
            "partition size must be greater than 0".to_string(),
        ));
    }

    Ok((0..len)
        .step_by(documents)
        .map(|start| start..(start + documents).min(len))
        .collect())
}

/// Close a range once it holds at least `target_tokens` tokens
fn partition_balanced(corpus: &[Document], target_tokens: usize) -> Result<Vec<Range<usize>>> {
    if target_tokens == 0 {
        return Err(EngineError::ConfigError(
            "target token count must be greater than 0".to_string(),
        ));
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    let mut tokens = 0;

    for (index, document) in corpus.iter().enumerate() {
        tokens += document.len();
        if tokens >= target_tokens {
            ranges.push(start..index + 1);
            start = index + 1;
            tokens = 0;
        }
    }
    if start < corpus.len() {
        ranges.push(start..corpus.len());
    }

    Ok(ranges)
}

/// Split `corpus` into the mutable slices named by `ranges`
///
/// `ranges` must be ordered, non-overlapping and in bounds; gaps are allowed
/// and left untouched.
pub fn split_mut<'a>(
    corpus: &'a mut [Document],
    ranges: &[Range<usize>],
) -> Result<Vec<&'a mut [Document]>> {
    let len = corpus.len();
    let mut parts = Vec::with_capacity(ranges.len());
    let mut rest = corpus;
    let mut offset = 0;

    for range in ranges {
        if range.start < offset || range.start > range.end || range.end > len {
            return Err(EngineError::InvalidPartition {
                begin: range.start,
                end: range.end,
                len,
            });
        }

        let (_, tail) = std::mem::take(&mut rest).split_at_mut(range.start - offset);
        let (part, tail) = tail.split_at_mut(range.end - range.start);
        parts.push(part);
        rest = tail;
        offset = range.end;
    }

    Ok(parts)
}
