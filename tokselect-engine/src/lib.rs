//! Corpus fan-out for token selection
//!
//! This crate applies a [`tokselect_core::DocumentFilter`] to every document
//! of a corpus. Documents are independent, so the corpus is cut into
//! contiguous, disjoint index ranges that are filtered sequentially or on a
//! rayon thread pool. Every partitioning yields the same output as a single
//! sequential pass.

#![warn(missing_docs)]

pub mod adaptive_dispatcher;
pub mod config;
pub mod corpus;
pub mod error;
pub mod executor;
pub mod partitioner;
pub mod processor;

// Re-export key types
pub use adaptive_dispatcher::AdaptiveDispatcher;
pub use config::{EngineConfig, PartitionPolicy};
pub use corpus::{CorpusFilter, FilterStats};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMetrics, ExecutionMode, Executor, ProcessingOutput};
pub use partitioner::PartitionManager;
pub use processor::{CorpusProcessor, CorpusProcessorBuilder};

// Re-export from core for convenience
pub use tokselect_core::{
    CoreError, Dictionary, Document, Mode, PaddingPolicy, SelectOptions, Token, Window, PAD,
};
