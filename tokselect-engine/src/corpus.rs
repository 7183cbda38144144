//! Document filtering over corpus ranges

use crate::error::{EngineError, Result};
use std::ops::Range;
use std::sync::Arc;
use tokselect_core::{Dictionary, Document, DocumentFilter, SelectOptions};

/// Counters collected while filtering a range of documents
///
/// Stats from disjoint ranges combine associatively, so per-partition results
/// can be reduced in any grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Documents processed
    pub documents: usize,
    /// Tokens before filtering
    pub tokens_in: usize,
    /// Tokens after filtering
    pub tokens_out: usize,
    /// Dictionary matches found
    pub matches: usize,
    /// Documents with at least one match
    pub documents_matched: usize,
}

impl FilterStats {
    /// Combine stats from two disjoint ranges
    pub fn combine(self, other: Self) -> Self {
        Self {
            documents: self.documents + other.documents,
            tokens_in: self.tokens_in + other.tokens_in,
            tokens_out: self.tokens_out + other.tokens_out,
            matches: self.matches + other.matches,
            documents_matched: self.documents_matched + other.documents_matched,
        }
    }
}

/// Shared, read-only state for one selection pass
///
/// Cloning is cheap: the dictionary sits behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct CorpusFilter {
    dictionary: Arc<Dictionary>,
    options: SelectOptions,
}

impl CorpusFilter {
    /// Create a corpus filter
    pub fn new(dictionary: Arc<Dictionary>, options: SelectOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// The dictionary shared by all workers
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// The selection options
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// Filter every document of `documents` in place
    pub fn filter_slice(&self, documents: &mut [Document]) -> FilterStats {
        let filter = DocumentFilter::new(&self.dictionary, self.options);

        documents
            .iter_mut()
            .fold(FilterStats::default(), |stats, document| {
                let tokens_in = document.len();
                let matches = filter.apply(document);
                stats.combine(FilterStats {
                    documents: 1,
                    tokens_in,
                    tokens_out: document.len(),
                    matches,
                    documents_matched: usize::from(matches > 0),
                })
            })
    }

    /// Filter the documents with indices in `[range.start, range.end)`
    pub fn filter_range(
        &self,
        corpus: &mut [Document],
        range: Range<usize>,
    ) -> Result<FilterStats> {
        if range.start > range.end || range.end > corpus.len() {
            return Err(EngineError::InvalidPartition {
                begin: range.start,
                end: range.end,
                len: corpus.len(),
            });
        }

        Ok(self.filter_slice(&mut corpus[range]))
    }
}
