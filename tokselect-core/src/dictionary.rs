//! N-gram dictionary with longest-first span order

use crate::{
    error::{CoreError, Result},
    token::{Token, PAD},
};
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashSet};

/// A fixed-length token sequence.
///
/// Short n-grams are stored inline, which covers almost every dictionary
/// entry seen in practice.
pub type Ngram = SmallVec<[Token; 4]>;

/// Immutable set of n-grams plus the distinct lengths present in it
///
/// Lookups take a plain token slice, so scanning a document never allocates.
/// [`Dictionary::spans`] is sorted in descending order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    ngrams: HashSet<Ngram>,
    spans: Vec<usize>,
}

impl Dictionary {
    /// Create an empty dictionary that matches nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Register token sequences as n-grams
    ///
    /// Duplicates collapse into one entry. Entries must be non-empty and must
    /// not contain [`PAD`].
    pub fn from_sequences<I, S>(sequences: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[Token]>,
    {
        let mut ngrams = HashSet::new();
        let mut spans = BTreeSet::new();

        for (index, sequence) in sequences.into_iter().enumerate() {
            let sequence = sequence.as_ref();
            if sequence.is_empty() {
                return Err(CoreError::EmptyNgram { index });
            }
            if sequence.contains(&PAD) {
                return Err(CoreError::ReservedToken { index });
            }

            spans.insert(sequence.len());
            ngrams.insert(Ngram::from_slice(sequence));
        }

        Ok(Self {
            ngrams,
            spans: spans.into_iter().rev().collect(),
        })
    }

    /// Check whether a token slice is a dictionary entry
    #[inline]
    pub fn contains(&self, tokens: &[Token]) -> bool {
        self.ngrams.contains(tokens)
    }

    /// Distinct n-gram lengths, longest first
    pub fn spans(&self) -> &[usize] {
        &self.spans
    }

    /// Number of distinct n-grams
    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }
}
