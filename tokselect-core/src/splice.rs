//! Per-document marking and splicing
//!
//! Matches are recorded in a mask alongside the document rather than by
//! writing sentinel values into the token buffer, so no token id is ever
//! reserved for internal bookkeeping.

use crate::{
    options::{Mode, PaddingPolicy},
    token::{Document, PAD},
};
use core::ops::Range;

/// Marking state for one document
#[derive(Debug, Clone)]
pub struct SpliceBuffer {
    mode: Mode,
    marked: Vec<bool>,
    matches: usize,
}

impl SpliceBuffer {
    /// Create an unmarked buffer for a document of `len` tokens
    pub fn new(len: usize, mode: Mode) -> Self {
        Self {
            mode,
            marked: vec![false; len],
            matches: 0,
        }
    }

    /// Record one match covering `range`
    ///
    /// Marking is idempotent, so overlapping ranges merge.
    #[inline]
    pub fn mark(&mut self, range: Range<usize>) {
        self.matches += 1;
        self.marked[range].fill(true);
    }

    /// Number of matches recorded so far
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Apply the marks to `document`
    ///
    /// `document` must be the one the buffer was created for.
    pub fn finish(self, document: &mut Document, padding: PaddingPolicy) {
        debug_assert_eq!(document.len(), self.marked.len());

        // Nothing marked in remove mode leaves the document untouched
        if self.mode == Mode::Remove && self.matches == 0 {
            return;
        }

        let keep_marked = self.mode == Mode::Keep;
        match padding {
            PaddingPolicy::Pad => {
                for (token, &marked) in document.iter_mut().zip(&self.marked) {
                    if marked != keep_marked {
                        *token = PAD;
                    }
                }
            }
            PaddingPolicy::Compact => {
                let mut selected = self.marked.iter().map(|&marked| marked == keep_marked);
                document.retain(|_| selected.next().unwrap_or(false));
            }
        }
    }
}
