//! Document-level filter
//!
//! Scans every dictionary span from the longest down, widens each match by
//! the configured window and splices the result into the document.

use crate::{
    dictionary::Dictionary,
    options::SelectOptions,
    scanner::MatchScanner,
    splice::SpliceBuffer,
    token::Document,
};

/// Applies one dictionary and one set of options to documents
///
/// Holds only shared references, so a single filter can be used from many
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct DocumentFilter<'a> {
    dictionary: &'a Dictionary,
    options: SelectOptions,
}

impl<'a> DocumentFilter<'a> {
    /// Create a filter
    pub fn new(dictionary: &'a Dictionary, options: SelectOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// The options this filter applies
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// The dictionary this filter matches against
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Filter `document` in place and return the number of matches found
    pub fn apply(&self, document: &mut Document) -> usize {
        let len = document.len();
        if len == 0 {
            return 0;
        }

        let scanner = MatchScanner::new(self.dictionary);
        let window = self.options.window;
        let mut buffer = SpliceBuffer::new(len, self.options.mode);

        for &span in self.dictionary.spans() {
            if span > len {
                continue;
            }
            for start in scanner.scan(document, span) {
                buffer.mark(window.expand(start, span, len));
            }
        }

        let matches = buffer.matches();
        buffer.finish(document, self.options.padding);
        matches
    }

    /// Filter an owned document
    pub fn filter(&self, mut document: Document) -> Document {
        self.apply(&mut document);
        document
    }
}

/// Filter a single document
pub fn filter_document(
    document: Document,
    dictionary: &Dictionary,
    options: SelectOptions,
) -> Document {
    DocumentFilter::new(dictionary, options).filter(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, PaddingPolicy, Window};

    fn dictionary() -> Dictionary {
        Dictionary::from_sequences([vec![1, 2], vec![5, 6], vec![10], vec![15], vec![20]])
            .unwrap()
    }

    fn run(mode: Mode, padding: bool, window: (usize, usize)) -> Document {
        let options = SelectOptions::new(mode)
            .with_padding(padding)
            .with_window(window);
        filter_document((1..=10).collect(), &dictionary(), options)
    }

    #[test]
    fn test_apply_counts_matches() {
        let dictionary = dictionary();
        let filter = DocumentFilter::new(&dictionary, SelectOptions::new(Mode::Keep));
        let mut document: Document = (1..=10).collect();

        assert_eq!(filter.apply(&mut document), 3);
        assert_eq!(document, vec![1, 2, 5, 6, 10]);
    }

    #[test]
    fn test_keep_pad_exact() {
        assert_eq!(run(Mode::Keep, true, (0, 0)), vec![1, 2, 0, 0, 5, 6, 0, 0, 0, 10]);
    }

    #[test]
    fn test_remove_pad_right_window() {
        assert_eq!(run(Mode::Remove, true, (0, 1)), vec![0, 0, 0, 4, 0, 0, 0, 8, 9, 0]);
    }

    #[test]
    fn test_empty_document_short_circuits() {
        let dictionary = dictionary();
        for mode in [Mode::Keep, Mode::Remove] {
            for padding in [PaddingPolicy::Pad, PaddingPolicy::Compact] {
                let options = SelectOptions::new(mode)
                    .with_padding(padding)
                    .with_window(Window::symmetric(3));
                let filter = DocumentFilter::new(&dictionary, options);
                assert!(filter.filter(Vec::new()).is_empty());
            }
        }
    }

    #[test]
    fn test_longer_span_overlapping_shorter() {
        let dictionary = Dictionary::from_sequences([vec![2], vec![1, 2, 3]]).unwrap();
        let options = SelectOptions::new(Mode::Remove).with_padding(true);

        let filtered = filter_document(vec![1, 2, 3, 2, 4], &dictionary, options);
        assert_eq!(filtered, vec![0, 0, 0, 0, 4]);
    }
}
