//! Dictionary match scanning for a single span length

use crate::{dictionary::Dictionary, token::Token};
use core::iter::Enumerate;
use core::slice::Windows;

/// Finds dictionary matches of one length in a document
#[derive(Debug, Clone, Copy)]
pub struct MatchScanner<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> MatchScanner<'a> {
    /// Create a scanner over a dictionary
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Start positions of every `span`-long slice of `document` found in the
    /// dictionary, in ascending order
    ///
    /// Yields nothing when `span` is 0 or longer than the document.
    pub fn scan<'d>(&self, document: &'d [Token], span: usize) -> Matches<'d>
    where
        'a: 'd,
    {
        let document: &[Token] = if span == 0 { &[] } else { document };
        Matches {
            windows: document.windows(span.max(1)).enumerate(),
            dictionary: self.dictionary,
        }
    }
}

/// Iterator returned by [`MatchScanner::scan`]
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    windows: Enumerate<Windows<'a, Token>>,
    dictionary: &'a Dictionary,
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let dictionary = self.dictionary;
        self.windows
            .find(|(_, ngram)| dictionary.contains(ngram))
            .map(|(start, _)| start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_sequences([vec![1, 2], vec![5, 6], vec![10], vec![2, 1]]).unwrap()
    }

    #[test]
    fn test_scan_reports_every_match() {
        let dictionary = dictionary();
        let scanner = MatchScanner::new(&dictionary);
        let document = [1, 2, 1, 2, 5, 6];

        assert_eq!(scanner.scan(&document, 2).collect::<Vec<_>>(), vec![0, 1, 2, 4]);
        assert!(scanner.scan(&document, 1).next().is_none());
    }

    #[test]
    fn test_scan_span_longer_than_document() {
        let dictionary = dictionary();
        let scanner = MatchScanner::new(&dictionary);

        assert_eq!(scanner.scan(&[1], 2).count(), 0);
        assert_eq!(scanner.scan(&[], 1).count(), 0);
    }

    #[test]
    fn test_scan_zero_span() {
        let dictionary = dictionary();
        let scanner = MatchScanner::new(&dictionary);

        assert_eq!(scanner.scan(&[1, 2, 10], 0).count(), 0);
    }

    #[test]
    fn test_scan_last_position() {
        let dictionary = dictionary();
        let scanner = MatchScanner::new(&dictionary);
        let document: Vec<Token> = (1..=10).collect();

        assert_eq!(scanner.scan(&document, 1).collect::<Vec<_>>(), vec![9]);
        assert_eq!(scanner.scan(&document, 2).collect::<Vec<_>>(), vec![0, 4]);
    }
}
