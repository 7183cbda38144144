//! Context windows around dictionary matches

use crate::error::{CoreError, Result};
use core::ops::Range;

/// Number of extra tokens selected on each side of a match
///
/// `(0, 0)` selects the exact match only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Window {
    /// Margin before the match
    pub left: usize,
    /// Margin after the match
    pub right: usize,
}

impl Window {
    /// Exact-match window
    pub const EXACT: Window = Window { left: 0, right: 0 };

    /// Create a window with explicit margins
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Same margin on both sides
    pub const fn symmetric(margin: usize) -> Self {
        Self::new(margin, margin)
    }

    /// Build from signed margins as hosts usually pass them
    pub fn from_signed(left: i64, right: i64) -> Result<Self> {
        match (usize::try_from(left), usize::try_from(right)) {
            (Ok(l), Ok(r)) => Ok(Self::new(l, r)),
            _ => Err(CoreError::NegativeWindow { left, right }),
        }
    }

    /// Whether both margins are zero
    pub const fn is_exact(&self) -> bool {
        self.left == 0 && self.right == 0
    }

    /// Expand the match `[start, start + span)` and clamp it to `[0, len)`
    ///
    /// The match itself must lie inside the document.
    #[inline]
    pub fn expand(&self, start: usize, span: usize, len: usize) -> Range<usize> {
        if self.is_exact() {
            return start..start + span;
        }

        let from = start.saturating_sub(self.left);
        let to = start
            .saturating_add(span)
            .saturating_add(self.right)
            .min(len);
        from..to
    }
}

impl From<(usize, usize)> for Window {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_window_returns_match() {
        assert_eq!(Window::EXACT.expand(3, 2, 10), 3..5);
        assert_eq!(Window::default(), Window::EXACT);
    }

    #[test]
    fn test_expand_clamps_both_sides() {
        let window = Window::new(2, 3);
        assert_eq!(window.expand(1, 1, 10), 0..5);
        assert_eq!(window.expand(8, 1, 10), 6..10);
        assert_eq!(window.expand(4, 2, 10), 2..9);
    }

    #[test]
    fn test_one_sided_windows() {
        assert_eq!(Window::new(0, 1).expand(9, 1, 10), 9..10);
        assert_eq!(Window::new(1, 0).expand(0, 2, 10), 0..2);
        assert_eq!(Window::new(1, 0).expand(5, 2, 10), 4..7);
    }

    #[test]
    fn test_huge_margins_do_not_overflow() {
        let window = Window::symmetric(usize::MAX);
        assert_eq!(window.expand(3, 2, 10), 0..10);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(Window::from_signed(0, 2).unwrap(), Window::new(0, 2));
        assert_eq!(
            Window::from_signed(-1, 2).unwrap_err(),
            CoreError::NegativeWindow { left: -1, right: 2 }
        );
        assert!(Window::from_signed(1, -5).is_err());
    }
}
