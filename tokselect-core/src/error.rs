//! Core error types (deterministic only)

use core::fmt;

/// Core errors, all raised while building a dictionary or options
///
/// Filtering itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A dictionary entry has no tokens
    EmptyNgram {
        /// Position of the entry in the input sequence list
        index: usize,
    },
    /// A dictionary entry contains the reserved padding token
    ReservedToken {
        /// Position of the entry in the input sequence list
        index: usize,
    },
    /// Selection mode code other than 1 (keep) or 2 (remove)
    InvalidMode {
        /// The rejected code
        code: i32,
    },
    /// A window margin was negative
    NegativeWindow {
        /// Requested left margin
        left: i64,
        /// Requested right margin
        right: i64,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyNgram { index } => {
                write!(f, "dictionary entry {index} is empty")
            }
            CoreError::ReservedToken { index } => {
                write!(f, "dictionary entry {index} contains the padding token 0")
            }
            CoreError::InvalidMode { code } => {
                write!(f, "invalid selection mode {code} (expected 1 = keep, 2 = remove)")
            }
            CoreError::NegativeWindow { left, right } => {
                write!(f, "window margins must be non-negative, got ({left}, {right})")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
