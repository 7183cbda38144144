//! Engine error types

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A partition range does not fit the corpus
    #[error("invalid partition [{begin}, {end}) for a corpus of {len} documents")]
    InvalidPartition {
        /// First document index of the range
        begin: usize,
        /// One past the last document index of the range
        end: usize,
        /// Number of documents in the corpus
        len: usize,
    },

    /// Thread pool could not be built
    #[error("thread pool construction failed: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EngineError::InvalidPartition {
            begin: 4,
            end: 2,
            len: 10,
        };
        assert_eq!(
            error.to_string(),
            "invalid partition [4, 2) for a corpus of 10 documents"
        );

        let error = EngineError::ThreadPool("no threads".into());
        assert_eq!(error.to_string(), "thread pool construction failed: no threads");
    }
}
