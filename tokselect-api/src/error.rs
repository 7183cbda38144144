//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;
use tokselect_core::CoreError;
use tokselect_engine::EngineError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Dictionary or option error
    #[error("{0}")]
    Core(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed corpus or dictionary text
    #[error("invalid input at line {line}: {reason}")]
    InvalidInput {
        /// 1-based line number
        line: usize,
        /// What was wrong
        reason: String,
    },

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
