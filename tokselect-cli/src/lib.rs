//! Tokselect CLI library
//!
//! This library provides the command-line interface for keeping or
//! removing dictionary n-grams across tokenized corpus files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
