//! Public API for n-gram based token selection
//!
//! This crate provides a clean, stable interface for keeping or removing
//! dictionary n-grams across a corpus of tokenized documents, hiding the
//! engine's execution details.
//!
//! ```rust
//! use tokselect_api::{Config, TokenSelector};
//!
//! let config = Config::builder().mode_code(1).padding(true).build().unwrap();
//! let selector = TokenSelector::from_ngrams([vec![1, 2], vec![5, 6], vec![10]], config).unwrap();
//!
//! let output = selector.select_corpus(vec![(1..=10).collect()]).unwrap();
//! assert_eq!(output.documents[0], vec![1, 2, 0, 0, 5, 6, 0, 0, 0, 10]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use std::path::Path;
use std::sync::Arc;
use tokselect_engine::CorpusProcessor;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{CorpusFormat, Input, Metadata, Output};
pub use error::ApiError;
pub use tokselect_core::{Dictionary, Document, Mode, Token, Window, PAD};
pub use tokselect_engine::ExecutionMode;

/// Main entry point for token selection
///
/// Owns one dictionary and one configuration; cheap to share across threads.
pub struct TokenSelector {
    inner: Arc<CorpusProcessor>,
    config: Config,
}

impl TokenSelector {
    /// Create a selector with the default configuration (keep, exact, compact)
    pub fn new(dictionary: Dictionary) -> Result<Self> {
        Self::with_config(dictionary, Config::default())
    }

    /// Register `ngrams` and create a selector
    pub fn from_ngrams<I, S>(ngrams: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[Token]>,
    {
        Self::with_config(Dictionary::from_sequences(ngrams)?, config)
    }

    /// Create a selector with a custom configuration
    pub fn with_config(dictionary: Dictionary, config: Config) -> Result<Self> {
        log::debug!(
            "token selector: {} n-grams, spans {:?}, mode {}, window ({}, {})",
            dictionary.len(),
            dictionary.spans(),
            config.mode().as_str(),
            config.window().left,
            config.window().right
        );

        let inner = CorpusProcessor::builder()
            .dictionary(dictionary)
            .options(*config.options())
            .engine_config(config.to_engine_config())
            .build()?;

        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Filter every document of `input`
    pub fn select(&self, input: Input) -> Result<Output> {
        self.select_with_mode(input, self.config.execution_mode())
    }

    /// Filter with an explicit execution mode
    pub fn select_with_mode(&self, input: Input, mode: ExecutionMode) -> Result<Output> {
        let corpus = input.read_corpus()?;
        let output = self.inner.process_with_mode(corpus, mode)?;

        Ok(Output {
            metadata: Metadata::from(&output.metrics),
            documents: output.documents,
        })
    }

    /// Filter documents already in memory (convenience method)
    pub fn select_corpus(&self, documents: Vec<Document>) -> Result<Output> {
        self.select(Input::from_corpus(documents))
    }

    /// Filter documents in place, returning only the statistics
    pub fn select_in_place(&self, documents: &mut [Document]) -> Result<Metadata> {
        let metrics = self.inner.process_in_place(documents)?;
        Ok(Metadata::from(&metrics))
    }

    /// Filter one document
    pub fn select_document(&self, document: Document) -> Document {
        tokselect_core::filter_document(
            document,
            self.inner.filter().dictionary(),
            *self.config.options(),
        )
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the dictionary
    pub fn dictionary(&self) -> &Dictionary {
        self.inner.filter().dictionary()
    }
}

// Convenience functions

/// Load a dictionary file, format taken from the extension
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let ngrams = CorpusFormat::from_path(path).parse_ngrams(&content)?;
    Ok(Dictionary::from_sequences(ngrams)?)
}

/// Filter `documents` against `ngrams` with the given configuration
pub fn select_tokens<I, S>(documents: Vec<Document>, ngrams: I, config: Config) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[Token]>,
{
    TokenSelector::from_ngrams(ngrams, config)?.select_corpus(documents)
}

/// Keep only the tokens matching `ngrams`
pub fn keep_tokens<I, S>(documents: Vec<Document>, ngrams: I, padding: bool) -> Result<Vec<Document>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[Token]>,
{
    let config = Config::builder().mode(Mode::Keep).padding(padding).build()?;
    Ok(select_tokens(documents, ngrams, config)?.documents)
}

/// Remove the tokens matching `ngrams`
pub fn remove_tokens<I, S>(
    documents: Vec<Document>,
    ngrams: I,
    padding: bool,
) -> Result<Vec<Document>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[Token]>,
{
    let config = Config::builder().mode(Mode::Remove).padding(padding).build()?;
    Ok(select_tokens(documents, ngrams, config)?.documents)
}
