//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tokselect_api::{CorpusFormat, Dictionary, Document};

/// Reads corpus and dictionary files in JSON or text layout
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a corpus, layout chosen by extension
    pub fn read_corpus(path: &Path) -> Result<Vec<Document>> {
        let content = Self::read_text(path)?;
        let documents = CorpusFormat::from_path(path)
            .parse_documents(&content)
            .with_context(|| format!("Failed to parse corpus: {}", path.display()))?;

        log::debug!("{}: {} documents", path.display(), documents.len());
        Ok(documents)
    }

    /// Read and register a dictionary file
    pub fn read_dictionary(path: &Path) -> Result<Dictionary> {
        let dictionary = tokselect_api::load_dictionary(path)
            .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;

        log::info!(
            "Loaded {} n-grams from {} (spans {:?})",
            dictionary.len(),
            path.display(),
            dictionary.spans()
        );
        Ok(dictionary)
    }
}
