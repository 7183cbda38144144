//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tokselect_core::{Document, Token};
use tokselect_engine::ExecutionMetrics;

/// Serialized layout of a corpus or dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CorpusFormat {
    /// Array of arrays of token ids
    Json,
    /// One sequence per line, whitespace-separated token ids
    #[default]
    Text,
}

impl CorpusFormat {
    /// Pick the format from a file extension (`.json` or anything else)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CorpusFormat::Json,
            _ => CorpusFormat::Text,
        }
    }

    /// Parse a corpus; an empty line is an empty document
    pub fn parse_documents(self, content: &str) -> Result<Vec<Document>> {
        match self {
            CorpusFormat::Json => parse_json(content),
            CorpusFormat::Text => content.lines().enumerate().map(parse_line).collect(),
        }
    }

    /// Parse dictionary entries; blank lines are skipped
    pub fn parse_ngrams(self, content: &str) -> Result<Vec<Document>> {
        match self {
            CorpusFormat::Json => parse_json(content),
            CorpusFormat::Text => content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(parse_line)
                .collect(),
        }
    }
}

fn parse_line((index, line): (usize, &str)) -> Result<Document> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<Token>().map_err(|e| ApiError::InvalidInput {
                line: index + 1,
                reason: format!("'{token}' is not a token id: {e}"),
            })
        })
        .collect()
}

#[cfg(feature = "serde")]
fn parse_json(content: &str) -> Result<Vec<Document>> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(not(feature = "serde"))]
fn parse_json(_content: &str) -> Result<Vec<Document>> {
    Err(ApiError::Config(
        "JSON input requires the serde feature".to_string(),
    ))
}

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Documents already in memory
    Corpus(Vec<Document>),
    /// Serialized corpus
    Text {
        /// Serialized documents
        content: String,
        /// Layout of `content`
        format: CorpusFormat,
    },
    /// File path, format taken from the extension
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes {
        /// Serialized documents
        bytes: Vec<u8>,
        /// Layout of `bytes`
        format: CorpusFormat,
    },
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader {
        /// Source of serialized documents
        reader: Box<dyn Read>,
        /// Layout of the stream
        format: CorpusFormat,
    },
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Corpus(documents) => f.debug_tuple("Corpus").field(&documents.len()).finish(),
            Input::Text { content, format } => f
                .debug_struct("Text")
                .field("len", &content.len())
                .field("format", format)
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes { bytes, format } => f
                .debug_struct("Bytes")
                .field("len", &bytes.len())
                .field("format", format)
                .finish(),
            Input::Reader { format, .. } => f
                .debug_struct("Reader")
                .field("format", format)
                .finish_non_exhaustive(),
        }
    }
}

impl Input {
    /// Create input from in-memory documents
    pub fn from_corpus(documents: Vec<Document>) -> Self {
        Input::Corpus(documents)
    }

    /// Create input from serialized text
    pub fn from_text(content: impl Into<String>, format: CorpusFormat) -> Self {
        Input::Text {
            content: content.into(),
            format,
        }
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>, format: CorpusFormat) -> Self {
        Input::Bytes { bytes, format }
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R, format: CorpusFormat) -> Self {
        Input::Reader {
            reader: Box::new(reader),
            format,
        }
    }

    /// Read the documents from the input
    pub fn read_corpus(self) -> Result<Vec<Document>> {
        match self {
            Input::Corpus(documents) => Ok(documents),
            Input::Text { content, format } => format.parse_documents(&content),
            Input::File(path) => {
                let content = fs::read_to_string(&path)?;
                CorpusFormat::from_path(&path).parse_documents(&content)
            }
            Input::Bytes { bytes, format } => format.parse_documents(&String::from_utf8(bytes)?),
            Input::Reader { mut reader, format } => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                format.parse_documents(&buffer)
            }
        }
    }
}

impl From<Vec<Document>> for Input {
    fn from(documents: Vec<Document>) -> Self {
        Input::Corpus(documents)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Documents processed
    pub documents: usize,
    /// Tokens before filtering
    pub tokens_in: usize,
    /// Tokens after filtering
    pub tokens_out: usize,
    /// Dictionary matches found
    pub matches: usize,
    /// Documents with at least one match
    pub documents_matched: usize,
    /// Document ranges processed
    pub partitions: usize,
    /// Worker threads available
    pub thread_count: usize,
    /// Execution mode used
    pub mode_used: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in input tokens per second
    pub tokens_per_second: f64,
}

impl From<&ExecutionMetrics> for Metadata {
    fn from(metrics: &ExecutionMetrics) -> Self {
        let seconds = metrics.processing_time.as_secs_f64();
        let tokens_per_second = if seconds > 0.0 {
            metrics.stats.tokens_in as f64 / seconds
        } else {
            0.0
        };

        Self {
            documents: metrics.stats.documents,
            tokens_in: metrics.stats.tokens_in,
            tokens_out: metrics.stats.tokens_out,
            matches: metrics.stats.matches,
            documents_matched: metrics.stats.documents_matched,
            partitions: metrics.partitions,
            thread_count: metrics.threads,
            mode_used: metrics.mode_used.as_str().to_string(),
            processing_time_ms: metrics.processing_time.as_millis() as u64,
            tokens_per_second,
        }
    }
}

/// Complete output with filtered documents and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Filtered documents, in input order
    pub documents: Vec<Document>,
    /// Processing metadata
    pub metadata: Metadata,
}
