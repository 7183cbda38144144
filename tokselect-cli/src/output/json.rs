//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tokselect_api::{Document, Metadata, Output};

/// JSON formatter - outputs one object per input file as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sources: Vec<SourceData>,
    include_metadata: bool,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceData {
    /// Input file the documents came from
    pub source: String,
    /// Filtered documents
    pub documents: Vec<Document>,
    /// Pass statistics, when requested
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<Metadata>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sources: Vec::new(),
            include_metadata: false,
            pretty: true,
        }
    }

    /// Attach per-file metadata to each entry
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_source(&mut self, source: &str, output: &Output) -> Result<()> {
        self.sources.push(SourceData {
            source: source.to_string(),
            documents: output.documents.clone(),
            metadata: self.include_metadata.then(|| output.metadata.clone()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sources)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sources)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> Output {
        Output {
            documents: vec![vec![3, 4], vec![]],
            metadata: Metadata {
                documents: 2,
                tokens_in: 5,
                tokens_out: 2,
                ..Metadata::default()
            },
        }
    }

    #[test]
    fn test_sources_array() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter.format_source("a.txt", &sample_output()).unwrap();
        formatter.format_source("b.txt", &sample_output()).unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<SourceData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].source, "a.txt");
        assert_eq!(parsed[1].documents, vec![vec![3, 4], vec![]]);
        assert!(parsed[0].metadata.is_none());
    }

    #[test]
    fn test_metadata_included() {
        let mut formatter = JsonFormatter::new(Vec::new()).with_metadata(true);
        formatter.format_source("a.txt", &sample_output()).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["metadata"]["tokens_in"], 5);
    }
}
