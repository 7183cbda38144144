//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tokselect_api::Output;

/// Plain text formatter - outputs one document per line
///
/// Inputs are written back to back in the order given, so the result is
/// itself a text corpus.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_source(&mut self, _source: &str, output: &Output) -> Result<()> {
        for document in &output.documents {
            let mut tokens = document.iter();
            if let Some(first) = tokens.next() {
                write!(self.writer, "{first}")?;
                for token in tokens {
                    write!(self.writer, " {token}")?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokselect_api::Metadata;

    #[test]
    fn test_documents_one_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        let output = Output {
            documents: vec![vec![1, 2, 0, 0], vec![], vec![10]],
            metadata: Metadata::default(),
        };

        formatter.format_source("a.txt", &output).unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(text, "1 2 0 0\n\n10\n");
    }
}
