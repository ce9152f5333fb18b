//! Text output formatter

use super::{describe_counts, OutputFormatter};
use anyhow::Result;
use quill_core::Report;
use std::io::Write;

/// Text formatter - annotated document followed by a short summary
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        writeln!(self.writer, "==> {source} <==")?;
        if !report.document.is_empty() {
            writeln!(self.writer, "{}", report.document)?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Score: {} ({})",
            report.score,
            describe_counts(&report.counts)
        )?;
        writeln!(
            self.writer,
            "Paragraphs: {}  Sentences: {}  Words: {}  Reading time: {}",
            report.summary.paragraphs,
            report.summary.sentences,
            report.summary.words,
            report.reading_time
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
