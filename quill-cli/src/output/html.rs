//! HTML output formatter
//!
//! Writes a standalone page. Documents must be analyzed with
//! [`quill_core::HtmlMarkup`] so their text is already escaped.

use super::{describe_counts, OutputFormatter};
use anyhow::Result;
use quill_core::annotator::escape_html;
use quill_core::Report;
use std::io::Write;

const STYLE: &str = "\
body { font-family: Georgia, serif; max-width: 48em; margin: 2em auto; line-height: 1.6; }
span[class^=\"type-\"] { border-bottom: 2px solid; cursor: help; }
.type-passive { border-color: #4a90d9; }
.type-weasel { border-color: #d0a000; }
.type-wordy { border-color: #9b59b6; }
.type-adverb { border-color: #16a085; }
.type-cliche { border-color: #e67e22; }
.type-illusion { border-color: #c0392b; }
.type-length { background: #fdf2e9; border-color: transparent; }
.type-startswith { border-color: #7f8c8d; }
.stats { color: #666; font-size: 0.9em; }";

/// HTML formatter - one `<section>` per document
pub struct HtmlFormatter<W: Write> {
    writer: W,
    started: bool,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            started: false,
        }
    }

    fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"utf-8\">")?;
        writeln!(self.writer, "<title>quill report</title>")?;
        writeln!(self.writer, "<style>\n{STYLE}\n</style>")?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        self.start()?;

        writeln!(self.writer, "<section>")?;
        writeln!(self.writer, "<h2>{}</h2>", escape_html(source))?;
        writeln!(self.writer, "{}", report.document)?;
        writeln!(
            self.writer,
            "<p class=\"stats\">Score: {} ({}). {} sentences, {} words, {} to read.</p>",
            report.score,
            describe_counts(&report.counts),
            report.summary.sentences,
            report.summary.words,
            report.reading_time
        )?;
        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.start()?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}
