//! Markdown output formatter

use super::{count_breakdown, OutputFormatter};
use anyhow::Result;
use quill_core::Report;
use std::io::Write;

/// Markdown formatter - annotated document plus a findings table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    total_score: usize,
    documents: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total_score: 0,
            documents: 0,
        }
    }
}

/// Pipes would break the table row
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        self.documents += 1;
        self.total_score += report.score;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for paragraph in &report.paragraphs {
            writeln!(self.writer, "> {paragraph}")?;
            writeln!(self.writer, ">")?;
        }
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "*{} sentences, {} words, {} to read*",
            report.summary.sentences, report.summary.words, report.reading_time
        )?;
        writeln!(self.writer)?;

        let breakdown = count_breakdown(&report.counts);
        if breakdown.is_empty() {
            writeln!(self.writer, "No issues found.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Sentence | Category | Text | Message |")?;
        writeln!(self.writer, "|---|---|---|---|")?;
        for chunk in &report.chunks {
            for m in &chunk.matches {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} |",
                    chunk.index + 1,
                    m.label,
                    table_cell(&m.text),
                    table_cell(&m.message)
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Documents: {}, total score: {}*",
            self.documents, self.total_score
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::StyleChecker;

    fn render(text: &str) -> String {
        let checker = StyleChecker::builder().brackets().build().unwrap();
        let report = checker.check(text).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_report("doc.txt", &report).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_findings_table() {
        let output = render("This is fine. So this happened.");

        assert!(output.starts_with("## doc.txt\n"));
        assert!(output.contains("> This is fine. [So](startswith) this happened."));
        assert!(output.contains("| 2 | startswith | So |"));
        assert!(output.contains("*Documents: 1, total score: 1*"));
    }

    #[test]
    fn test_clean_document() {
        let output = render("Hello world");
        assert!(output.contains("No issues found."));
        assert!(!output.contains("| Sentence |"));
    }

    #[test]
    fn test_table_cell_escapes_pipes() {
        assert_eq!(table_cell("a|b\nc"), "a\\|b c");
    }
}
