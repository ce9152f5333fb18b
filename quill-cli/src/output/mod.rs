//! Output formatting module

use anyhow::Result;
use quill_core::{Label, LabelCounts, Report};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report for one document
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Non-zero counts as `label N` pairs, in category order
pub(crate) fn count_breakdown(counts: &LabelCounts) -> Vec<(Label, usize)> {
    counts.iter().filter(|(_, n)| *n > 0).collect()
}

/// `passive 1, startswith 2`, or `none`
pub(crate) fn describe_counts(counts: &LabelCounts) -> String {
    let parts: Vec<String> = count_breakdown(counts)
        .into_iter()
        .map(|(label, n)| format!("{label} {n}"))
        .collect();
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}
