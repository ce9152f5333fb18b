//! Progress reporting module
//!
//! A bar is drawn only for runs over several documents; its message carries
//! the running score so noisy documents stand out while the run is going.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.green/white} {pos}/{len} documents {msg}";

/// Progress reporter for a multi-document analysis
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    enabled: bool,
    total_score: usize,
}

impl ProgressReporter {
    /// Create a reporter; `quiet` disables all drawing
    pub fn new(quiet: bool) -> Self {
        Self {
            bar: None,
            enabled: !quiet,
            total_score: 0,
        }
    }

    /// Start the bar for `documents` documents; one document gets none
    pub fn start(&mut self, documents: usize) {
        if !self.enabled || documents < 2 {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");

        let bar = ProgressBar::new(documents as u64);
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Record a checked document and its score
    pub fn document_checked(&mut self, name: &str, score: usize) {
        self.total_score += score;
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{name} (score {score})"));
            bar.inc(1);
        }
    }

    /// Sum of the scores seen so far
    pub fn total_score(&self) -> usize {
        self.total_score
    }

    /// Clear the bar and leave a one-line summary
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("done, total score {}", self.total_score));
        }
    }

    /// True when a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}
