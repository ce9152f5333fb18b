//! Assemble processed chunks into the final report

use crate::{
    annotator::{HtmlMarkup, Markup},
    types::{Chunk, Label, Summary},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Average reading speed in words per minute
pub const AVERAGE_READING_SPEED: usize = 275;

/// Match counts for every category; absent categories read as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Label, usize>", into = "BTreeMap<Label, usize>")]
pub struct LabelCounts([usize; 8]);

impl LabelCounts {
    /// Count for `label`
    pub fn get(&self, label: Label) -> usize {
        self.0[label.ordinal()]
    }

    /// Add one match
    pub fn increment(&mut self, label: Label) {
        self.0[label.ordinal()] += 1;
    }

    /// Sum over every category
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Every category with its count, in report order
    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        Label::ALL.iter().map(move |&label| (label, self.get(label)))
    }
}

impl From<BTreeMap<Label, usize>> for LabelCounts {
    fn from(map: BTreeMap<Label, usize>) -> Self {
        let mut counts = Self::default();
        for (label, count) in map {
            counts.0[label.ordinal()] = count;
        }
        counts
    }
}

impl From<LabelCounts> for BTreeMap<Label, usize> {
    fn from(counts: LabelCounts) -> Self {
        counts.iter().collect()
    }
}

/// Estimated reading time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ReadingTime {
    /// Reading time for `words` at [`AVERAGE_READING_SPEED`]
    ///
    /// Minutes are kept to two decimals; the fractional part becomes seconds.
    pub fn from_words(words: usize) -> Self {
        let centi_minutes = (words as f64 * 100.0 / AVERAGE_READING_SPEED as f64).round() as u64;
        let whole_minutes = centi_minutes / 100;

        Self {
            hours: whole_minutes / 60,
            minutes: whole_minutes % 60,
            seconds: (centi_minutes % 100) * 60 / 100,
        }
    }

    /// True when every unit is zero
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// `1 hour 2 minutes`, `45 seconds`: zero units are left out.
///
/// A zero reading time has no non-zero unit and renders as `0 seconds`
/// rather than an empty string, so reports never show a blank value.
impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0 seconds");
        }

        let units = [
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];
        let parts: Vec<String> = units
            .iter()
            .filter(|(value, _)| *value > 0)
            .map(|(value, unit)| {
                let plural = if *value == 1 { "" } else { "s" };
                format!("{value} {unit}{plural}")
            })
            .collect();

        f.write_str(&parts.join(" "))
    }
}

/// Everything the presentation layer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Annotated, paragraph-wrapped document
    pub document: String,
    /// Annotated paragraphs without wrappers
    pub paragraphs: Vec<String>,
    /// Total matches; lower is cleaner
    pub score: usize,
    /// Matches per category
    pub counts: LabelCounts,
    /// Corpus statistics
    pub summary: Summary,
    /// Estimated reading time
    pub reading_time: ReadingTime,
    /// Processed chunks ordered by index
    pub chunks: Vec<Chunk>,
}

/// Orders chunks and joins them into a [`Report`]
#[derive(Clone)]
pub struct Aggregator {
    markup: Arc<dyn Markup>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Arc::new(HtmlMarkup))
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator").finish_non_exhaustive()
    }
}

impl Aggregator {
    /// Wrap paragraphs with `markup`
    pub fn new(markup: Arc<dyn Markup>) -> Self {
        Self { markup }
    }

    /// Build the report; chunks may arrive in any order
    pub fn aggregate(&self, mut chunks: Vec<Chunk>, summary: Summary) -> Report {
        chunks.sort_by_key(|chunk| chunk.index);

        let mut paragraphs: Vec<String> = Vec::new();
        let mut score = 0;
        let mut counts = LabelCounts::default();

        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 || chunk.is_new_paragraph {
                paragraphs.push(chunk.text.clone());
            } else if let Some(current) = paragraphs.last_mut() {
                current.push_str(&chunk.text);
            }

            score += chunk.score;
            for m in &chunk.matches {
                counts.increment(m.label);
            }
        }

        let document = paragraphs
            .iter()
            .map(|p| {
                format!(
                    "{}{}{}",
                    self.markup.paragraph_open(),
                    p,
                    self.markup.paragraph_close()
                )
            })
            .collect::<Vec<_>>()
            .join(self.markup.paragraph_separator());

        log::debug!(
            "aggregated {} chunks into {} paragraphs, score {}",
            chunks.len(),
            paragraphs.len(),
            score
        );

        Report {
            document,
            paragraphs,
            score,
            counts,
            summary,
            reading_time: ReadingTime::from_words(summary.words),
            chunks,
        }
    }
}

/// Aggregate with HTML paragraph wrappers
pub fn aggregate(chunks: Vec<Chunk>, summary: Summary) -> Report {
    Aggregator::default().aggregate(chunks, summary)
}
