//! Shared data model passed between chunker, analyzers and aggregator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag identifying which analyzer produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Passive-voice construction
    Passive,
    /// Vague qualifier
    Weasel,
    /// Verbose phrase with a simpler equivalent
    Wordy,
    /// Adverb usage
    Adverb,
    /// Cliché phrase
    Cliche,
    /// Immediately repeated word
    Illusion,
    /// Overlong sentence
    Length,
    /// Weak sentence opener
    #[serde(rename = "startswith")]
    StartsWith,
}

impl Label {
    /// Every category, in report order
    pub const ALL: [Label; 8] = [
        Label::Passive,
        Label::Weasel,
        Label::Wordy,
        Label::Adverb,
        Label::Cliche,
        Label::Illusion,
        Label::Length,
        Label::StartsWith,
    ];

    /// Stable tag used in markup and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Passive => "passive",
            Label::Weasel => "weasel",
            Label::Wordy => "wordy",
            Label::Adverb => "adverb",
            Label::Cliche => "cliche",
            Label::Illusion => "illusion",
            Label::Length => "length",
            Label::StartsWith => "startswith",
        }
    }

    /// Position in [`Label::ALL`]
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Parse a tag produced by [`Label::as_str`]
    pub fn from_tag(tag: &str) -> Option<Label> {
        Label::ALL.iter().copied().find(|l| l.as_str() == tag)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open `[start, end)` span in Unicode scalar values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// First character of the span
    pub start: usize,
    /// One past the last character
    pub end: usize,
}

impl Span {
    /// Create a span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for zero-width spans
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `self` and `other` overlap without one containing the other
    pub fn crosses(&self, other: &Span) -> bool {
        (self.start < other.start && other.start < self.end && self.end < other.end)
            || (other.start < self.start && self.start < other.end && other.end < self.end)
    }
}

/// One flagged span (or whole-chunk finding) inside a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The exact matched substring; empty for whole-chunk findings
    pub text: String,
    /// The analyzer category
    pub label: Label,
    /// Character span into the chunk text, `None` when the match covers the chunk
    pub indices: Option<Span>,
    /// Human-readable explanation
    pub message: String,
}

impl Match {
    /// A match over a specific span
    pub fn spanned(text: impl Into<String>, label: Label, span: Span, message: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label,
            indices: Some(span),
            message: message.into(),
        }
    }

    /// A match applying to the whole chunk
    pub fn whole(label: Label, message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            label,
            indices: None,
            message: message.into(),
        }
    }
}

/// One sentence-level unit of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position among all chunks of the document
    pub index: usize,
    /// Exact source text, replaced by annotated text at the end of the pipeline
    pub text: String,
    /// Leading alphanumeric run
    pub first_word: String,
    /// True when this chunk begins a source line
    pub is_new_paragraph: bool,
    /// Findings, in insertion order
    pub matches: Vec<Match>,
    /// One point per finding
    pub score: usize,
}

impl Chunk {
    /// Create an empty chunk at `index`
    pub fn new(index: usize) -> Self {
        Self {
            index,
            text: String::new(),
            first_word: String::new(),
            is_new_paragraph: false,
            matches: Vec::new(),
            score: 0,
        }
    }

    /// Create a chunk with text; `first_word` is left empty
    pub fn with_text(index: usize, text: impl Into<String>) -> Self {
        let mut chunk = Self::new(index);
        chunk.text = text.into();
        chunk
    }

    /// Append a finding and bump the score
    pub fn push_match(&mut self, m: Match) {
        self.matches.push(m);
        self.score += 1;
    }

    /// Text length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Corpus-wide counters collected while chunking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of paragraphs (non-empty lines)
    pub paragraphs: usize,
    /// Number of chunks
    pub sentences: usize,
    /// Approximate word count
    pub words: usize,
    /// Number of characters, line breaks excluded
    pub characters: usize,
    /// Number of alphabetic characters
    pub letters: usize,
}
