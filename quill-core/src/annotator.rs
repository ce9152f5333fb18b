//! Inline annotation of analyzed chunks
//!
//! The chunk text is split into one [`CharNode`] per Unicode scalar value,
//! the same unit match offsets are counted in. Each match attaches an open
//! marker before its first node and a close marker after its last node;
//! serializing the nodes yields the annotated text.
//!
//! Markers are attached outermost first and closed in reverse, so nested
//! and adjacent spans produce well-formed markup. Two spans that cross
//! cannot nest: the later match of such a pair is annotated over the whole
//! chunk instead, as are spans that are empty or fall outside the text.

use crate::{
    analyzer::Analyzer,
    types::{Chunk, Label, Match, Span},
};
use std::fmt;
use std::sync::Arc;

/// Marker vocabulary used for annotations and paragraph wrapping
pub trait Markup: Send + Sync {
    /// Marker opening a match
    fn open(&self, label: Label, message: &str) -> String;

    /// Marker closing a match
    fn close(&self, label: Label) -> String;

    /// Marker opening a paragraph
    fn paragraph_open(&self) -> &str;

    /// Marker closing a paragraph
    fn paragraph_close(&self) -> &str;

    /// Text placed between two paragraphs
    fn paragraph_separator(&self) -> &str;

    /// Append one source character
    fn push_char(&self, out: &mut String, ch: char) {
        out.push(ch);
    }
}

/// HTML spans carrying the label as a class and the message as `data-msg`
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn open(&self, label: Label, message: &str) -> String {
        format!(
            "<span class=\"type-{}\" data-msg=\"{}\">",
            label,
            escape_html(message)
        )
    }

    fn close(&self, _label: Label) -> String {
        "</span>".to_string()
    }

    fn paragraph_open(&self) -> &str {
        "<p>"
    }

    fn paragraph_close(&self) -> &str {
        "</p>"
    }

    fn paragraph_separator(&self) -> &str {
        "\n"
    }

    fn push_char(&self, out: &mut String, ch: char) {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Plain-text brackets: `[flagged text](label)`
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketMarkup;

impl Markup for BracketMarkup {
    fn open(&self, _label: Label, _message: &str) -> String {
        "[".to_string()
    }

    fn close(&self, label: Label) -> String {
        format!("]({label})")
    }

    fn paragraph_open(&self) -> &str {
        ""
    }

    fn paragraph_close(&self) -> &str {
        ""
    }

    fn paragraph_separator(&self) -> &str {
        "\n\n"
    }
}

/// Escape text for use inside an HTML attribute value
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One character plus the markers spliced around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharNode {
    /// The source character
    pub ch: char,
    /// Markers emitted before the character, in attachment order
    pub before: Vec<String>,
    /// Markers emitted after the character, in attachment order
    pub after: Vec<String>,
}

impl CharNode {
    fn new(ch: char) -> Self {
        Self {
            ch,
            before: Vec::new(),
            after: Vec::new(),
        }
    }
}

/// Indexable character sequence of one chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharNodes {
    nodes: Vec<CharNode>,
}

impl CharNodes {
    /// One node per character of `text`
    pub fn from_text(text: &str) -> Self {
        Self {
            nodes: text.chars().map(CharNode::new).collect(),
        }
    }

    /// Number of nodes, equal to the number of source characters
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for empty text
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index`
    pub fn get(&self, index: usize) -> Option<&CharNode> {
        self.nodes.get(index)
    }

    /// Splice `marker` before the node at `index`; false when out of range
    pub fn insert_before(&mut self, index: usize, marker: String) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.before.push(marker);
                true
            }
            None => false,
        }
    }

    /// Splice `marker` after the node at `index`; false when out of range
    pub fn insert_after(&mut self, index: usize, marker: String) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.after.push(marker);
                true
            }
            None => false,
        }
    }

    /// Serialize nodes in index order
    pub fn render(&self, markup: &dyn Markup) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            for marker in &node.before {
                out.push_str(marker);
            }
            markup.push_char(&mut out, node.ch);
            for marker in &node.after {
                out.push_str(marker);
            }
        }
        out
    }
}

/// Where a match is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Around the whole chunk
    Whole,
    /// Around the characters in the span
    Span(Span),
}

/// Resolve each match to a placement, in match order
///
/// Spans that are empty, run past `len`, or cross an earlier accepted span
/// become [`Placement::Whole`].
pub fn placements(matches: &[Match], len: usize) -> Vec<Placement> {
    let mut accepted: Vec<Span> = Vec::new();

    matches
        .iter()
        .map(|m| {
            let Some(span) = m.indices else {
                return Placement::Whole;
            };
            if span.is_empty() || span.end > len {
                log::debug!("{} span {:?} outside text of {} chars", m.label, span, len);
                return Placement::Whole;
            }
            if accepted.iter().any(|other| other.crosses(&span)) {
                log::debug!("{} span {:?} crosses an earlier match", m.label, span);
                return Placement::Whole;
            }
            accepted.push(span);
            Placement::Span(span)
        })
        .collect()
}

/// Terminal pipeline stage replacing chunk text with annotated text
#[derive(Clone)]
pub struct Annotator {
    markup: Arc<dyn Markup>,
}

impl Annotator {
    /// Create with the given markup
    pub fn new(markup: Arc<dyn Markup>) -> Self {
        Self { markup }
    }

    /// HTML span annotations
    pub fn html() -> Self {
        Self::new(Arc::new(HtmlMarkup))
    }

    /// Annotate `chunk`; must run once, after every detector
    pub fn annotate(&self, mut chunk: Chunk) -> Chunk {
        let mut nodes = CharNodes::from_text(&chunk.text);
        let len = nodes.len();

        let mut order: Vec<(usize, Placement)> =
            placements(&chunk.matches, len).into_iter().enumerate().collect();
        // Outermost first: whole-chunk matches, then by start, longer spans first
        order.sort_by_key(|(_, placement)| match placement {
            Placement::Whole => (0, 0, 0),
            Placement::Span(span) => (1, span.start, usize::MAX - span.end),
        });

        if nodes.is_empty() {
            // Nothing to wrap; keep the markers paired
            let mut out = String::new();
            for (i, _) in &order {
                let m = &chunk.matches[*i];
                out.push_str(&self.markup.open(m.label, &m.message));
            }
            for (i, _) in order.iter().rev() {
                out.push_str(&self.markup.close(chunk.matches[*i].label));
            }
            chunk.text = out;
            return chunk;
        }

        for (i, placement) in &order {
            let m = &chunk.matches[*i];
            let start = match placement {
                Placement::Whole => 0,
                Placement::Span(span) => span.start,
            };
            nodes.insert_before(start, self.markup.open(m.label, &m.message));
        }
        for (i, placement) in order.iter().rev() {
            let last = match placement {
                Placement::Whole => len - 1,
                Placement::Span(span) => span.end - 1,
            };
            nodes.insert_after(last, self.markup.close(chunk.matches[*i].label));
        }

        chunk.text = nodes.render(self.markup.as_ref());
        chunk
    }
}

impl fmt::Debug for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotator").finish_non_exhaustive()
    }
}

impl Analyzer for Annotator {
    fn name(&self) -> &str {
        "annotator"
    }

    fn process(&self, chunk: Chunk) -> Chunk {
        self.annotate(chunk)
    }

    fn rewrites_text(&self) -> bool {
        true
    }
}
