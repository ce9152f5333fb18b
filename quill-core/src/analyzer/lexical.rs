//! Analyzers backed by a rule collaborator

use super::Analyzer;
use crate::{
    rules::{render_message, RuleEngine},
    types::{Chunk, Label, Match, Span},
};

/// Runs a [`RuleEngine`] over the chunk text and records each hit under one label
pub struct RuleAnalyzer {
    label: Label,
    engine: Box<dyn RuleEngine>,
    message: String,
}

impl RuleAnalyzer {
    /// `message` may contain a `{match}` placeholder
    pub fn new(label: Label, engine: impl RuleEngine + 'static, message: impl Into<String>) -> Self {
        Self {
            label,
            engine: Box::new(engine),
            message: message.into(),
        }
    }

    /// The label attached to every match
    pub fn label(&self) -> Label {
        self.label
    }
}

impl Analyzer for RuleAnalyzer {
    fn name(&self) -> &str {
        self.label.as_str()
    }

    fn process(&self, mut chunk: Chunk) -> Chunk {
        let hits = match self.engine.find(&chunk.text) {
            Ok(hits) => hits,
            Err(e) => {
                log::warn!(
                    "{} rules failed on chunk {}, skipping: {}",
                    self.label,
                    chunk.index,
                    e
                );
                return chunk;
            }
        };

        for hit in hits {
            let message = render_message(&self.message, &hit.text);
            chunk.push_match(Match::spanned(
                hit.text,
                self.label,
                Span::new(hit.start, hit.end),
                message,
            ));
        }

        chunk
    }
}
