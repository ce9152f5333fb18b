//! Sentence length check

use super::Analyzer;
use crate::{
    config::LengthThresholds,
    rules::config::LengthMessages,
    types::{Chunk, Label, Match},
};

/// Flags chunks whose character count passes a threshold; the match has no span
#[derive(Debug, Clone)]
pub struct LengthAnalyzer {
    thresholds: LengthThresholds,
    long_message: String,
    very_long_message: String,
}

impl LengthAnalyzer {
    /// Create with the given limits and messages
    pub fn new(thresholds: LengthThresholds, messages: &LengthMessages) -> Self {
        Self {
            thresholds,
            long_message: messages.long_message.clone(),
            very_long_message: messages.very_long_message.clone(),
        }
    }
}

impl Analyzer for LengthAnalyzer {
    fn name(&self) -> &str {
        Label::Length.as_str()
    }

    fn process(&self, mut chunk: Chunk) -> Chunk {
        let len = chunk.char_len();
        if len > self.thresholds.very_long {
            chunk.push_match(Match::whole(Label::Length, self.very_long_message.as_str()));
        } else if len > self.thresholds.long {
            chunk.push_match(Match::whole(Label::Length, self.long_message.as_str()));
        }
        chunk
    }
}
