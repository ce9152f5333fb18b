//! Weak sentence openers: "so" and "there is/are"

use super::Analyzer;
use crate::{
    rules::{config::StartsWithMessages, render_message},
    types::{Chunk, Label, Match, Span},
};

/// Flags sentences opening with "so" or "there is"/"there are"
///
/// Spans are anchored at the first case-insensitive occurrence of the
/// opener's initial letter, so leading punctuation such as an opening quote
/// is tolerated.
#[derive(Debug, Clone)]
pub struct StartsWithAnalyzer {
    so_message: String,
    there_message: String,
}

impl StartsWithAnalyzer {
    /// Create with the given messages
    pub fn new(messages: &StartsWithMessages) -> Self {
        Self {
            so_message: messages.so_message.clone(),
            there_message: messages.there_message.clone(),
        }
    }

    fn opener(&self, chunk: &Chunk) -> Option<(Span, &str)> {
        let chars: Vec<char> = chunk.text.chars().collect();

        match chunk.first_word.to_lowercase().as_str() {
            "so" => {
                let start = anchor(&chars, 's')?;
                let end = (start + 2).min(chars.len());
                Some((Span::new(start, end), self.so_message.as_str()))
            }
            "there" => {
                let start = anchor(&chars, 't')?;
                let end = verb_after_there(&chars, start)?;
                Some((Span::new(start, end), self.there_message.as_str()))
            }
            _ => None,
        }
    }
}

impl Analyzer for StartsWithAnalyzer {
    fn name(&self) -> &str {
        Label::StartsWith.as_str()
    }

    fn process(&self, mut chunk: Chunk) -> Chunk {
        let Some((span, template)) = self.opener(&chunk) else {
            return chunk;
        };

        let text: String = chunk
            .text
            .chars()
            .skip(span.start)
            .take(span.len())
            .collect();
        let message = render_message(template, &text);
        chunk.push_match(Match::spanned(text, Label::StartsWith, span, message));
        chunk
    }
}

fn anchor(chars: &[char], letter: char) -> Option<usize> {
    chars.iter().position(|c| c.eq_ignore_ascii_case(&letter))
}

/// End offset of "there is"/"there are" starting at `start`
fn verb_after_there(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + "there".len();
    if !chars.get(i).is_some_and(|c| c.is_whitespace()) {
        return None;
    }
    while chars.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }

    let verb_start = i;
    while chars.get(i).is_some_and(|c| c.is_alphanumeric()) {
        i += 1;
    }

    let verb: String = chars[verb_start..i].iter().collect::<String>().to_lowercase();
    matches!(verb.as_str(), "is" | "are").then_some(i)
}
