//! Lexical rule collaborators
//!
//! Analyzers for the delegated categories call into a [`RuleEngine`], which
//! reports matched substrings with character offsets into the text it was
//! given. Offsets are counted in Unicode scalar values, the same unit the
//! chunker and annotator use.

pub mod config;
pub mod lexicon;
pub mod passive;
pub mod repetition;

pub use config::{builtin_rules, RuleSet};
pub use lexicon::Lexicon;
pub use passive::PassiveVoice;
pub use repetition::Repetition;

use crate::error::RuleError;

/// A single rule hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// The matched substring
    pub text: String,
    /// First character of the match
    pub start: usize,
    /// One past the last character
    pub end: usize,
}

/// A pure rule evaluator over one chunk of text
pub trait RuleEngine: Send + Sync {
    /// Find every match in `text`
    fn find(&self, text: &str) -> Result<Vec<RuleMatch>, RuleError>;
}

/// A word with its character span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    byte_start: usize,
    byte_end: usize,
}

/// Split `text` into alphanumeric words; an apostrophe between two
/// alphanumerics stays inside the word
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].1.is_alphanumeric() {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() {
            let ch = chars[i].1;
            let joins = ch == '\''
                && chars.get(i + 1).is_some_and(|(_, next)| next.is_alphanumeric());
            if ch.is_alphanumeric() || joins {
                i += 1;
            } else {
                break;
            }
        }

        let byte_start = chars[start].0;
        let byte_end = chars.get(i).map_or(text.len(), |(b, _)| *b);
        tokens.push(Token {
            text: &text[byte_start..byte_end],
            start,
            end: i,
            byte_start,
            byte_end,
        });
    }

    tokens
}

/// True when only whitespace separates `a` and `b`
pub(crate) fn only_space_between(text: &str, a: &Token<'_>, b: &Token<'_>) -> bool {
    let gap = &text[a.byte_end..b.byte_start];
    !gap.is_empty() && gap.chars().all(char::is_whitespace)
}

/// The substring covering `a` through `b`
pub(crate) fn joined<'a>(text: &'a str, a: &Token<'_>, b: &Token<'_>) -> &'a str {
    &text[a.byte_start..b.byte_end]
}

/// Convert a byte offset into a character offset
pub(crate) fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

/// Fill a `{match}` message template
pub fn render_message(template: &str, matched: &str) -> String {
    template.replace("{match}", matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize("It's a test, isn't it?");
        let words: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(words, vec!["It's", "a", "test", "isn't", "it"]);
        assert_eq!((tokens[3].start, tokens[3].end), (13, 18));
    }

    #[test]
    fn test_tokenize_trailing_apostrophe() {
        let tokens = tokenize("the dogs' bowls");
        let words: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(words, vec!["the", "dogs", "bowls"]);
    }

    #[test]
    fn test_tokenize_counts_scalars() {
        let tokens = tokenize("naïve café");
        assert_eq!((tokens[1].start, tokens[1].end), (6, 10));
        assert_eq!(tokens[1].text, "café");
    }

    #[test]
    fn test_char_offset() {
        assert_eq!(char_offset("héllo", 3), 2);
        assert_eq!(char_offset("hello", 5), 5);
    }

    #[test]
    fn test_render_message() {
        assert_eq!(
            render_message("\"{match}\" is an adverb.", "really"),
            "\"really\" is an adverb."
        );
    }
}
