//! Lexical illusion: the same word twice in a row

use super::{joined, only_space_between, tokenize, RuleEngine, RuleMatch};
use crate::error::RuleError;

/// Flags a word immediately repeated across whitespace
#[derive(Debug, Default, Clone, Copy)]
pub struct Repetition;

impl Repetition {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }
}

impl RuleEngine for Repetition {
    fn find(&self, text: &str) -> Result<Vec<RuleMatch>, RuleError> {
        let tokens = tokenize(text);
        let mut matches = Vec::new();
        let mut i = 0;

        while i + 1 < tokens.len() {
            let (first, second) = (&tokens[i], &tokens[i + 1]);
            if first.text.to_lowercase() == second.text.to_lowercase()
                && only_space_between(text, first, second)
            {
                matches.push(RuleMatch {
                    text: joined(text, first, second).to_string(),
                    start: first.start,
                    end: second.end,
                });
                // Matches never share a word
                i += 2;
            } else {
                i += 1;
            }
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_word() {
        let matches = Repetition::new().find("Paris in the the spring.").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "the the");
        assert_eq!((matches[0].start, matches[0].end), (9, 16));
    }

    #[test]
    fn test_case_insensitive() {
        let matches = Repetition::new().find("The the end.").unwrap();
        assert_eq!(matches[0].text, "The the");
    }

    #[test]
    fn test_triple_repeat_does_not_overlap() {
        let matches = Repetition::new().find("no no no").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start, matches[0].end), (0, 5));
    }

    #[test]
    fn test_punctuation_between_is_fine() {
        assert!(Repetition::new().find("Well, well.").unwrap().is_empty());
    }

    #[test]
    fn test_line_break_counts_as_space() {
        let matches = Repetition::new().find("and\tand").unwrap();
        assert_eq!(matches.len(), 1);
    }
}
