//! Whole-word and whole-phrase term matching

use super::{char_offset, RuleEngine, RuleMatch};
use crate::error::RuleError;
use regex::{Regex, RegexBuilder};

// Large phrase lists expand past the regex crate's default limit once case folding applies
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Case-insensitive matcher over a fixed term list
///
/// Terms are tried longest first so a phrase wins over any word it contains.
/// Whitespace inside a phrase matches any run of whitespace.
#[derive(Debug)]
pub struct Lexicon {
    category: String,
    matcher: Option<Result<Regex, RuleError>>,
}

impl Lexicon {
    /// Compile `terms` for `category`
    ///
    /// A pattern that fails to compile is kept as an error and reported from
    /// every [`RuleEngine::find`] call.
    pub fn new(category: impl Into<String>, terms: &[String]) -> Self {
        let category = category.into();
        let matcher = build_pattern(terms).map(|pattern| {
            RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()
                .map_err(|e| RuleError::InvalidPattern {
                    category: category.clone(),
                    reason: e.to_string(),
                })
        });

        Self { category, matcher }
    }

    /// The category name this lexicon was built for
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl RuleEngine for Lexicon {
    fn find(&self, text: &str) -> Result<Vec<RuleMatch>, RuleError> {
        let regex = match &self.matcher {
            None => return Ok(Vec::new()),
            Some(Ok(regex)) => regex,
            Some(Err(e)) => return Err(e.clone()),
        };

        Ok(regex
            .find_iter(text)
            .map(|m| RuleMatch {
                text: m.as_str().to_string(),
                start: char_offset(text, m.start()),
                end: char_offset(text, m.end()),
            })
            .collect())
    }
}

fn build_pattern(terms: &[String]) -> Option<String> {
    let mut terms: Vec<&str> = terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return None;
    }

    terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    terms.dedup();

    let alternatives: Vec<String> = terms.iter().map(|t| term_pattern(t)).collect();
    Some(alternatives.join("|"))
}

fn term_pattern(term: &str) -> String {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(term.chars().next()) { r"\b" } else { "" };
    let tail = if is_word(term.chars().last()) { r"\b" } else { "" };

    format!("(?:{lead}{body}{tail})")
}
