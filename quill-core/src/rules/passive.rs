//! Passive-voice detection

use super::{joined, only_space_between, tokenize, RuleEngine, RuleMatch};
use crate::error::RuleError;
use std::collections::HashSet;

/// A form of "to be" directly followed by a past participle
#[derive(Debug, Clone)]
pub struct PassiveVoice {
    auxiliaries: HashSet<String>,
    irregulars: HashSet<String>,
}

impl PassiveVoice {
    /// Build from auxiliary verbs and irregular participles
    pub fn new(auxiliaries: &[String], irregular_participles: &[String]) -> Self {
        let lower = |words: &[String]| -> HashSet<String> {
            words.iter().map(|w| w.to_lowercase()).collect()
        };
        Self {
            auxiliaries: lower(auxiliaries),
            irregulars: lower(irregular_participles),
        }
    }

    fn is_participle(&self, word: &str) -> bool {
        (word.len() > 3 && word.ends_with("ed")) || self.irregulars.contains(word)
    }
}

impl RuleEngine for PassiveVoice {
    fn find(&self, text: &str) -> Result<Vec<RuleMatch>, RuleError> {
        let tokens = tokenize(text);
        let mut matches = Vec::new();

        for pair in tokens.windows(2) {
            let (aux, verb) = (&pair[0], &pair[1]);
            if !self.auxiliaries.contains(&aux.text.to_lowercase()) {
                continue;
            }
            if !self.is_participle(&verb.text.to_lowercase()) {
                continue;
            }
            if !only_space_between(text, aux, verb) {
                continue;
            }

            matches.push(RuleMatch {
                text: joined(text, aux, verb).to_string(),
                start: aux.start,
                end: verb.end,
            });
        }

        Ok(matches)
    }
}
