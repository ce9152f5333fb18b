//! Rule-set configuration
//!
//! Rule data lives in TOML. The English set is embedded at compile time and
//! parsed once; custom sets can be loaded from disk.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const BUILTIN_ENGLISH: &str = include_str!("../../configs/rules/english.toml");

static BUILTIN: OnceLock<Result<RuleSet, String>> = OnceLock::new();

/// Complete rule data for every analyzer category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub metadata: MetadataConfig,
    pub passive: PassiveConfig,
    pub weasel: LexiconConfig,
    pub wordy: LexiconConfig,
    pub adverb: LexiconConfig,
    pub cliche: LexiconConfig,
    pub illusion: MessageConfig,
    pub length: LengthMessages,
    pub startswith: StartsWithMessages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveConfig {
    pub message: String,
    pub auxiliaries: Vec<String>,
    #[serde(default)]
    pub irregular_participles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub message: String,
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageConfig {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthMessages {
    pub long_message: String,
    pub very_long_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartsWithMessages {
    pub so_message: String,
    pub there_message: String,
}

impl RuleSet {
    /// Parse and validate a rule set from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: RuleSet = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load a rule set from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Check messages are present and term lists hold no blank entries
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata.code.trim().is_empty() {
            return Err(ConfigError::Invalid("metadata.code is empty".to_string()));
        }

        let messages = [
            ("passive.message", &self.passive.message),
            ("weasel.message", &self.weasel.message),
            ("wordy.message", &self.wordy.message),
            ("adverb.message", &self.adverb.message),
            ("cliche.message", &self.cliche.message),
            ("illusion.message", &self.illusion.message),
            ("length.long_message", &self.length.long_message),
            ("length.very_long_message", &self.length.very_long_message),
            ("startswith.so_message", &self.startswith.so_message),
            ("startswith.there_message", &self.startswith.there_message),
        ];
        for (key, message) in messages {
            if message.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} is empty")));
            }
        }

        let lists = [
            ("passive.auxiliaries", &self.passive.auxiliaries),
            ("passive.irregular_participles", &self.passive.irregular_participles),
            ("weasel.terms", &self.weasel.terms),
            ("wordy.terms", &self.wordy.terms),
            ("adverb.terms", &self.adverb.terms),
            ("cliche.terms", &self.cliche.terms),
        ];
        for (key, terms) in lists {
            if let Some(pos) = terms.iter().position(|t| t.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "{key} has a blank entry at position {pos}"
                )));
            }
        }

        Ok(())
    }
}

/// The embedded English rule set
pub fn builtin_rules() -> Result<&'static RuleSet, ConfigError> {
    BUILTIN
        .get_or_init(|| RuleSet::from_toml_str(BUILTIN_ENGLISH).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ConfigError::Invalid(format!("built-in rule set: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_load() {
        let rules = builtin_rules().expect("built-in rules should parse");
        assert_eq!(rules.metadata.code, "en");
        assert!(rules.passive.auxiliaries.contains(&"was".to_string()));
        assert!(rules.weasel.terms.contains(&"very".to_string()));
        assert!(rules.cliche.terms.len() > 100);
        assert!(rules.adverb.message.contains("{match}"));
    }

    #[test]
    fn test_builtin_rules_are_cached() {
        let first = builtin_rules().unwrap();
        let second = builtin_rules().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_toml_round_trip() {
        let rules = builtin_rules().unwrap();
        let text = rules.to_toml_string().unwrap();
        let back = RuleSet::from_toml_str(&text).unwrap();
        assert_eq!(&back, rules);
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut rules = builtin_rules().unwrap().clone();
        rules.illusion.message = "  ".to_string();
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("illusion.message"));
    }

    #[test]
    fn test_blank_term_rejected() {
        let mut rules = builtin_rules().unwrap().clone();
        rules.wordy.terms.push(String::new());
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = RuleSet::from_toml_str("[metadata\ncode = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = RuleSet::from_file(Path::new("/no/such/rules.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
