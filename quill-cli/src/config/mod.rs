//! Configuration module
//!
//! Optional TOML file passed with `--config`. Every section and key may be
//! omitted; command-line flags take precedence over file values.

use anyhow::{Context, Result};
use quill_core::LengthThresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rule set file replacing the built-in English rules
    pub rules: Option<PathBuf>,

    /// Convert typographic quotes before analysis
    pub normalize_quotes: bool,

    /// Characters above which a sentence is long
    pub long_sentence: usize,

    /// Characters above which a sentence is very long
    pub very_long_sentence: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let length = LengthThresholds::default();
        Self {
            rules: None,
            normalize_quotes: true,
            long_sentence: length.long,
            very_long_sentence: length.very_long,
        }
    }
}

impl AnalysisConfig {
    /// Length limits for the engine
    pub fn length_thresholds(&self) -> LengthThresholds {
        LengthThresholds {
            long: self.long_sentence,
            very_long: self.very_long_sentence,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Sentence count at which analysis goes parallel
    pub adaptive_threshold: usize,

    /// Wall-clock budget per document in seconds (0 = none)
    pub timeout_secs: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            adaptive_threshold: 2,
            timeout_secs: 0,
        }
    }
}

impl PerformanceConfig {
    /// Thread count for the engine, `None` meaning auto
    pub fn threads(&self) -> Option<usize> {
        (self.worker_threads > 0).then_some(self.worker_threads)
    }

    /// Analysis budget, `None` meaning unbounded
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
