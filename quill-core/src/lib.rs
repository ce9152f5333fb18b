//! Prose style analysis
//!
//! Text is split into sentence-level chunks, every chunk runs through an
//! ordered chain of analyzers (concurrently across chunks), each match is
//! written back into the text as an inline marker, and the chunks are
//! reassembled into an annotated document with a score and statistics.
//!
//! ```
//! use quill_core::{Label, StyleChecker};
//!
//! let checker = StyleChecker::builder().brackets().build()?;
//! let report = checker.check("This is fine. So this happened.")?;
//!
//! assert_eq!(report.counts.get(Label::StartsWith), 1);
//! assert_eq!(report.document, "This is fine. [So](startswith) this happened.");
//! # Ok::<(), quill_core::EngineError>(())
//! ```

pub mod aggregator;
pub mod analyzer;
pub mod annotator;
pub mod chunker;
pub mod classifier;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;
pub mod rules;
pub mod types;

// Re-export key types
pub use aggregator::{aggregate, Aggregator, LabelCounts, ReadingTime, Report, AVERAGE_READING_SPEED};
pub use analyzer::{Analyzer, Pipeline};
pub use annotator::{Annotator, BracketMarkup, CharNode, CharNodes, HtmlMarkup, Markup};
pub use chunker::{chunk_text, SentenceChunker};
pub use config::{EngineConfig, LengthThresholds};
pub use error::{ConfigError, EngineError, PipelineError, Result, RuleError};
pub use executor::{ExecutionMode, Executor};
pub use input::{normalize_quotes, Input};
pub use processor::{check_text, StyleChecker, StyleCheckerBuilder};
pub use rules::{builtin_rules, RuleEngine, RuleMatch, RuleSet};
pub use types::{Chunk, Label, Match, Span, Summary};
