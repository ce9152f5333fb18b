//! Style checker facade and builder
//!
//! Ties the stages together: chunk on the calling thread, run the pipeline
//! over every chunk through the selected executor, then aggregate.

use crate::{
    aggregator::{Aggregator, Report},
    analyzer::{Analyzer, Pipeline},
    annotator::{BracketMarkup, HtmlMarkup, Markup},
    chunker::SentenceChunker,
    config::{EngineConfig, LengthThresholds},
    error::Result,
    executor::{auto_select, run_with_deadline, ExecutionMode, Executor, SequentialExecutor},
    input::{normalize_quotes, Input},
    rules::{builtin_rules, RuleSet},
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Main style checker
pub struct StyleChecker {
    pipeline: Arc<Pipeline>,
    aggregator: Aggregator,
    config: EngineConfig,
    normalize_quotes: bool,
    sequential: Arc<SequentialExecutor>,
    #[cfg(feature = "parallel")]
    parallel: Arc<ParallelExecutor>,
}

impl std::fmt::Debug for StyleChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleChecker")
            .field("pipeline", &self.pipeline)
            .field("config", &self.config)
            .field("normalize_quotes", &self.normalize_quotes)
            .finish()
    }
}

impl StyleChecker {
    /// Checker with the built-in English rules and HTML markup
    pub fn new() -> Result<Self> {
        StyleCheckerBuilder::new().build()
    }

    /// Start configuring a checker
    pub fn builder() -> StyleCheckerBuilder {
        StyleCheckerBuilder::new()
    }

    /// Check `text` with the configured execution mode
    pub fn check(&self, text: &str) -> Result<Report> {
        self.check_with_mode(text, self.config.execution_mode)
    }

    /// Read and check `input`
    pub fn check_input(&self, input: Input) -> Result<Report> {
        let text = input.to_text()?;
        self.check(&text)
    }

    /// Check `text` with a specific execution mode
    pub fn check_with_mode(&self, text: &str, mode: ExecutionMode) -> Result<Report> {
        let start = Instant::now();
        let text = if self.normalize_quotes {
            normalize_quotes(text)
        } else {
            text.into()
        };

        let (chunks, summary) = SentenceChunker::new().chunk(&text);
        let mode = match mode {
            ExecutionMode::Adaptive => self.select_mode(chunks.len()),
            other => other,
        };
        log::debug!("checking {} chunks in {:?} mode", chunks.len(), mode);

        let executor = self.executor(mode);
        let pipeline = Arc::clone(&self.pipeline);
        let processed = run_with_deadline(self.config.timeout, move || {
            executor.run(chunks, &pipeline)
        })?;

        let report = self.aggregator.aggregate(processed, summary);
        log::info!(
            "checked {} sentences in {:.2?}, score {}",
            summary.sentences,
            start.elapsed(),
            report.score
        );
        Ok(report)
    }

    /// The mode adaptive execution picks for `chunk_count` chunks
    pub fn select_mode(&self, chunk_count: usize) -> ExecutionMode {
        auto_select(chunk_count, self.config.adaptive_threshold)
    }

    /// Engine configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The analyzer chain
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    fn executor(&self, mode: ExecutionMode) -> Arc<dyn Executor> {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel.clone(),
            _ => self.sequential.clone(),
        }
    }
}

/// Builder for [`StyleChecker`]
pub struct StyleCheckerBuilder {
    config: EngineConfig,
    rules: Option<RuleSet>,
    rules_path: Option<PathBuf>,
    markup: Arc<dyn Markup>,
    analyzers: Option<Vec<Box<dyn Analyzer>>>,
    normalize_quotes: bool,
}

impl Default for StyleCheckerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCheckerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            rules: None,
            rules_path: None,
            markup: Arc::new(HtmlMarkup),
            analyzers: None,
            normalize_quotes: true,
        }
    }

    /// Replace the whole engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Chunk count at which adaptive mode goes parallel
    pub fn adaptive_threshold(mut self, chunks: usize) -> Self {
        self.config.adaptive_threshold = chunks;
        self
    }

    /// Budget for the whole analysis
    pub fn timeout(mut self, budget: Option<Duration>) -> Self {
        self.config.timeout = budget;
        self
    }

    /// Sentence length limits
    pub fn length_thresholds(mut self, thresholds: LengthThresholds) -> Self {
        self.config.length = thresholds;
        self
    }

    /// Use a rule set instead of the built-in one
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self.rules_path = None;
        self
    }

    /// Load the rule set from a TOML file at build time
    pub fn rules_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.rules_path = Some(path.into());
        self.rules = None;
        self
    }

    /// Annotation and paragraph markup
    pub fn markup(mut self, markup: Arc<dyn Markup>) -> Self {
        self.markup = markup;
        self
    }

    /// HTML span markup
    pub fn html(self) -> Self {
        self.markup(Arc::new(HtmlMarkup))
    }

    /// Plain-text bracket markup
    pub fn brackets(self) -> Self {
        self.markup(Arc::new(BracketMarkup))
    }

    /// Replace the standard analyzer chain
    pub fn analyzers(mut self, analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        self.analyzers = Some(analyzers);
        self
    }

    /// Convert typographic quotes before chunking
    pub fn normalize_quotes(mut self, enabled: bool) -> Self {
        self.normalize_quotes = enabled;
        self
    }

    /// Use sequential configuration preset
    pub fn sequential(self) -> Self {
        let length = self.config.length;
        self.config(EngineConfig {
            length,
            ..EngineConfig::sequential()
        })
    }

    /// Use parallel configuration preset
    pub fn parallel(self) -> Self {
        let length = self.config.length;
        self.config(EngineConfig {
            length,
            ..EngineConfig::parallel()
        })
    }

    /// Build the checker
    pub fn build(self) -> Result<StyleChecker> {
        let pipeline = match self.analyzers {
            Some(analyzers) => Pipeline::new(analyzers)?,
            None => {
                let loaded;
                let rules = match (&self.rules, &self.rules_path) {
                    (Some(rules), _) => rules,
                    (None, Some(path)) => {
                        loaded = RuleSet::from_file(path)?;
                        &loaded
                    }
                    (None, None) => builtin_rules()?,
                };
                Pipeline::standard(rules, self.config.length, Arc::clone(&self.markup))?
            }
        };
        log::debug!("pipeline: {}", pipeline.names().join(" -> "));

        Ok(StyleChecker {
            pipeline: Arc::new(pipeline),
            aggregator: Aggregator::new(self.markup),
            #[cfg(feature = "parallel")]
            parallel: Arc::new(ParallelExecutor::new(self.config.effective_threads())?),
            sequential: Arc::new(SequentialExecutor),
            config: self.config,
            normalize_quotes: self.normalize_quotes,
        })
    }
}

/// Check `text` with the default checker
pub fn check_text(text: &str) -> Result<Report> {
    StyleChecker::new()?.check(text)
}
