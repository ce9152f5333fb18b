//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_sources, Source};
use crate::output::{HtmlFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use quill_core::{ExecutionMode, StyleChecker};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Rule set file replacing the built-in English rules
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force parallel processing even for short documents
    #[arg(short, long, conflicts_with = "sequential")]
    pub parallel: bool,

    /// Force single-threaded processing
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads (default: auto)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Give up on a document after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Analyze typographic quotes as they are
    #[arg(long)]
    pub keep_smart_quotes: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Annotated text with [flagged](category) markers
    Text,
    /// Markdown report with a findings table
    Markdown,
    /// Standalone HTML page
    Html,
    /// JSON array with one report per document
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "markdown" | "md" => Some(Self::Markdown),
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// HTML markup for formats that embed markup, brackets otherwise
    fn uses_html(&self) -> bool {
        matches!(self, Self::Html | Self::Json)
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting style analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;
        let checker = self.build_checker(&config, format)?;

        let sources = resolve_sources(&self.input)?;
        log::info!("Analyzing {} document(s)", sources.len());

        let writer = self.create_writer()?;
        let mut formatter = self.create_formatter(writer, format, &config);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(sources.len());

        for source in &sources {
            let score = self.analyze_source(&checker, source, formatter.as_mut())?;
            progress.document_checked(&source.name(), score);
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Total score: {}", progress.total_score());

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }

    /// Flag first, then config file
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into()
        })
    }

    fn execution_mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else if self.sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Adaptive
        }
    }

    fn build_checker(&self, config: &CliConfig, format: OutputFormat) -> Result<StyleChecker> {
        let threads = self.threads.filter(|&n| n > 0).or(config.performance.threads());
        let timeout = match self.timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => config.performance.timeout(),
        };

        let mut builder = StyleChecker::builder()
            .execution_mode(self.execution_mode())
            .threads(threads)
            .adaptive_threshold(config.performance.adaptive_threshold)
            .timeout(timeout)
            .length_thresholds(config.analysis.length_thresholds())
            .normalize_quotes(config.analysis.normalize_quotes && !self.keep_smart_quotes);

        if let Some(rules) = self.rules.as_ref().or(config.analysis.rules.as_ref()) {
            log::info!("Using rule set: {}", rules.display());
            builder = builder.rules_file(rules.clone());
        }

        builder = if format.uses_html() {
            builder.html()
        } else {
            builder.brackets()
        };

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn create_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn create_formatter(
        &self,
        writer: Box<dyn Write + Send + Sync>,
        format: OutputFormat,
        config: &CliConfig,
    ) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        }
    }

    fn analyze_source(
        &self,
        checker: &StyleChecker,
        source: &Source,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<usize> {
        let name = source.name();
        log::info!("Analyzing: {name}");

        let report = checker
            .check_input(source.input())
            .map_err(|e| CliError::AnalysisError(format!("{name}: {e}")))?;

        log::debug!("{name}: score {}", report.score);
        formatter.format_report(&name, &report)?;
        Ok(report.score)
    }
}
