//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use quill_core::Label;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze prose files for style issues
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write the built-in rule set to a TOML file for editing
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a rule set file without analyzing anything
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List analyzer categories
    Categories,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Categories => {
                println!("Analyzer categories:");
                for label in Label::ALL {
                    println!("  {:<12} {}", label.as_str(), category_description(label));
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text      - Annotated text with [flagged](category) markers");
                println!("  markdown  - Markdown report with a findings table");
                println!("  html      - Standalone HTML page with highlighted spans");
                println!("  json      - Machine-readable report");
            }
        }
    }
}

/// One-line description of what a category flags
pub fn category_description(label: Label) -> &'static str {
    match label {
        Label::Passive => "Passive voice constructions",
        Label::Weasel => "Vague qualifiers such as \"very\" or \"many\"",
        Label::Wordy => "Phrases with a shorter equivalent",
        Label::Adverb => "Adverbs that weaken the verb",
        Label::Cliche => "Overused expressions",
        Label::Illusion => "The same word twice in a row",
        Label::Length => "Sentences over the long or very long limit",
        Label::StartsWith => "Sentences opening with \"So\" or \"There is/are\"",
    }
}
