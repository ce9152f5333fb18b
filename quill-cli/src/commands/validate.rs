//! Validate command implementation

use anyhow::Result;
use clap::Args;
use quill_core::RuleSet;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule set file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule set: {}", self.rules.display());

        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rule set is valid!");
                println!("  Code: {}", rules.metadata.code);
                println!("  Name: {}", rules.metadata.name);
                println!("  Passive auxiliaries: {}", rules.passive.auxiliaries.len());
                println!("  Weasel words: {}", rules.weasel.terms.len());
                println!("  Wordy phrases: {}", rules.wordy.terms.len());
                println!("  Adverbs: {}", rules.adverb.terms.len());
                println!("  Cliches: {}", rules.cliche.terms.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule set is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
