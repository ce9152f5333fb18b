//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use quill_core::builtin_rules;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating rule set template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template()?)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule set template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the term lists and messages");
        println!("2. Validate your rule set:");
        println!("   quill validate --rules {}", self.output.display());
        println!("3. Use it for analysis:");
        println!("   quill analyze -i input.txt --rules {}", self.output.display());

        Ok(())
    }

    /// Built-in English rules with an explanatory header
    fn generate_template(&self) -> Result<String> {
        let body = builtin_rules()?.to_toml_string()?;
        Ok(format!(
            "# quill rule set\n\
             #\n\
             # Messages may use {{match}} for the flagged text.\n\
             # Term lists are matched case-insensitively on word boundaries.\n\
             \n\
             {body}"
        ))
    }
}
