//! quill command-line entry point

use anyhow::Result;
use clap::Parser;
use quill_cli::commands::Commands;

/// Prose style checker: flags passive voice, weasel words, wordy phrases,
/// adverbs, clichés, repeated words, long sentences and weak openers
#[derive(Debug, Parser)]
#[command(name = "quill", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["quill", "analyze", "-i", "a.txt", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }
}
