//! Input handling module
//!
//! Command-line inputs are glob patterns or `-` for standard input.

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use quill_core::Input;
use std::path::PathBuf;

/// Marker for standard input on the command line
pub const STDIN_MARKER: &str = "-";

/// One document to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Display name used in reports and progress
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Engine input; nothing is read until the checker asks for the text
    pub fn input(&self) -> Input {
        match self {
            Source::Stdin => Input::from_reader(std::io::stdin()),
            Source::File(path) => Input::from_file(path.clone()),
        }
    }
}

/// Expand command-line inputs into sources, stdin first if requested
pub fn resolve_sources(inputs: &[String]) -> Result<Vec<Source>> {
    let stdin = inputs.iter().any(|i| i == STDIN_MARKER);
    let patterns: Vec<String> = inputs
        .iter()
        .filter(|i| *i != STDIN_MARKER)
        .cloned()
        .collect();

    let mut sources = Vec::new();
    if stdin {
        sources.push(Source::Stdin);
    }
    if !patterns.is_empty() {
        sources.extend(resolve_patterns(&patterns)?.into_iter().map(Source::File));
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stdin_marker() {
        let sources = resolve_sources(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![Source::Stdin]);
        assert_eq!(sources[0].name(), "<stdin>");
        assert!(matches!(sources[0].input(), Input::Reader(_)));
    }

    #[test]
    fn test_stdin_listed_once_and_first() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "Text.").unwrap();

        let inputs = vec![
            file.to_string_lossy().to_string(),
            "-".to_string(),
            "-".to_string(),
        ];
        let sources = resolve_sources(&inputs).unwrap();
        assert_eq!(sources, vec![Source::Stdin, Source::File(file)]);
    }

    #[test]
    fn test_file_source_reads_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("doc.txt");
        fs::write(&file, "The café was closed very early.").unwrap();

        let source = Source::File(file.clone());
        assert_eq!(source.input().to_text().unwrap(), "The café was closed very early.");
        assert_eq!(source.name(), file.display().to_string());
    }

    #[test]
    fn test_file_source_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("latin1.txt");
        fs::write(&file, [b'c', b'a', b'f', 0xE9]).unwrap();

        assert!(Source::File(file).input().to_text().is_err());
    }
}
