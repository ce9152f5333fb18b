//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("No files matched: {pattern}");
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).to_string_lossy().to_string()
    }

    #[test]
    fn test_glob_matches_sorted_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "B.").unwrap();
        fs::write(dir.path().join("a.txt"), "A.").unwrap();
        fs::write(dir.path().join("c.md"), "C.").unwrap();

        let files = resolve_patterns(&[pattern(&dir, "*.txt")]).unwrap();
        assert_eq!(files, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);
    }

    #[test]
    fn test_overlapping_patterns_dedup() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "A.").unwrap();

        let files =
            resolve_patterns(&[pattern(&dir, "*.txt"), pattern(&dir, "a.txt")]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        assert!(resolve_patterns(&[pattern(&dir, "*.txt")]).is_err());
    }

    #[test]
    fn test_no_match() {
        let dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&dir, "*.txt")]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
