//! Integration tests for the quill CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn quill() -> Command {
    Command::cargo_bin("quill").unwrap()
}

#[test]
fn test_analyze_text_output() {
    quill()
        .args(["analyze", "-q", "-i"])
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("==> tests/fixtures/sample.txt <=="))
        .stdout(predicate::str::contains("The ball [was kicked](passive)."))
        .stdout(predicate::str::contains("[So](startswith) it goes."))
        .stdout(predicate::str::contains("[many](weasel)"));
}

#[test]
fn test_analyze_clean_file() {
    quill()
        .args(["analyze", "-q", "-i"])
        .arg(fixture_path("clean.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello world\n\nSecond line"))
        .stdout(predicate::str::contains("Score: 0 (none)"));
}

#[test]
fn test_json_output() {
    let output = quill()
        .args(["analyze", "-q", "-f", "json", "-i"])
        .arg(fixture_path("sample.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let doc = &value[0];
    assert_eq!(doc["source"], "tests/fixtures/sample.txt");
    assert_eq!(doc["counts"]["passive"], 1);
    assert_eq!(doc["summary"]["paragraphs"], 2);
    assert!(doc["document"]
        .as_str()
        .unwrap()
        .starts_with("<p>The ball <span class=\"type-passive\""));
}

#[test]
fn test_markdown_output() {
    quill()
        .args(["analyze", "-q", "-f", "markdown", "-i"])
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("| Sentence | Category | Text | Message |"))
        .stdout(predicate::str::contains("| 1 | passive | was kicked |"))
        .stdout(predicate::str::contains("*Documents: 1, total score:"));
}

#[test]
fn test_html_output() {
    quill()
        .args(["analyze", "-q", "-f", "html", "-i"])
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<span class=\"type-startswith\""));
}

#[test]
fn test_stdin_input() {
    quill()
        .args(["analyze", "-q", "-i", "-"])
        .write_stdin("This is fine. So this happened.")
        .assert()
        .success()
        .stdout(predicate::str::contains("==> <stdin> <=="))
        .stdout(predicate::str::contains(
            "This is fine. [So](startswith) this happened.",
        ));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    quill()
        .args(["analyze", "-q", "-i"])
        .arg(fixture_path("sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("[So](startswith)"));
}

#[test]
fn test_glob_pattern() {
    quill()
        .args(["analyze", "-q", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("==> tests/fixtures/clean.txt <=="))
        .stdout(predicate::str::contains("==> tests/fixtures/sample.txt <=="));
}

#[test]
fn test_execution_modes_agree() {
    let run = |flag: &str| {
        quill()
            .args(["analyze", "-q", flag, "-f", "json", "-i"])
            .arg(fixture_path("sample.txt"))
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run("--sequential"), run("--parallel"));
}

#[test]
fn test_parallel_conflicts_with_sequential() {
    quill()
        .args(["analyze", "--parallel", "--sequential", "-i"])
        .arg(fixture_path("sample.txt"))
        .assert()
        .failure();
}

#[test]
fn test_invalid_file() {
    quill()
        .args(["analyze", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_config_file_sets_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("quill.toml");
    fs::write(&config, "[output]\ndefault_format = \"json\"\npretty_json = false\n").unwrap();

    quill()
        .args(["analyze", "-q", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(fixture_path("clean.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"source\":"));
}

#[test]
fn test_generate_validate_and_use_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules = temp_dir.path().join("rules.toml");

    quill()
        .args(["generate-config", "-o"])
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));

    quill()
        .args(["validate", "-r"])
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule set is valid"));

    let edited = fs::read_to_string(&rules)
        .unwrap()
        .replace("is considered a weasel word", "is vague");
    fs::write(&rules, edited).unwrap();

    quill()
        .args(["analyze", "-q", "-f", "json", "-r"])
        .arg(&rules)
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\\\"many\\\" is vague."));
}

#[test]
fn test_validate_rejects_broken_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules = temp_dir.path().join("broken.toml");
    fs::write(&rules, "[metadata]\ncode = \"en\"\n").unwrap();

    quill()
        .args(["validate", "-r"])
        .arg(&rules)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"));
}

#[test]
fn test_missing_rules_file() {
    quill()
        .args(["analyze", "-q", "-r", "/nonexistent/rules.toml", "-i"])
        .arg(fixture_path("sample.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_help_command() {
    quill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("style checker"));
}

#[test]
fn test_list_categories() {
    quill()
        .args(["list", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passive"))
        .stdout(predicate::str::contains("startswith"));
}

#[test]
fn test_list_formats() {
    quill()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("json"));
}
