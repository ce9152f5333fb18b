//! End-to-end checks from raw text to report

use quill_core::{
    chunk_text, check_text, ExecutionMode, Label, LengthThresholds, Span, StyleChecker,
};
use std::time::Duration;

fn brackets() -> StyleChecker {
    StyleChecker::builder()
        .brackets()
        .build()
        .expect("Failed to create checker")
}

/// A single clause of exactly `len` characters ending in a period
fn sentence_of(len: usize) -> String {
    let mut text = String::new();
    let mut i = 0;
    while text.chars().count() < len {
        text.push_str(&format!("w{i} "));
        i += 1;
    }
    let mut text: String = text.chars().take(len - 1).collect();
    text.push('.');
    text
}

#[test]
fn test_so_opener_scenario() {
    let report = brackets().check("This is fine. So this happened.").unwrap();

    assert_eq!(report.chunks.len(), 2);
    assert_eq!(report.chunks[0].score, 0);
    assert_eq!(report.chunks[1].first_word, "So");
    assert_eq!(report.chunks[1].score, 1);
    assert_eq!(report.chunks[1].matches[0].label, Label::StartsWith);
    assert_eq!(report.chunks[1].matches[0].indices, Some(Span::new(1, 3)));
    assert!(report.chunks[1].matches[0]
        .message
        .contains("starts with 'so'"));
    assert_eq!(
        report.document,
        "This is fine. [So](startswith) this happened."
    );
}

#[test]
fn test_line_without_terminator() {
    let (chunks, summary) = chunk_text("Hello world");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "Hello world");
    // one at the paragraph start, one at the space, one for the open line end
    assert_eq!(summary.words, 3);

    let report = brackets().check("Hello world").unwrap();
    assert_eq!(report.document, "Hello world");
    assert_eq!(report.score, 0);
}

#[test]
fn test_three_short_sentences() {
    let (chunks, summary) = chunk_text("A. B. C.");
    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["A.", " B.", " C."]);
    assert_eq!(summary.sentences, 3);
    assert_eq!(summary.paragraphs, 1);
}

#[test]
fn test_length_scenarios() {
    let checker = brackets();
    let very_long = sentence_of(165);
    let long = sentence_of(140);
    let short = sentence_of(100);
    assert_eq!(very_long.chars().count(), 165);

    let report = checker.check(&very_long).unwrap();
    let length: Vec<_> = report.chunks[0]
        .matches
        .iter()
        .filter(|m| m.label == Label::Length)
        .collect();
    assert_eq!(length.len(), 1);
    assert_eq!(length[0].message, "This is a VERY long sentence.");
    assert_eq!(length[0].indices, None);
    assert_eq!(report.document, format!("[{very_long}](length)"));

    let report = checker.check(&long).unwrap();
    assert_eq!(report.counts.get(Label::Length), 1);
    assert_eq!(report.chunks[0].matches[0].message, "This is a long sentence.");

    let report = checker.check(&short).unwrap();
    assert_eq!(report.counts.get(Label::Length), 0);
}

#[test]
fn test_disjoint_spans_annotated_in_place() {
    let report = brackets().check("The café was closed very early.").unwrap();

    assert_eq!(report.score, 2);
    assert_eq!(report.counts.get(Label::Passive), 1);
    assert_eq!(report.counts.get(Label::Weasel), 1);
    assert_eq!(
        report.document,
        "The café [was closed](passive) [very](weasel) early."
    );
}

#[test]
fn test_empty_input() {
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel, ExecutionMode::Adaptive] {
        let report = brackets().check_with_mode("", mode).unwrap();
        assert!(report.chunks.is_empty());
        assert_eq!(report.document, "");
        assert_eq!(report.score, 0);
        assert_eq!(report.summary, Default::default());
        assert!(Label::ALL.iter().all(|&l| report.counts.get(l) == 0));
    }
}

#[test]
fn test_non_ascii_offsets() {
    let report = brackets().check("Ça va. The naïve plan was abandoned.").unwrap();

    let passive = &report.chunks[1].matches[0];
    assert_eq!(passive.text, "was abandoned");
    assert_eq!(passive.indices, Some(Span::new(16, 29)));
    assert_eq!(
        report.document,
        "Ça va. The naïve plan [was abandoned](passive)."
    );
}

#[test]
fn test_paragraphs_wrapped_in_html() {
    let report = check_text("Mistakes were made. There is a cat.\nSecond line").unwrap();

    assert_eq!(report.paragraphs.len(), 2);
    assert_eq!(report.summary.paragraphs, 2);
    assert_eq!(
        report.document,
        "<p>Mistakes <span class=\"type-passive\" data-msg=\"&quot;were made&quot; is considered passive voice.\">were made</span>. \
         <span class=\"type-startswith\" data-msg=\"This sentence starts with &#39;There is&#39;. Consider rephrasing it.\">There is</span> a cat.</p>\n\
         <p>Second line</p>"
    );
}

#[test]
fn test_reading_time_reported() {
    let text = "word ".repeat(550);
    let report = check_text(&text).unwrap();
    assert!(report.summary.words >= 550);
    assert_eq!(report.reading_time.minutes, 2);
}

#[test]
fn test_custom_length_thresholds() {
    let checker = StyleChecker::builder()
        .brackets()
        .length_thresholds(LengthThresholds {
            long: 5,
            very_long: 10,
        })
        .build()
        .unwrap();

    let report = checker.check("Tiny. Slightly longer.").unwrap();
    let length_messages = |i: usize| -> Vec<String> {
        report.chunks[i]
            .matches
            .iter()
            .filter(|m| m.label == Label::Length)
            .map(|m| m.message.clone())
            .collect()
    };
    assert!(length_messages(0).is_empty());
    assert_eq!(length_messages(1), vec!["This is a VERY long sentence."]);
}

#[test]
fn test_generous_timeout_completes() {
    let checker = StyleChecker::builder()
        .parallel()
        .timeout(Some(Duration::from_secs(30)))
        .build()
        .unwrap();
    let report = checker.check("One sentence. Another one.").unwrap();
    assert_eq!(report.chunks.len(), 2);
}
