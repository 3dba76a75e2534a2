//! Edge case tests: degenerate inputs must not panic and must stay in range.

use cadence::analyzer::Scorer;
use cadence::{evaluate_transcript, Category, Evaluation};
use std::io::Write;
use tempfile::NamedTempFile;

fn assert_in_range(evaluation: &Evaluation) {
    assert!((0.0..=100.0).contains(&evaluation.score.value));
    for entry in evaluation.breakdown.iter() {
        assert!(
            entry.score >= 0.0 && entry.score <= entry.category.max(),
            "{} out of range: {}",
            entry.category,
            entry.score
        );
    }
}

#[test]
fn punctuation_only_no_panic() {
    let evaluation = evaluate_transcript("?!... --- ;;");
    assert_in_range(&evaluation);
    assert_eq!(evaluation.stats.words, 0);
    assert_eq!(evaluation.breakdown.get(Category::Engagement), Some(0.0));
}

#[test]
fn single_word_no_panic() {
    let evaluation = evaluate_transcript("Hello");
    assert_in_range(&evaluation);
    assert_eq!(evaluation.stats.words, 1);
}

#[test]
fn numbers_only_no_panic() {
    let evaluation = evaluate_transcript("2020 2021 2022");
    assert_in_range(&evaluation);
}

#[test]
fn utf8_text_no_panic() {
    let evaluation = evaluate_transcript("Café société, naïve résumé. Ünïcödé “quotes” — and emoji 🎤!");
    assert_in_range(&evaluation);
    assert!(evaluation.stats.words > 0);
}

#[test]
fn crlf_line_endings() {
    let lf = evaluate_transcript("Hello everyone.\nToday we begin.\n");
    let crlf = evaluate_transcript("Hello everyone.\r\nToday we begin.\r\n");
    assert_eq!(lf.score.value, crlf.score.value);
}

#[test]
fn very_long_sentence_no_panic() {
    let text = format!("{}.", vec!["word"; 2_000].join(" "));
    let evaluation = evaluate_transcript(&text);
    assert_in_range(&evaluation);
    assert_eq!(evaluation.stats.sentences, 1);
}

#[test]
fn large_transcript_completes() {
    let paragraph = "Today we will look at the numbers because they matter. However, the story is bigger than the data. ";
    let text = paragraph.repeat(500);
    let evaluation = evaluate_transcript(&text);
    assert_in_range(&evaluation);
    assert_eq!(
        evaluation.breakdown.get(Category::ContentStructure).map(|s| s > 0.0),
        Some(true)
    );
}

#[test]
fn all_fillers_clarity_zero() {
    let evaluation = evaluate_transcript("um uh like um uh like um");
    assert_in_range(&evaluation);
    assert_eq!(evaluation.breakdown.get(Category::Clarity), Some(0.0));
}

#[test]
fn file_with_bom_scores_like_plain() {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    file.write_all("\u{feff}Hello everyone. Today we begin.".as_bytes())
        .unwrap();
    file.flush().unwrap();

    let scorer = Scorer::new();
    let from_file = scorer.evaluate_file(file.path(), None).unwrap();
    let plain = scorer.evaluate("plain", "Hello everyone. Today we begin.");
    assert_eq!(from_file.stats.words, plain.stats.words);
}

#[test]
fn empty_file_is_an_error() {
    let file = NamedTempFile::with_suffix(".txt").unwrap();
    let result = Scorer::new().evaluate_file(file.path(), None);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No text entered"));
}

#[test]
fn non_utf8_file_is_an_error() {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
    file.flush().unwrap();
    assert!(Scorer::new().evaluate_file(file.path(), None).is_err());
}
