//! Grammar proxy - capitalization, punctuation, sentence variety, autocorrect hits
//!
//! This is a heuristic, not a grammar checker. Each finding costs a fixed
//! number of issue points (see [`FindingKind::grammar_weight`]) and the score
//! is the ceiling minus the issue total.

use super::Metric;
use crate::analyzer::Transcript;
use crate::{Category, Finding, FindingKind, Location, Severity};
use std::collections::HashSet;

/// Minimum letters before an all-uppercase transcript counts as shouting
const ALL_CAPS_MIN_LETTERS: usize = 4;

pub struct GrammarMetric;

impl GrammarMetric {
    pub fn new() -> Self {
        Self
    }

    fn first_letter_is_lowercase(sentence: &str) -> bool {
        sentence
            .chars()
            .find(|c| c.is_alphabetic())
            .map(|c| !c.is_uppercase())
            .unwrap_or(false)
    }

    fn has_terminal_punctuation(text: &str) -> bool {
        text.trim_end()
            .trim_end_matches(['"', '\'', ')', ']', '”', '’'])
            .ends_with(['.', '!', '?'])
    }

    fn is_all_caps(text: &str) -> bool {
        let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        letters.len() >= ALL_CAPS_MIN_LETTERS && !letters.iter().any(|c| c.is_lowercase())
    }
}

impl Default for GrammarMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for GrammarMetric {
    fn category(&self) -> Category {
        Category::Grammar
    }

    fn analyze(&self, transcript: &Transcript) -> Vec<Finding> {
        let mut findings = Vec::new();
        let sentences = transcript.sentences();
        if transcript.is_empty() || sentences.is_empty() {
            return findings;
        }

        let lengths = transcript.sentence_lengths();
        let distinct: HashSet<usize> = lengths.iter().copied().collect();
        if distinct.len() < 2 {
            let message = if sentences.len() == 1 {
                "Transcript is a single sentence".to_string()
            } else {
                format!(
                    "All {} sentences have the same length ({} words)",
                    sentences.len(),
                    lengths[0]
                )
            };
            findings.push(Finding {
                kind: FindingKind::UniformSentenceLength,
                severity: Severity::Info,
                message,
                location: Location::start(),
                suggestion: Some("Mix short and long sentences to keep the rhythm varied".into()),
            });
        }

        for (sentence, location) in sentences.iter().zip(transcript.sentence_locations()) {
            if Self::first_letter_is_lowercase(sentence) {
                findings.push(Finding {
                    kind: FindingKind::LowercaseSentenceStart,
                    severity: Severity::Warning,
                    message: "Sentence does not start with a capital letter".into(),
                    location,
                    suggestion: Some("Capitalize the first word of every sentence".into()),
                });
            }
        }

        if !Self::has_terminal_punctuation(transcript.text()) {
            findings.push(Finding {
                kind: FindingKind::MissingTerminalPunctuation,
                severity: Severity::Warning,
                message: "Transcript does not end with '.', '!' or '?'".into(),
                location: transcript.end_location(),
                suggestion: Some("End the final sentence with terminal punctuation".into()),
            });
        }

        if Self::is_all_caps(transcript.text()) {
            findings.push(Finding {
                kind: FindingKind::AllCaps,
                severity: Severity::Warning,
                message: "Transcript is written entirely in uppercase".into(),
                location: Location::start(),
                suggestion: Some("Use normal sentence case".into()),
            });
        }

        for correction in transcript.corrections() {
            findings.push(Finding {
                kind: FindingKind::Misspelling,
                severity: Severity::Warning,
                message: format!("Possible error: '{}'", correction.original),
                location: Location::from_offset(transcript.text(), correction.offset),
                suggestion: Some(format!(
                    "Replace '{}' with '{}'",
                    correction.original, correction.replacement
                )),
            });
        }

        findings
    }

    fn calculate_score(&self, transcript: &Transcript, findings: &[Finding]) -> f64 {
        if transcript.is_empty() || transcript.sentences().is_empty() {
            return 0.0;
        }
        let max = self.category().max();
        let issues: f64 = findings.iter().map(|f| f.kind.grammar_weight()).sum();
        (max - issues.min(max)).max(0.0)
    }
}
