//! Clarity - filler-word density and content-word ratio
//!
//! Filler tokens are never content words, so adding a filler can only lower
//! the score.

use super::Metric;
use crate::analyzer::Transcript;
use crate::text::lexicon::{FILLER_PHRASES, FILLER_WORDS, STOP_WORDS};
use crate::{Category, Finding, FindingKind, Severity};

const FILLER_BUDGET: f64 = 7.0;
const FILLER_PENALTY_PER_PERCENT: f64 = 100.0;
const CONTENT_WEIGHT: f64 = 8.0;

/// Result of scanning the token stream for fillers
#[derive(Debug, Default, PartialEq)]
pub struct FillerScan {
    /// Token index where each filler starts, with its word length
    pub occurrences: Vec<(usize, usize)>,
    pub content_words: usize,
    pub total_words: usize,
}

impl FillerScan {
    pub fn filler_count(&self) -> usize {
        self.occurrences.len()
    }
}

pub struct ClarityMetric {
    /// Filler entries as token sequences, longest first
    fillers: Vec<Vec<String>>,
}

impl ClarityMetric {
    pub fn new() -> Self {
        Self::with_extra_fillers(&[])
    }

    /// Extend the built-in filler list (single words or phrases)
    pub fn with_extra_fillers(extra: &[String]) -> Self {
        let mut fillers: Vec<Vec<String>> = FILLER_PHRASES
            .iter()
            .chain(FILLER_WORDS)
            .map(|f| f.to_string())
            .chain(extra.iter().cloned())
            .map(|f| {
                f.split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .filter(|parts| !parts.is_empty())
            .collect();
        fillers.sort_by(|a, b| b.len().cmp(&a.len()));
        fillers.dedup();
        Self { fillers }
    }

    /// Walk the tokens once; phrase fillers consume their words.
    ///
    /// Phrases match only as contiguous tokens. A filler inserted inside a
    /// phrase ("you um know") breaks it, so the phrase's words count as
    /// content again and the score can rise even though the filler count
    /// stays the same. Fillers appended outside a phrase never raise it.
    pub fn scan(&self, words: &[String]) -> FillerScan {
        let mut scan = FillerScan {
            total_words: words.len(),
            ..FillerScan::default()
        };
        let mut i = 0;
        while i < words.len() {
            let matched = self.fillers.iter().find(|parts| {
                i + parts.len() <= words.len()
                    && parts.iter().zip(&words[i..]).all(|(p, w)| p == w)
            });
            match matched {
                Some(parts) => {
                    scan.occurrences.push((i, parts.len()));
                    i += parts.len();
                }
                None => {
                    if !STOP_WORDS.contains(&words[i].as_str()) {
                        scan.content_words += 1;
                    }
                    i += 1;
                }
            }
        }
        scan
    }

    fn score_scan(scan: &FillerScan) -> f64 {
        if scan.total_words == 0 {
            return 0.0;
        }
        let total = scan.total_words as f64;
        let filler_ratio = scan.filler_count() as f64 / total;
        let content_ratio = scan.content_words as f64 / total;
        let filler_score = (FILLER_BUDGET - filler_ratio * FILLER_PENALTY_PER_PERCENT).max(0.0);
        let content_score = content_ratio * CONTENT_WEIGHT;
        (filler_score + content_score).min(Category::Clarity.max())
    }
}

impl Default for ClarityMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for ClarityMetric {
    fn category(&self) -> Category {
        Category::Clarity
    }

    fn analyze(&self, transcript: &Transcript) -> Vec<Finding> {
        let words = transcript.lower_words();
        self.scan(words)
            .occurrences
            .into_iter()
            .map(|(start, len)| {
                let filler = words[start..start + len].join(" ");
                Finding {
                    kind: FindingKind::FillerWord,
                    severity: Severity::Info,
                    message: format!("Filler: '{filler}'"),
                    location: transcript.word_location(start),
                    suggestion: Some("Pause silently instead of using filler words".into()),
                }
            })
            .collect()
    }

    fn calculate_score(&self, transcript: &Transcript, _findings: &[Finding]) -> f64 {
        if transcript.is_empty() {
            return 0.0;
        }
        Self::score_scan(&self.scan(transcript.lower_words()))
    }
}
