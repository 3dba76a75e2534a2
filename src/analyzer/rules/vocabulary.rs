//! Vocabulary richness - length-adjusted type-token ratio

use super::Metric;
use crate::analyzer::Transcript;
use crate::{Category, Finding, FindingKind, Location, Severity};
use std::collections::HashSet;

pub struct VocabularyMetric;

impl VocabularyMetric {
    pub fn new() -> Self {
        Self
    }

    /// `unique/total * ln(total + 1)`; longer texts get credit for their length
    pub fn adjusted_ttr(words: &[String]) -> f64 {
        if words.is_empty() {
            return 0.0;
        }
        let unique: HashSet<&String> = words.iter().collect();
        let ttr = unique.len() as f64 / words.len() as f64;
        ttr * ((words.len() + 1) as f64).ln()
    }

    fn tier(adjusted: f64) -> f64 {
        if adjusted > 2.5 {
            10.0
        } else if adjusted > 2.0 {
            8.0
        } else if adjusted > 1.5 {
            6.0
        } else if adjusted > 1.0 {
            4.0
        } else {
            2.0
        }
    }
}

impl Default for VocabularyMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for VocabularyMetric {
    fn category(&self) -> Category {
        Category::Vocabulary
    }

    fn analyze(&self, transcript: &Transcript) -> Vec<Finding> {
        let words = transcript.lower_words();
        if words.is_empty() {
            return vec![];
        }
        let adjusted = Self::adjusted_ttr(words);
        if Self::tier(adjusted) > 4.0 {
            return vec![];
        }
        vec![Finding {
            kind: FindingKind::RepetitiveVocabulary,
            severity: Severity::Info,
            message: format!("Low vocabulary variety (adjusted type-token ratio {adjusted:.2})"),
            location: Location::start(),
            suggestion: Some("Replace repeated words with synonyms or more specific terms".into()),
        }]
    }

    fn calculate_score(&self, transcript: &Transcript, _findings: &[Finding]) -> f64 {
        let words = transcript.lower_words();
        if transcript.is_empty() || words.is_empty() {
            return 0.0;
        }
        Self::tier(Self::adjusted_ttr(words))
    }
}
