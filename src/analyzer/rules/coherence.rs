//! Coherence - transition density and reference pronouns

use super::Metric;
use crate::analyzer::Transcript;
use crate::text::lexicon::{count_any, is_one_of, REFERENCE_PRONOUNS, TRANSITIONS};
use crate::{Category, Finding, FindingKind, Location, Severity};

pub struct CoherenceMetric;

impl CoherenceMetric {
    pub fn new() -> Self {
        Self
    }

    /// Transition occurrences per word
    fn transition_density(transcript: &Transcript) -> f64 {
        let words = transcript.lower_words();
        if words.is_empty() {
            return 0.0;
        }
        count_any(words, TRANSITIONS) as f64 / words.len() as f64
    }

    fn pronoun_count(transcript: &Transcript) -> usize {
        transcript
            .lower_words()
            .iter()
            .filter(|w| is_one_of(w, REFERENCE_PRONOUNS))
            .count()
    }

    fn tier(density: f64, pronouns: usize) -> f64 {
        if density > 0.05 && pronouns > 0 {
            10.0
        } else if density > 0.03 {
            8.0
        } else if density > 0.01 {
            6.0
        } else {
            4.0
        }
    }
}

impl Default for CoherenceMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for CoherenceMetric {
    fn category(&self) -> Category {
        Category::Coherence
    }

    fn analyze(&self, transcript: &Transcript) -> Vec<Finding> {
        if transcript.lower_words().is_empty() || Self::transition_density(transcript) > 0.01 {
            return vec![];
        }
        vec![Finding {
            kind: FindingKind::FewTransitions,
            severity: Severity::Info,
            message: "Few transition words link the ideas together".into(),
            location: Location::start(),
            suggestion: Some(
                "Connect points with transitions such as 'however', 'therefore' or 'for example'"
                    .into(),
            ),
        }]
    }

    fn calculate_score(&self, transcript: &Transcript, _findings: &[Finding]) -> f64 {
        if transcript.is_empty() || transcript.lower_words().is_empty() {
            return 0.0;
        }
        Self::tier(
            Self::transition_density(transcript),
            Self::pronoun_count(transcript),
        )
    }
}
