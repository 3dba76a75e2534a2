//! Sentence complexity - average sentence length and subordinate clauses

use super::Metric;
use crate::analyzer::Transcript;
use crate::text::lexicon::{is_one_of, SUBORDINATING_CONJUNCTIONS};
use crate::{Category, Finding, FindingKind, Severity};

/// Sentences longer than this are hard to follow when spoken
const LONG_SENTENCE_WORDS: usize = 40;

pub struct SentenceComplexityMetric;

impl SentenceComplexityMetric {
    pub fn new() -> Self {
        Self
    }

    fn average_length(transcript: &Transcript) -> f64 {
        let lengths = transcript.sentence_lengths();
        if lengths.is_empty() {
            return 0.0;
        }
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    }

    fn complex_sentences(transcript: &Transcript) -> usize {
        transcript
            .sentence_tokens()
            .iter()
            .filter(|tokens| {
                tokens
                    .iter()
                    .any(|t| is_one_of(t, SUBORDINATING_CONJUNCTIONS))
            })
            .count()
    }

    /// Thresholds are strict: an average of exactly 20 is not "> 20"
    fn tier(average: f64, complex: usize) -> f64 {
        if average > 20.0 && complex > 0 {
            10.0
        } else if average > 15.0 && complex > 0 {
            8.0
        } else if average > 10.0 {
            6.0
        } else {
            4.0
        }
    }
}

impl Default for SentenceComplexityMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for SentenceComplexityMetric {
    fn category(&self) -> Category {
        Category::SentenceComplexity
    }

    fn analyze(&self, transcript: &Transcript) -> Vec<Finding> {
        transcript
            .sentence_lengths()
            .into_iter()
            .zip(transcript.sentence_locations())
            .filter(|(len, _)| *len > LONG_SENTENCE_WORDS)
            .map(|(len, location)| Finding {
                kind: FindingKind::LongSentence,
                severity: Severity::Info,
                message: format!("Sentence has {len} words"),
                location,
                suggestion: Some("Split very long sentences so listeners can follow".into()),
            })
            .collect()
    }

    fn calculate_score(&self, transcript: &Transcript, _findings: &[Finding]) -> f64 {
        if transcript.is_empty() || transcript.sentences().is_empty() {
            return 0.0;
        }
        Self::tier(
            Self::average_length(transcript),
            Self::complex_sentences(transcript),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LexiconAnalyzer;

    fn score(text: &str) -> f64 {
        let analyzer = LexiconAnalyzer::new();
        let t = Transcript::new(text, &analyzer);
        let metric = SentenceComplexityMetric::new();
        let findings = metric.analyze(&t);
        metric.calculate_score(&t, &findings)
    }

    fn sentence(words: usize, with_clause: bool) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(words);
        if with_clause {
            parts.push("because".to_string());
        }
        while parts.len() < words {
            parts.push(format!("w{}", parts.len()));
        }
        format!("{}.", parts.join(" "))
    }

    #[test]
    fn test_average_exactly_twenty_lands_in_eight_tier() {
        let text = format!("{} {}", sentence(20, true), sentence(20, false));
        assert_eq!(score(&text), 8.0);
    }

    #[test]
    fn test_average_above_twenty_with_clause() {
        let text = format!("{} {}", sentence(21, true), sentence(21, false));
        assert_eq!(score(&text), 10.0);
    }

    #[test]
    fn test_long_without_clause_caps_at_six() {
        let text = format!("{} {}", sentence(25, false), sentence(25, false));
        assert_eq!(score(&text), 6.0);
    }

    #[test]
    fn test_average_exactly_fifteen_and_ten() {
        assert_eq!(score(&sentence(15, true)), 6.0);
        assert_eq!(score(&sentence(16, true)), 8.0);
        assert_eq!(score(&sentence(10, false)), 4.0);
        assert_eq!(score(&sentence(11, false)), 6.0);
    }

    #[test]
    fn test_long_sentence_finding() {
        let analyzer = LexiconAnalyzer::new();
        let text = format!("Short one. {}", sentence(41, false));
        let t = Transcript::new(&text, &analyzer);
        let findings = SentenceComplexityMetric::new().analyze(&t);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location.column, 12);
    }

    #[test]
    fn test_empty() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("?!"), 0.0);
    }
}
