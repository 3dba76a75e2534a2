//! Content & structure - informational and structural markers
//!
//! Each marker is checked on its own and awards fixed points; overlapping
//! awards add up until the category cap. The date and entity checks are
//! lexical approximations: a year-like number or month name counts as a
//! date, and distinct capitalized words count as named entities.

use super::Metric;
use crate::analyzer::Transcript;
use crate::text::lexicon::{
    contains_any, is_one_of, CAUSAL_CONNECTIVES, CONCLUSION_CUES, INTRODUCTION_CUES, MONTHS,
};
use crate::{Category, Finding, FindingKind, Location, Severity};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const LONG_TRANSCRIPT_POINTS: f64 = 8.0;
const MEDIUM_TRANSCRIPT_POINTS: f64 = 4.0;
const DATE_POINTS: f64 = 6.0;
const NUMBER_POINTS: f64 = 4.0;
const CAUSAL_POINTS: f64 = 6.0;
const MANY_ENTITIES_POINTS: f64 = 6.0;
const SOME_ENTITIES_POINTS: f64 = 3.0;
const SOME_ENTITIES_MIN: usize = 2;
const INTRODUCTION_POINTS: f64 = 4.0;
const CONCLUSION_POINTS: f64 = 4.0;

/// Tunable thresholds for the crude content heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentThresholds {
    /// Distinct capitalized words for full entity points
    pub entity_tokens: usize,
    /// Word count for full length points; half of it earns partial points
    pub long_transcript_words: usize,
}

impl Default for ContentThresholds {
    fn default() -> Self {
        Self {
            entity_tokens: 5,
            long_transcript_words: 150,
        }
    }
}

fn year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(1\d{3}|20\d{2})(s)?$").expect("year pattern is valid"))
}

pub struct ContentStructureMetric {
    thresholds: ContentThresholds,
}

impl ContentStructureMetric {
    pub fn new() -> Self {
        Self::with_thresholds(ContentThresholds::default())
    }

    pub fn with_thresholds(thresholds: ContentThresholds) -> Self {
        Self { thresholds }
    }

    fn has_date(words: &[String]) -> bool {
        words
            .iter()
            .any(|w| year_regex().is_match(w) || is_one_of(w, MONTHS))
    }

    fn has_number(words: &[String]) -> bool {
        words.iter().any(|w| w.chars().any(|c| c.is_ascii_digit()))
    }

    /// Distinct capitalized tokens anywhere in the text, excluding "I".
    ///
    /// Sentence openers count too, so "Volunteers" at the start of a
    /// sentence is an entity just like "Portland" in the middle of one.
    pub fn entity_count(transcript: &Transcript) -> usize {
        let mut entities = HashSet::new();
        for tokens in transcript.sentence_tokens() {
            for token in tokens {
                let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
                let is_pronoun_i = token == "I" || token.starts_with("I'") || token.starts_with("I’");
                if starts_upper && !is_pronoun_i {
                    entities.insert(token.as_str());
                }
            }
        }
        entities.len()
    }

    fn length_points(&self, words: usize) -> f64 {
        let long = self.thresholds.long_transcript_words;
        if words >= long {
            LONG_TRANSCRIPT_POINTS
        } else if words >= long / 2 {
            MEDIUM_TRANSCRIPT_POINTS
        } else {
            0.0
        }
    }

    fn entity_points(&self, entities: usize) -> f64 {
        if entities >= self.thresholds.entity_tokens {
            MANY_ENTITIES_POINTS
        } else if entities >= SOME_ENTITIES_MIN {
            SOME_ENTITIES_POINTS
        } else {
            0.0
        }
    }
}

impl Default for ContentStructureMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for ContentStructureMetric {
    fn category(&self) -> Category {
        Category::ContentStructure
    }

    fn analyze(&self, transcript: &Transcript) -> Vec<Finding> {
        let words = transcript.lower_words();
        if words.is_empty() {
            return vec![];
        }
        let mut findings = Vec::new();
        if !contains_any(words, INTRODUCTION_CUES) {
            findings.push(Finding {
                kind: FindingKind::MissingIntroduction,
                severity: Severity::Info,
                message: "No introduction or greeting found".into(),
                location: Location::start(),
                suggestion: Some("Open by greeting the audience and stating the topic".into()),
            });
        }
        if !contains_any(words, CONCLUSION_CUES) {
            findings.push(Finding {
                kind: FindingKind::MissingConclusion,
                severity: Severity::Info,
                message: "No conclusion found".into(),
                location: transcript.end_location(),
                suggestion: Some("Close with a summary, e.g. 'In conclusion, ...'".into()),
            });
        }
        findings
    }

    fn calculate_score(&self, transcript: &Transcript, _findings: &[Finding]) -> f64 {
        let words = transcript.lower_words();
        if transcript.is_empty() || words.is_empty() {
            return 0.0;
        }

        let mut points = self.length_points(words.len());
        if Self::has_date(words) {
            points += DATE_POINTS;
        }
        if Self::has_number(words) {
            points += NUMBER_POINTS;
        }
        if contains_any(words, CAUSAL_CONNECTIVES) {
            points += CAUSAL_POINTS;
        }
        points += self.entity_points(Self::entity_count(transcript));
        if contains_any(words, INTRODUCTION_CUES) {
            points += INTRODUCTION_POINTS;
        }
        if contains_any(words, CONCLUSION_CUES) {
            points += CONCLUSION_POINTS;
        }

        points.min(self.category().max())
    }
}
