//! Engagement - emotional intensity, questions, examples and emphasis

use super::Metric;
use crate::analyzer::Transcript;
use crate::text::lexicon::{contains_any, is_one_of, EMPHASIS_WORDS, EXEMPLAR_PHRASES};
use crate::text::Sentiment;
use crate::{Category, Finding};

/// Score of any non-empty transcript with neutral tone and no cues
pub const ENGAGEMENT_BASE: f64 = 3.0;
const POLARITY_WEIGHT: f64 = 3.0;
const SUBJECTIVITY_WEIGHT: f64 = 2.0;
const POINTS_PER_QUESTION: f64 = 1.5;
const MAX_QUESTION_POINTS: f64 = 3.0;
const EXEMPLAR_POINTS: f64 = 2.0;
const POINTS_PER_EMPHASIS: f64 = 0.5;
const MAX_EMPHASIS_POINTS: f64 = 2.0;

pub struct EngagementMetric;

impl EngagementMetric {
    pub fn new() -> Self {
        Self
    }

    /// Stronger emotion in either direction is more engaging
    fn sentiment_points(sentiment: Sentiment) -> f64 {
        sentiment.polarity.abs() * POLARITY_WEIGHT + sentiment.subjectivity * SUBJECTIVITY_WEIGHT
    }

    fn question_points(text: &str) -> f64 {
        (text.matches('?').count() as f64 * POINTS_PER_QUESTION).min(MAX_QUESTION_POINTS)
    }

    fn emphasis_points(words: &[String]) -> f64 {
        let count = words.iter().filter(|w| is_one_of(w, EMPHASIS_WORDS)).count();
        (count as f64 * POINTS_PER_EMPHASIS).min(MAX_EMPHASIS_POINTS)
    }
}

impl Default for EngagementMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for EngagementMetric {
    fn category(&self) -> Category {
        Category::Engagement
    }

    fn analyze(&self, _transcript: &Transcript) -> Vec<Finding> {
        vec![]
    }

    fn calculate_score(&self, transcript: &Transcript, _findings: &[Finding]) -> f64 {
        let words = transcript.lower_words();
        if transcript.is_empty() || words.is_empty() {
            return 0.0;
        }
        let exemplar = if contains_any(words, EXEMPLAR_PHRASES) {
            EXEMPLAR_POINTS
        } else {
            0.0
        };

        let score = ENGAGEMENT_BASE
            + Self::sentiment_points(transcript.sentiment())
            + Self::question_points(transcript.text())
            + exemplar
            + Self::emphasis_points(words);
        score.min(self.category().max())
    }
}
