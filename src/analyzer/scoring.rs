//! Score aggregation, rating feedback and recommendations

use crate::{Breakdown, Category, Rating, Score};

/// Categories below this share of their maximum get a recommendation
const RECOMMENDATION_RATIO: f64 = 0.6;

/// Calculator for transcript quality scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Sum the sub-scores into a clamped total with its rating
    pub fn aggregate(breakdown: &Breakdown) -> Score {
        Score::new(breakdown.total())
    }

    /// Feedback sentence for a rating
    pub fn rating_description(rating: Rating) -> &'static str {
        match rating {
            Rating::Excellent => "Excellent speech! Well-structured and engaging.",
            Rating::Good => "Good speech with room for improvement in some areas.",
            Rating::Fair => "Fair speech. Consider working on structure and clarity.",
            Rating::NeedsImprovement => {
                "The speech needs significant improvement in multiple areas."
            }
        }
    }

    fn category_advice(category: Category) -> &'static str {
        match category {
            Category::Grammar => {
                "Start sentences with a capital letter and end them with punctuation"
            }
            Category::Vocabulary => "Vary your word choice instead of repeating the same words",
            Category::SentenceComplexity => {
                "Combine short sentences with clauses using 'because', 'although' or 'which'"
            }
            Category::Coherence => {
                "Link your points with transitions such as 'however', 'therefore' or 'next'"
            }
            Category::Clarity => "Cut filler words like 'um', 'like' and 'you know'",
            Category::Engagement => {
                "Engage listeners with questions, examples and expressive language"
            }
            Category::ContentStructure => {
                "Add an introduction and a conclusion, and support points with facts, dates or names"
            }
        }
    }

    /// Get recommendations based on breakdown scores
    pub fn recommendations(breakdown: &Breakdown) -> Vec<String> {
        let mut recs: Vec<String> = breakdown
            .iter()
            .filter(|entry| entry.ratio() < RECOMMENDATION_RATIO)
            .map(|entry| Self::category_advice(entry.category).to_string())
            .collect();

        if recs.is_empty() {
            recs.push("The speech is in good shape! Keep practicing the delivery.".to_string());
        }

        recs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CategoryScore;

    fn breakdown(scores: [f64; 7]) -> Breakdown {
        let mut b = Breakdown::new();
        for (category, score) in Category::ALL.into_iter().zip(scores) {
            b.push(CategoryScore::new(category, score));
        }
        b
    }

    #[test]
    fn test_aggregate_sums_sub_scores() {
        let score = ScoreCalculator::aggregate(&breakdown([8.0, 6.0, 8.0, 6.0, 12.0, 9.0, 24.0]));
        assert_eq!(score.value, 73.0);
        assert_eq!(score.rating, Rating::Good);
    }

    #[test]
    fn test_aggregate_perfect_and_zero() {
        let perfect = ScoreCalculator::aggregate(&breakdown([10.0, 10.0, 10.0, 10.0, 15.0, 15.0, 30.0]));
        assert_eq!(perfect.value, 100.0);
        assert_eq!(perfect.rating, Rating::Excellent);

        let zero = ScoreCalculator::aggregate(&Breakdown::new());
        assert_eq!(zero.value, 0.0);
        assert_eq!(zero.rating, Rating::NeedsImprovement);
    }

    #[test]
    fn test_rating_descriptions() {
        assert_eq!(
            ScoreCalculator::rating_description(Rating::Excellent),
            "Excellent speech! Well-structured and engaging."
        );
        assert_eq!(
            ScoreCalculator::rating_description(Rating::NeedsImprovement),
            "The speech needs significant improvement in multiple areas."
        );
    }

    #[test]
    fn test_recommendations_for_weak_categories() {
        // Clarity 8/15 and Content 10/30 are under 60%; Grammar exactly 6/10 is not
        let recs = ScoreCalculator::recommendations(&breakdown([
            6.0, 10.0, 10.0, 10.0, 8.0, 15.0, 10.0,
        ]));
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("filler"));
        assert!(recs[1].contains("introduction"));
    }

    #[test]
    fn test_recommendations_positive_when_strong() {
        let recs = ScoreCalculator::recommendations(&breakdown([
            10.0, 10.0, 8.0, 8.0, 12.0, 10.0, 24.0,
        ]));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("good shape"));
    }
}
