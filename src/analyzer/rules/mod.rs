//! Scoring metrics for transcript quality

pub mod clarity;
pub mod coherence;
pub mod content_structure;
pub mod engagement;
pub mod grammar;
pub mod sentence_complexity;
pub mod vocabulary;

pub use clarity::ClarityMetric;
pub use coherence::CoherenceMetric;
pub use content_structure::ContentStructureMetric;
pub use engagement::EngagementMetric;
pub use grammar::GrammarMetric;
pub use sentence_complexity::SentenceComplexityMetric;
pub use vocabulary::VocabularyMetric;

use super::Transcript;
use crate::{Category, Finding};

/// Trait for scoring metrics.
///
/// Metrics are independent: each sees the transcript and only its own findings.
pub trait Metric: Send + Sync {
    /// Category this metric scores
    fn category(&self) -> Category;

    /// Inspect the transcript and return findings
    fn analyze(&self, transcript: &Transcript) -> Vec<Finding>;

    /// Calculate the sub-score (0 to `category().max()`)
    fn calculate_score(&self, transcript: &Transcript, findings: &[Finding]) -> f64;
}
