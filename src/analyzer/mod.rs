//! Analyzer module - transcript scoring pipeline

pub mod engine;
pub mod rules;
pub mod scoring;
pub mod transcript;

pub use engine::{AggregateStats, Scorer, ScorerSettings};
pub use scoring::ScoreCalculator;
pub use transcript::Transcript;
