//! Linguistic utilities behind a narrow, swappable interface
//!
//! Metrics only talk to [`LinguisticAnalyzer`]. The default backend,
//! [`LexiconAnalyzer`], is built from regexes, word lists and counting
//! heuristics; another backend can replace it without touching any metric.

pub mod autocorrect;
pub mod lexicon;
pub mod readability;
pub mod sentiment;
pub mod tokenize;

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};

/// Polarity in [-1, 1], subjectivity in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// A single change an autocorrect pass would make
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// Byte offset of the original text
    pub offset: usize,
    pub original: String,
    pub replacement: String,
}

/// Black-box linguistic collaborator used by every metric.
///
/// Every operation may fail; callers substitute a neutral default.
pub trait LinguisticAnalyzer: Send + Sync {
    /// Split text into sentences (trimmed, in order)
    fn sentences(&self, text: &str) -> Result<Vec<String>, AnalyzerError>;

    /// Split text into word tokens, punctuation excluded
    fn words(&self, text: &str) -> Result<Vec<String>, AnalyzerError>;

    /// Overall sentiment of the text
    fn sentiment(&self, text: &str) -> Result<Sentiment, AnalyzerError>;

    /// Grade-level readability estimate
    fn readability_grade(&self, text: &str) -> Result<f64, AnalyzerError>;

    /// Changes an autocorrect pass would apply; used as an error-count proxy
    fn corrections(&self, text: &str) -> Result<Vec<Correction>, AnalyzerError>;
}

/// Default rule- and lexicon-based analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LinguisticAnalyzer for LexiconAnalyzer {
    fn sentences(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        Ok(tokenize::split_sentences(text))
    }

    fn words(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        Ok(tokenize::split_words(text))
    }

    fn sentiment(&self, text: &str) -> Result<Sentiment, AnalyzerError> {
        Ok(sentiment::score(&tokenize::split_words(text)))
    }

    fn readability_grade(&self, text: &str) -> Result<f64, AnalyzerError> {
        let words = tokenize::split_words(text);
        let sentences = tokenize::split_sentences(text).len();
        readability::flesch_kincaid_grade(&words, sentences)
    }

    fn corrections(&self, text: &str) -> Result<Vec<Correction>, AnalyzerError> {
        Ok(autocorrect::find_corrections(text))
    }
}
