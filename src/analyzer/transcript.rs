//! Tokenized view of a transcript shared by all metrics
//!
//! Tokenization happens once per evaluation. Failures of the linguistic
//! utilities are absorbed here, so metrics always see usable data.

use crate::text::{Correction, LinguisticAnalyzer, Sentiment};
use crate::Location;
use tracing::warn;

pub struct Transcript<'a> {
    text: &'a str,
    analyzer: &'a dyn LinguisticAnalyzer,
    sentences: Vec<String>,
    /// Original-case tokens per sentence
    sentence_tokens: Vec<Vec<String>>,
    words: Vec<String>,
    lower_words: Vec<String>,
    word_offsets: Vec<Option<usize>>,
}

impl<'a> Transcript<'a> {
    pub fn new(text: &'a str, analyzer: &'a dyn LinguisticAnalyzer) -> Self {
        if text.trim().is_empty() {
            return Self {
                text,
                analyzer,
                sentences: Vec::new(),
                sentence_tokens: Vec::new(),
                words: Vec::new(),
                lower_words: Vec::new(),
                word_offsets: Vec::new(),
            };
        }

        let sentences = analyzer.sentences(text).unwrap_or_else(|e| {
            warn!(error = %e, "sentence tokenizer failed, treating transcript as one sentence");
            vec![text.trim().to_string()]
        });
        let words = analyzer.words(text).unwrap_or_else(|e| {
            warn!(error = %e, "word tokenizer failed, scoring without word tokens");
            Vec::new()
        });
        let sentence_tokens = sentences
            .iter()
            .map(|s| {
                analyzer.words(s).unwrap_or_else(|e| {
                    warn!(error = %e, "word tokenizer failed on a sentence");
                    Vec::new()
                })
            })
            .collect();
        let lower_words = words.iter().map(|w| w.to_lowercase()).collect();
        let word_offsets = sequential_offsets(text, &words);

        Self {
            text,
            analyzer,
            sentences,
            sentence_tokens,
            words,
            lower_words,
            word_offsets,
        }
    }

    pub fn text(&self) -> &str {
        self.text
    }

    /// True for blank or whitespace-only transcripts
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn sentence_tokens(&self) -> &[Vec<String>] {
        &self.sentence_tokens
    }

    /// Word count per sentence
    pub fn sentence_lengths(&self) -> Vec<usize> {
        self.sentence_tokens.iter().map(Vec::len).collect()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn lower_words(&self) -> &[String] {
        &self.lower_words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Location of the i-th word token, or the transcript start if unknown
    pub fn word_location(&self, index: usize) -> Location {
        self.word_offsets
            .get(index)
            .copied()
            .flatten()
            .map(|offset| Location::from_offset(self.text, offset))
            .unwrap_or_else(Location::start)
    }

    /// Locations of every sentence start, in order
    pub fn sentence_locations(&self) -> Vec<Location> {
        sequential_offsets(self.text, &self.sentences)
            .into_iter()
            .map(|o| {
                o.map(|offset| Location::from_offset(self.text, offset))
                    .unwrap_or_else(Location::start)
            })
            .collect()
    }

    /// Location just past the last non-whitespace character
    pub fn end_location(&self) -> Location {
        Location::from_offset(self.text, self.text.trim_end().len())
    }

    /// Sentiment, or neutral if the estimator fails
    pub fn sentiment(&self) -> Sentiment {
        if self.is_empty() {
            return Sentiment::neutral();
        }
        self.analyzer.sentiment(self.text).unwrap_or_else(|e| {
            warn!(error = %e, "sentiment estimator failed, using neutral polarity");
            Sentiment::neutral()
        })
    }

    /// Readability grade, or None if the estimator fails
    pub fn readability_grade(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        match self.analyzer.readability_grade(self.text) {
            Ok(grade) => Some(grade),
            Err(e) => {
                warn!(error = %e, "readability estimator failed");
                None
            }
        }
    }

    /// Autocorrect changes, or none if the corrector fails
    pub fn corrections(&self) -> Vec<Correction> {
        if self.is_empty() {
            return Vec::new();
        }
        self.analyzer.corrections(self.text).unwrap_or_else(|e| {
            warn!(error = %e, "autocorrect pass failed, assuming no corrections");
            Vec::new()
        })
    }
}

/// Find each piece in `text` in order, starting after the previous match
fn sequential_offsets(text: &str, pieces: &[String]) -> Vec<Option<usize>> {
    let mut cursor = 0;
    pieces
        .iter()
        .map(|piece| {
            let found = text[cursor..].find(piece.as_str()).map(|i| cursor + i);
            if let Some(start) = found {
                cursor = start + piece.len();
            }
            found
        })
        .collect()
}
