//! Cadence: Speech Transcript Quality Analyzer
//!
//! This library scores a speech transcript from 0 to 100 using shallow,
//! rule-based textual heuristics and explains the score with a per-category
//! breakdown, findings and recommendations.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod input;
pub mod reporter;
pub mod text;
pub mod watcher;

pub use error::{AnalyzerError, CadenceError};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Source label used for transcripts read from standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// The complete result of evaluating one transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Where the transcript came from (file path or `<stdin>`)
    pub source: String,
    /// Overall quality score (0-100)
    pub score: Score,
    /// Ordered per-category scores
    pub breakdown: Breakdown,
    /// Observations explaining the sub-scores
    pub findings: Vec<Finding>,
    /// Statistics about the transcript
    pub stats: TranscriptStats,
    /// Suggestions for the weakest categories
    pub recommendations: Vec<String>,
}

/// Final score with its qualitative rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Sum of the category scores (0-100)
    pub value: f64,
    pub rating: Rating,
}

impl Score {
    pub fn new(value: f64) -> Self {
        let value = value.clamp(0.0, 100.0);
        Self {
            value,
            rating: Rating::from_score(value),
        }
    }
}

/// Qualitative label for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Rating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Rating::Excellent
        } else if score >= 60.0 {
            Rating::Good
        } else if score >= 40.0 {
            Rating::Fair
        } else {
            Rating::NeedsImprovement
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::Fair => write!(f, "Fair"),
            Rating::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Scoring categories, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Grammar,
    Vocabulary,
    SentenceComplexity,
    Coherence,
    Clarity,
    Engagement,
    ContentStructure,
}

impl Category {
    /// All categories in presentation order. Maxima sum to 100.
    pub const ALL: [Category; 7] = [
        Category::Grammar,
        Category::Vocabulary,
        Category::SentenceComplexity,
        Category::Coherence,
        Category::Clarity,
        Category::Engagement,
        Category::ContentStructure,
    ];

    /// Upper bound of this category's sub-score
    pub fn max(self) -> f64 {
        match self {
            Category::Grammar
            | Category::Vocabulary
            | Category::SentenceComplexity
            | Category::Coherence => 10.0,
            Category::Clarity | Category::Engagement => 15.0,
            Category::ContentStructure => 30.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Grammar => "Grammar",
            Category::Vocabulary => "Vocabulary",
            Category::SentenceComplexity => "Sentence Complexity",
            Category::Coherence => "Coherence",
            Category::Clarity => "Clarity",
            Category::Engagement => "Engagement",
            Category::ContentStructure => "Content & Structure",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One named sub-score with its maximum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub max: f64,
}

impl CategoryScore {
    /// Build a sub-score, clamped into `[0, category.max()]`
    pub fn new(category: Category, score: f64) -> Self {
        let max = category.max();
        Self {
            category,
            score: score.clamp(0.0, max),
            max,
        }
    }

    /// Fraction of the maximum reached (0.0-1.0)
    pub fn ratio(&self) -> f64 {
        if self.max > 0.0 {
            self.score / self.max
        } else {
            0.0
        }
    }
}

/// Ordered per-category scores; insertion order is presentation order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown {
    entries: Vec<CategoryScore>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CategoryScore) {
        self.entries.push(entry);
    }

    /// Score for a category, if present
    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all sub-scores
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.score).sum()
    }
}

/// Something noteworthy found while scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    pub location: Location,
    pub suggestion: Option<String>,
}

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Kinds of findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    UniformSentenceLength,
    LowercaseSentenceStart,
    MissingTerminalPunctuation,
    AllCaps,
    Misspelling,
    RepetitiveVocabulary,
    LongSentence,
    FewTransitions,
    FillerWord,
    MissingIntroduction,
    MissingConclusion,
}

impl FindingKind {
    /// Issue points this finding costs the grammar sub-score
    pub fn grammar_weight(self) -> f64 {
        match self {
            FindingKind::UniformSentenceLength
            | FindingKind::LowercaseSentenceStart
            | FindingKind::MissingTerminalPunctuation => 1.0,
            FindingKind::AllCaps => 2.0,
            FindingKind::Misspelling => 0.5,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::UniformSentenceLength => write!(f, "uniform-sentence-length"),
            FindingKind::LowercaseSentenceStart => write!(f, "lowercase-sentence-start"),
            FindingKind::MissingTerminalPunctuation => write!(f, "missing-terminal-punctuation"),
            FindingKind::AllCaps => write!(f, "all-caps"),
            FindingKind::Misspelling => write!(f, "misspelling"),
            FindingKind::RepetitiveVocabulary => write!(f, "repetitive-vocabulary"),
            FindingKind::LongSentence => write!(f, "long-sentence"),
            FindingKind::FewTransitions => write!(f, "few-transitions"),
            FindingKind::FillerWord => write!(f, "filler-word"),
            FindingKind::MissingIntroduction => write!(f, "missing-introduction"),
            FindingKind::MissingConclusion => write!(f, "missing-conclusion"),
        }
    }
}

/// Position in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in characters (1-indexed)
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start of the transcript
    pub fn start() -> Self {
        Self::new(1, 1)
    }

    /// Convert a byte offset into a line/column location
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = text[line_start..offset].chars().count() + 1;
        Self { line, column }
    }
}

/// Statistics about a transcript
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptStats {
    pub words: usize,
    pub unique_words: usize,
    pub sentences: usize,
    pub average_sentence_length: f64,
    pub filler_words: usize,
    /// Grade-level estimate; absent when the estimator failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability_grade: Option<f64>,
    pub polarity: f64,
    pub subjectivity: f64,
}

fn default_scorer() -> &'static analyzer::Scorer {
    static SCORER: OnceLock<analyzer::Scorer> = OnceLock::new();
    SCORER.get_or_init(analyzer::Scorer::new)
}

/// Reject blank or whitespace-only input before it reaches the scorer
pub fn validate_transcript(text: &str) -> Result<&str, CadenceError> {
    if text.trim().is_empty() {
        Err(CadenceError::EmptyInput)
    } else {
        Ok(text)
    }
}

/// Public API: score a transcript with the default scorer.
///
/// Blank input scores 0 in every category; callers that want to reject it
/// should run [`validate_transcript`] first.
pub fn evaluate_transcript(text: &str) -> Evaluation {
    default_scorer().evaluate(STDIN_SOURCE, text)
}

/// Public API: read and score a transcript file.
///
/// * `path` - transcript file
/// * `config_path` - optional path to .cadencerc.json; if None, searches from the file's directory
pub fn evaluate_file(
    path: &std::path::Path,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<Evaluation> {
    let work_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("."));
    let config = config::load_config(work_dir, config_path)?;
    analyzer::Scorer::with_settings(config.scorer_settings()).evaluate_file(path, Some(&config))
}
