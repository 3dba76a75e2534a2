//! Scoring engine - runs every metric over one tokenized transcript

use crate::config::{Config, FindingSeverity};
use crate::text::{LexiconAnalyzer, LinguisticAnalyzer};
use crate::{
    validate_transcript, Breakdown, CadenceError, CategoryScore, Evaluation, Finding, FindingKind,
    Score, TranscriptStats,
};
use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::rules::content_structure::ContentThresholds;
use super::rules::{
    ClarityMetric, CoherenceMetric, ContentStructureMetric, EngagementMetric, GrammarMetric,
    Metric, SentenceComplexityMetric, VocabularyMetric,
};
use super::{ScoreCalculator, Transcript};

/// Tunable heuristics, usually taken from `.cadencerc.json`
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerSettings {
    pub entity_tokens: usize,
    pub long_transcript_words: usize,
    pub extra_filler_words: Vec<String>,
}

impl Default for ScorerSettings {
    fn default() -> Self {
        let thresholds = ContentThresholds::default();
        Self {
            entity_tokens: thresholds.entity_tokens,
            long_transcript_words: thresholds.long_transcript_words,
            extra_filler_words: Vec::new(),
        }
    }
}

/// Main scoring engine. Holds no per-evaluation state, so one instance can
/// score many transcripts, including in parallel.
pub struct Scorer {
    analyzer: Box<dyn LinguisticAnalyzer>,
    /// Metrics in presentation order
    metrics: Vec<Box<dyn Metric>>,
}

impl Scorer {
    /// Create a scorer with default heuristics and the lexicon analyzer
    pub fn new() -> Self {
        Self::with_settings(ScorerSettings::default())
    }

    pub fn with_settings(settings: ScorerSettings) -> Self {
        let thresholds = ContentThresholds {
            entity_tokens: settings.entity_tokens,
            long_transcript_words: settings.long_transcript_words,
        };
        let metrics: Vec<Box<dyn Metric>> = vec![
            Box::new(GrammarMetric::new()),
            Box::new(VocabularyMetric::new()),
            Box::new(SentenceComplexityMetric::new()),
            Box::new(CoherenceMetric::new()),
            Box::new(ClarityMetric::with_extra_fillers(&settings.extra_filler_words)),
            Box::new(EngagementMetric::new()),
            Box::new(ContentStructureMetric::with_thresholds(thresholds)),
        ];
        Self {
            analyzer: Box::new(LexiconAnalyzer::new()),
            metrics,
        }
    }

    /// Swap the linguistic backend
    pub fn with_analyzer(mut self, analyzer: Box<dyn LinguisticAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Score a transcript. Blank text scores 0 in every category.
    pub fn evaluate(&self, source: &str, text: &str) -> Evaluation {
        let transcript = Transcript::new(text, self.analyzer.as_ref());

        let mut breakdown = Breakdown::new();
        let mut findings = Vec::new();
        for metric in &self.metrics {
            let metric_findings = metric.analyze(&transcript);
            let score = metric.calculate_score(&transcript, &metric_findings);
            debug!(
                category = %metric.category(),
                score,
                findings = metric_findings.len(),
                "metric scored"
            );
            breakdown.push(CategoryScore::new(metric.category(), score));
            findings.extend(metric_findings);
        }
        findings.sort_by_key(|f| (f.location.line, f.location.column));

        let score = ScoreCalculator::aggregate(&breakdown);
        let recommendations = ScoreCalculator::recommendations(&breakdown);
        let stats = Self::stats(&transcript, &findings);
        debug!(source, total = score.value, rating = %score.rating, "transcript evaluated");

        Evaluation {
            source: source.to_string(),
            score,
            breakdown,
            findings,
            stats,
            recommendations,
        }
    }

    /// Read, validate and score a transcript file
    pub fn evaluate_file(&self, path: &Path, config: Option<&Config>) -> Result<Evaluation> {
        let text = fs::read_to_string(path).map_err(|source| CadenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        validate_transcript(&text)?;

        let mut evaluation = self.evaluate(&path.display().to_string(), &text);
        evaluation.findings = Self::apply_config_to_findings(evaluation.findings, config);
        Ok(evaluation)
    }

    /// Score several files sequentially
    pub fn evaluate_many(&self, paths: &[PathBuf], config: Option<&Config>) -> Vec<Result<Evaluation>> {
        paths.iter().map(|p| self.evaluate_file(p, config)).collect()
    }

    /// Score several files in parallel using rayon
    pub fn evaluate_parallel(
        &self,
        paths: &[PathBuf],
        config: Option<&Config>,
    ) -> Vec<Result<Evaluation>> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|p| self.evaluate_file(p, config))
            .collect()
    }

    /// Apply configured severity overrides. Scores are already computed, so
    /// hiding or re-labelling a finding never changes them.
    pub fn apply_config_to_findings(findings: Vec<Finding>, config: Option<&Config>) -> Vec<Finding> {
        let Some(config) = config else {
            return findings;
        };

        findings
            .into_iter()
            .filter_map(|mut finding| match config.finding_severity(&finding.kind.to_string()) {
                Some(FindingSeverity::Off) => None,
                Some(severity) => {
                    if let Some(sev) = severity.to_severity() {
                        finding.severity = sev;
                    }
                    Some(finding)
                }
                None => Some(finding),
            })
            .collect()
    }

    fn stats(transcript: &Transcript, findings: &[Finding]) -> TranscriptStats {
        let lengths = transcript.sentence_lengths();
        let average_sentence_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
        };
        let unique: HashSet<&String> = transcript.lower_words().iter().collect();
        let sentiment = transcript.sentiment();

        TranscriptStats {
            words: transcript.word_count(),
            unique_words: unique.len(),
            sentences: transcript.sentences().len(),
            average_sentence_length,
            filler_words: findings
                .iter()
                .filter(|f| f.kind == FindingKind::FillerWord)
                .count(),
            readability_grade: transcript.readability_grade(),
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
        }
    }

    /// Get aggregate stats from multiple evaluations
    pub fn aggregate_stats(evaluations: &[Evaluation]) -> AggregateStats {
        if evaluations.is_empty() {
            return AggregateStats::default();
        }

        let total: f64 = evaluations.iter().map(|e| e.score.value).sum();
        AggregateStats {
            files_evaluated: evaluations.len(),
            average_score: Score::new(total / evaluations.len() as f64),
            total_words: evaluations.iter().map(|e| e.stats.words).sum(),
            total_findings: evaluations.iter().map(|e| e.findings.len()).sum(),
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple transcript evaluations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub files_evaluated: usize,
    pub average_score: Score,
    pub total_words: usize,
    pub total_findings: usize,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            files_evaluated: 0,
            average_score: Score::new(0.0),
            total_words: 0,
            total_findings: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;
    use crate::text::{Correction, Sentiment};
    use crate::{Category, Rating, Severity};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn make_transcript_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_breakdown_in_presentation_order() {
        let evaluation = Scorer::new().evaluate("t", "Hello there. We won the game.");
        let categories: Vec<Category> = evaluation.breakdown.iter().map(|e| e.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        let maxima: Vec<f64> = evaluation.breakdown.iter().map(|e| e.max).collect();
        assert_eq!(maxima, vec![10.0, 10.0, 10.0, 10.0, 15.0, 15.0, 30.0]);
    }

    #[test]
    fn test_total_is_sum_of_sub_scores() {
        let evaluation = Scorer::new().evaluate(
            "t",
            "Good morning. Today I will explain why we moved in 2019. In conclusion, it worked.",
        );
        assert!((evaluation.score.value - evaluation.breakdown.total()).abs() < 1e-9);
        assert_eq!(evaluation.score.rating, Rating::from_score(evaluation.score.value));
    }

    #[test]
    fn test_empty_text_scores_zero_everywhere() {
        let evaluation = Scorer::new().evaluate("t", " \n ");
        assert!(evaluation.breakdown.iter().all(|e| e.score == 0.0));
        assert_eq!(evaluation.score.value, 0.0);
        assert_eq!(evaluation.stats.words, 0);
    }

    #[test]
    fn test_stats() {
        let evaluation = Scorer::new().evaluate("t", "Um, we won. We won again!");
        assert_eq!(evaluation.stats.words, 6);
        assert_eq!(evaluation.stats.unique_words, 4);
        assert_eq!(evaluation.stats.sentences, 2);
        assert_eq!(evaluation.stats.average_sentence_length, 3.0);
        assert_eq!(evaluation.stats.filler_words, 1);
        assert!(evaluation.stats.readability_grade.is_some());
    }

    #[test]
    fn test_findings_sorted_by_location() {
        let evaluation = Scorer::new().evaluate("t", "we start\num then we stop");
        let positions: Vec<(usize, usize)> = evaluation
            .findings
            .iter()
            .map(|f| (f.location.line, f.location.column))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_evaluate_file() {
        let file = make_transcript_file("Hello everyone. Thank you for listening.");
        let evaluation = Scorer::new().evaluate_file(file.path(), None).unwrap();
        assert_eq!(evaluation.source, file.path().display().to_string());
        assert!(evaluation.score.value > 0.0);
    }

    #[test]
    fn test_evaluate_file_rejects_blank() {
        let file = make_transcript_file("   \n\n");
        let err = Scorer::new().evaluate_file(file.path(), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CadenceError>(),
            Some(CadenceError::EmptyInput)
        ));
    }

    #[test]
    fn test_evaluate_file_missing() {
        let err = Scorer::new()
            .evaluate_file(Path::new("/nonexistent/speech.txt"), None)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CadenceError>(),
            Some(CadenceError::Read { .. })
        ));
    }

    #[test]
    fn test_config_severity_is_display_only() {
        let text = "Um, we started late. Uh, we finished on time anyway.";
        let file = make_transcript_file(text);
        let config: Config = serde_json::from_str(
            r#"{ "findings": { "filler-word": "off", "missing-conclusion": "warning" } }"#,
        )
        .unwrap();

        let scorer = Scorer::new();
        let plain = scorer.evaluate_file(file.path(), None).unwrap();
        let configured = scorer.evaluate_file(file.path(), Some(&config)).unwrap();

        assert_eq!(plain.breakdown, configured.breakdown);
        assert!(plain.findings.iter().any(|f| f.kind == FindingKind::FillerWord));
        assert!(!configured
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::FillerWord));
        let conclusion = configured
            .findings
            .iter()
            .find(|f| f.kind == FindingKind::MissingConclusion)
            .unwrap();
        assert_eq!(conclusion.severity, Severity::Warning);
    }

    #[test]
    fn test_settings_extend_fillers() {
        let text = "Okay, we shipped the product. Okay, customers loved it.";
        let plain = Scorer::new().evaluate("t", text);
        let tuned = Scorer::with_settings(ScorerSettings {
            extra_filler_words: vec!["okay".into()],
            ..ScorerSettings::default()
        })
        .evaluate("t", text);
        assert_eq!(plain.stats.filler_words, 0);
        assert_eq!(tuned.stats.filler_words, 2);
        assert!(
            tuned.breakdown.get(Category::Clarity).unwrap()
                < plain.breakdown.get(Category::Clarity).unwrap()
        );
    }

    #[test]
    fn test_evaluate_many_and_parallel() {
        let a = make_transcript_file("Hello there. We built a bridge.");
        let b = make_transcript_file("Good evening. Thank you all.");
        let paths = vec![a.path().to_path_buf(), b.path().to_path_buf()];

        let scorer = Scorer::new();
        let sequential = scorer.evaluate_many(&paths, None);
        let parallel = scorer.evaluate_parallel(&paths, None);
        assert_eq!(sequential.len(), 2);
        for (s, p) in sequential.iter().zip(&parallel) {
            let (s, p) = (s.as_ref().unwrap(), p.as_ref().unwrap());
            assert_eq!(s.score, p.score);
        }
    }

    #[test]
    fn test_aggregate_stats_empty() {
        let stats = Scorer::aggregate_stats(&[]);
        assert_eq!(stats.files_evaluated, 0);
        assert_eq!(stats.average_score.value, 0.0);
    }

    #[test]
    fn test_aggregate_stats_multiple() {
        let scorer = Scorer::new();
        let e1 = scorer.evaluate("a", "Hello there. We built a bridge.");
        let e2 = scorer.evaluate("b", "um");
        let stats = Scorer::aggregate_stats(&[e1.clone(), e2.clone()]);
        assert_eq!(stats.files_evaluated, 2);
        assert_eq!(stats.total_words, e1.stats.words + e2.stats.words);
        assert_eq!(
            stats.average_score.value,
            (e1.score.value + e2.score.value) / 2.0
        );
    }

    struct SilentBackend;

    impl LinguisticAnalyzer for SilentBackend {
        fn sentences(&self, _: &str) -> Result<Vec<String>, AnalyzerError> {
            Err(AnalyzerError::Unsupported {
                operation: "sentences",
            })
        }
        fn words(&self, _: &str) -> Result<Vec<String>, AnalyzerError> {
            Err(AnalyzerError::Unsupported { operation: "words" })
        }
        fn sentiment(&self, _: &str) -> Result<Sentiment, AnalyzerError> {
            Err(AnalyzerError::Unsupported {
                operation: "sentiment",
            })
        }
        fn readability_grade(&self, _: &str) -> Result<f64, AnalyzerError> {
            Err(AnalyzerError::Unsupported {
                operation: "readability",
            })
        }
        fn corrections(&self, _: &str) -> Result<Vec<Correction>, AnalyzerError> {
            Err(AnalyzerError::Unsupported {
                operation: "corrections",
            })
        }
    }

    #[test]
    fn test_failing_backend_still_completes() {
        let scorer = Scorer::new().with_analyzer(Box::new(SilentBackend));
        let evaluation = scorer.evaluate("t", "We met. It went well.");
        assert_eq!(evaluation.breakdown.len(), 7);
        assert!(evaluation.score.value >= 0.0 && evaluation.score.value <= 100.0);
        assert_eq!(evaluation.stats.readability_grade, None);
        assert_eq!(evaluation.stats.polarity, 0.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::Category;
    use proptest::prelude::*;

    fn sentence_text() -> impl Strategy<Value = String> {
        prop::collection::vec("[A-Za-z]{1,9}[.,!?]?", 0..60).prop_map(|w| w.join(" "))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn sub_scores_and_total_stay_in_bounds(text in "\\PC{0,400}") {
            let evaluation = Scorer::new().evaluate("p", &text);
            for entry in evaluation.breakdown.iter() {
                prop_assert!(entry.score >= 0.0 && entry.score <= entry.max, "{:?}", entry);
            }
            prop_assert!(evaluation.score.value >= 0.0 && evaluation.score.value <= 100.0);
        }

        #[test]
        fn evaluation_is_deterministic(text in sentence_text()) {
            let scorer = Scorer::new();
            let first = scorer.evaluate("p", &text);
            let second = scorer.evaluate("p", &text);
            prop_assert_eq!(first.breakdown, second.breakdown);
            prop_assert_eq!(first.score, second.score);
            prop_assert_eq!(first.findings.len(), second.findings.len());
        }

        #[test]
        fn whitespace_only_scores_zero(text in "[ \t\r\n]{0,40}") {
            let evaluation = Scorer::new().evaluate("p", &text);
            prop_assert!(evaluation.breakdown.iter().all(|e| e.score == 0.0));
            prop_assert_eq!(evaluation.score.value, 0.0);
        }

        #[test]
        fn extra_filler_never_raises_clarity(text in sentence_text()) {
            let scorer = Scorer::new();
            let before = scorer.evaluate("p", &text).breakdown.get(Category::Clarity);
            let after = scorer
                .evaluate("p", &format!("{text} um"))
                .breakdown
                .get(Category::Clarity);
            prop_assert!(after <= before, "{:?} > {:?}", after, before);
        }
    }
}
