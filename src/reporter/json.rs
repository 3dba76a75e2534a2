//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::Evaluation;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single evaluation as JSON
    pub fn report(&self, evaluation: &Evaluation) -> String {
        self.render(evaluation, "{}")
    }

    /// Report with summary
    pub fn report_with_summary(&self, evaluations: &[Evaluation], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: evaluations,
            summary: JsonSummary {
                files_evaluated: stats.files_evaluated,
                average_score: stats.average_score.value,
                average_rating: stats.average_score.rating.to_string(),
                total_words: stats.total_words,
                total_findings: stats.total_findings,
            },
        };
        self.render(&output, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [Evaluation],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files_evaluated: usize,
    average_score: f64,
    average_rating: String,
    total_words: usize,
    total_findings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Scorer;
    use crate::Score;

    fn make_evaluation(source: &str, text: &str) -> Evaluation {
        Scorer::new().evaluate(source, text)
    }

    #[test]
    fn test_json_single_evaluation_has_expected_keys() {
        let evaluation = make_evaluation("talk.txt", "um we started late");
        let json = JsonReporter::new().report(&evaluation);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["source"], "talk.txt");
        assert!(parsed["score"]["value"].is_number());
        assert!(parsed["score"]["rating"].is_string());
        assert!(parsed.get("stats").is_some());
        assert!(parsed.get("recommendations").is_some());

        let breakdown = parsed["breakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 7);
        assert_eq!(breakdown[0]["category"], "grammar");
        assert_eq!(breakdown[6]["category"], "contentStructure");
        assert_eq!(breakdown[6]["max"], 30.0);

        let findings = parsed["findings"].as_array().unwrap();
        assert!(findings.iter().any(|f| f["kind"] == "filler-word"));
    }

    #[test]
    fn test_json_rating_is_kebab_case() {
        let mut evaluation = make_evaluation("t", "hi");
        evaluation.score = Score::new(10.0);
        let json = JsonReporter::new().report(&evaluation);
        assert!(json.contains("\"needs-improvement\""));
    }

    #[test]
    fn test_json_pretty_output() {
        let evaluation = make_evaluation("t", "Hello there.");
        let json = JsonReporter::new().pretty().report(&evaluation);
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn test_json_report_with_summary() {
        let e1 = make_evaluation("a.txt", "Hello there.");
        let e2 = make_evaluation("b.txt", "Good evening.");
        let stats = AggregateStats {
            files_evaluated: 2,
            average_score: Score::new(55.0),
            total_words: 4,
            total_findings: 3,
        };

        let json = JsonReporter::new().report_with_summary(&[e1, e2], &stats);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let summary = &parsed["summary"];
        assert_eq!(summary["filesEvaluated"], 2);
        assert_eq!(summary["averageScore"], 55.0);
        assert_eq!(summary["averageRating"], "Fair");
        assert_eq!(summary["totalWords"], 4);
        assert_eq!(summary["totalFindings"], 3);
        let results = parsed["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["source"], "a.txt");
        assert_eq!(results[1]["source"], "b.txt");
    }

    #[test]
    fn test_json_report_with_summary_empty() {
        let json = JsonReporter::new().report_with_summary(&[], &AggregateStats::default());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["results"].as_array().unwrap().is_empty());
        assert_eq!(parsed["summary"]["filesEvaluated"], 0);
        assert_eq!(parsed["summary"]["averageScore"], 0.0);
    }
}
