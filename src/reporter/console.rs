//! Console reporter with colored output

use super::format_score;
use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::ScoreCalculator;
use crate::{CategoryScore, Evaluation, Finding, Rating, Severity};
use colored::Colorize;

/// Reporter for terminal output.
///
/// Colors follow `colored`'s global switch; the CLI turns them off when
/// stdout is not a terminal.
pub struct ConsoleReporter {
    /// Whether to show info findings and statistics
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single evaluation
    pub fn report(&self, evaluation: &Evaluation) {
        self.print_header(evaluation);
        self.print_score(evaluation);
        self.print_breakdown(evaluation);

        if self.verbose {
            self.print_stats(evaluation);
        }

        if !evaluation.findings.is_empty() {
            self.print_findings(&evaluation.findings);
        }

        self.print_recommendations(evaluation);
        println!();
    }

    /// Report multiple evaluations with summary
    pub fn report_many(&self, evaluations: &[Evaluation], stats: &AggregateStats) {
        for evaluation in evaluations {
            self.report(evaluation);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, evaluation: &Evaluation) {
        println!("{}", self.quiet_line(evaluation));
    }

    /// `source: score (rating)`
    pub fn quiet_line(&self, evaluation: &Evaluation) -> String {
        format!(
            "{}: {} ({})",
            evaluation.source,
            format_score(evaluation.score.value),
            self.colorize_rating(evaluation.score.rating)
        )
    }

    /// `[▓▓▓▓░░░░░░] Grammar: 4/10`
    pub fn breakdown_line(&self, entry: &CategoryScore) -> String {
        let score_str = format!("{}/{}", format_score(entry.score), format_score(entry.max));
        let colored_score = if entry.ratio() >= 0.8 {
            score_str.green()
        } else if entry.ratio() >= 0.6 {
            score_str.yellow()
        } else {
            score_str.red()
        };
        format!(
            "{} {}: {}",
            Self::create_mini_bar(entry.score, entry.max),
            entry.category.name(),
            colored_score
        )
    }

    fn print_header(&self, evaluation: &Evaluation) {
        println!();
        println!(
            "{}",
            format!("Speech Evaluation: {}", evaluation.source).bold()
        );
        println!(
            "   Words: {} | Sentences: {} | Fillers: {}",
            evaluation.stats.words, evaluation.stats.sentences, evaluation.stats.filler_words
        );
        println!();
    }

    fn print_score(&self, evaluation: &Evaluation) {
        let rating = self.colorize_rating(evaluation.score.rating);
        let score_bar = self.create_score_bar(evaluation.score.value);

        println!("   Score: {} {}", score_bar, rating.bold());
        println!(
            "   {}",
            ScoreCalculator::rating_description(evaluation.score.rating).dimmed()
        );
        println!();
    }

    fn print_breakdown(&self, evaluation: &Evaluation) {
        println!("   {}", "Score Breakdown:".bold());
        for entry in evaluation.breakdown.iter() {
            println!("   {}", self.breakdown_line(entry));
        }
        println!();
    }

    fn print_stats(&self, evaluation: &Evaluation) {
        let stats = &evaluation.stats;
        println!("   {}", "Statistics:".bold());
        println!(
            "   Unique words: {} | Avg sentence length: {:.1}",
            stats.unique_words, stats.average_sentence_length
        );
        match stats.readability_grade {
            Some(grade) => println!("   Readability grade: {grade:.1}"),
            None => println!("   Readability grade: {}", "n/a".dimmed()),
        }
        println!(
            "   Sentiment: polarity {:.2}, subjectivity {:.2}",
            stats.polarity, stats.subjectivity
        );
        println!();
    }

    fn print_findings(&self, findings: &[Finding]) {
        println!("   {}", "Findings:".bold());

        let by_severity = |severity: Severity| -> Vec<&Finding> {
            findings.iter().filter(|f| f.severity == severity).collect()
        };
        let infos = by_severity(Severity::Info);

        for finding in by_severity(Severity::Error) {
            self.print_finding(finding);
        }
        for finding in by_severity(Severity::Warning) {
            self.print_finding(finding);
        }

        if self.verbose || findings.len() <= 5 {
            for finding in infos {
                self.print_finding(finding);
            }
        } else if !infos.is_empty() {
            println!(
                "   {} {} additional notes (use --verbose to show)",
                "ℹ".blue(),
                infos.len()
            );
        }

        println!();
    }

    fn print_finding(&self, finding: &Finding) {
        let icon = match finding.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "⚠".yellow(),
            Severity::Info => "ℹ".blue(),
        };

        let location = format!("L{}:{}", finding.location.line, finding.location.column);
        println!(
            "   {} {} [{}] {}",
            icon,
            location.dimmed(),
            finding.kind.to_string().dimmed(),
            finding.message
        );

        if let Some(ref suggestion) = finding.suggestion {
            println!("       {} {}", "→".dimmed(), suggestion.italic());
        }
    }

    fn print_recommendations(&self, evaluation: &Evaluation) {
        println!("   {}", "Recommendations:".bold());
        for rec in &evaluation.recommendations {
            println!("   {} {}", "→".cyan(), rec);
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Files evaluated: {}",
            stats.files_evaluated.to_string().bold()
        );
        println!(
            "   Average score:   {} ({})",
            format_score(stats.average_score.value).bold(),
            self.colorize_rating(stats.average_score.rating)
        );
        println!("   Total words:     {}", stats.total_words);
        println!("   Total findings:  {}", stats.total_findings);
        println!();
    }

    fn colorize_rating(&self, rating: Rating) -> colored::ColoredString {
        let s = rating.to_string();
        match rating {
            Rating::Excellent => s.green().bold(),
            Rating::Good => s.green(),
            Rating::Fair => s.yellow(),
            Rating::NeedsImprovement => s.red(),
        }
    }

    fn create_score_bar(&self, score: f64) -> String {
        let filled = ((score / 100.0 * 20.0).round() as usize).min(20);
        let empty = 20 - filled;

        let bar = format!(
            "[{}{}] {}/100",
            "█".repeat(filled),
            "░".repeat(empty),
            format_score(score)
        );

        if score >= 80.0 {
            bar.green().to_string()
        } else if score >= 60.0 {
            bar.yellow().to_string()
        } else {
            bar.red().to_string()
        }
    }

    fn create_mini_bar(score: f64, max: f64) -> String {
        let filled = if max > 0.0 {
            ((score / max * 10.0).round() as usize).min(10)
        } else {
            0
        };
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(10 - filled))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
