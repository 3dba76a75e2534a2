//! HTML reporter: generates a self-contained report page
//!
//! Markup is rendered up front so the page works without scripts; the raw
//! evaluations are also embedded as JSON for anyone post-processing the file.

use super::format_score;
use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::ScoreCalculator;
use crate::{Evaluation, Rating, Severity};
use std::fmt::Write;

/// Ensure no `</script>` can appear inside the embedded JSON block
fn escape_json_for_script(s: &str) -> String {
    s.replace("</script>", "<\\/script>")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn rating_class(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "excellent",
        Rating::Good => "good",
        Rating::Fair => "fair",
        Rating::NeedsImprovement => "poor",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

/// Reporter that generates a self-contained HTML page
pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }

    /// Generate the full HTML report
    pub fn report(&self, evaluations: &[Evaluation], stats: &AggregateStats) -> String {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let data_json = serde_json::to_string(evaluations).unwrap_or_else(|_| "[]".to_string());

        let mut html = String::with_capacity(16_384);
        html.push_str(Self::template_head());
        html.push_str("<body>\n<header><h1>Cadence – Speech Evaluation</h1>");
        let _ = write!(
            html,
            "<p class=\"meta\">Generated {} · {} transcript(s)</p></header>\n",
            generated, stats.files_evaluated
        );

        if evaluations.len() > 1 {
            Self::render_summary(&mut html, stats);
        }
        for evaluation in evaluations {
            Self::render_evaluation(&mut html, evaluation);
        }

        html.push_str("<script type=\"application/json\" id=\"cadence-data\">");
        html.push_str(&escape_json_for_script(&data_json));
        html.push_str("</script>\n</body>\n</html>\n");
        html
    }

    fn render_summary(html: &mut String, stats: &AggregateStats) {
        let rating = stats.average_score.rating;
        let _ = write!(
            html,
            "<section class=\"summary\"><h2>Summary</h2>\
             <div class=\"metric {}\"><span class=\"value\">{}%</span>\
             <span class=\"label\">average · {}</span></div>\
             <p>{} words · {} findings</p></section>\n",
            rating_class(rating),
            format_score(stats.average_score.value),
            rating,
            stats.total_words,
            stats.total_findings
        );
    }

    fn render_evaluation(html: &mut String, evaluation: &Evaluation) {
        let rating = evaluation.score.rating;
        let _ = write!(
            html,
            "<section class=\"evaluation\">\n<h2>{}</h2>\n\
             <div class=\"metric {}\"><span class=\"value\">{}%</span>\
             <span class=\"label\">{}</span></div>\n<p class=\"feedback\">{}</p>\n",
            escape_html(&evaluation.source),
            rating_class(rating),
            format_score(evaluation.score.value),
            rating,
            ScoreCalculator::rating_description(rating)
        );

        html.push_str("<table class=\"breakdown\">\n");
        for entry in evaluation.breakdown.iter() {
            let percent = (entry.ratio() * 100.0).round();
            let _ = writeln!(
                html,
                "<tr><th>{}</th><td><div class=\"bar\"><div class=\"fill\" style=\"width:{}%\"></div></div></td>\
                 <td class=\"num\">{}/{}</td></tr>",
                escape_html(entry.category.name()),
                percent,
                format_score(entry.score),
                format_score(entry.max)
            );
        }
        html.push_str("</table>\n");

        if !evaluation.findings.is_empty() {
            html.push_str("<h3>Findings</h3>\n<ul class=\"findings\">\n");
            for finding in &evaluation.findings {
                let _ = write!(
                    html,
                    "<li class=\"{}\"><span class=\"loc\">L{}:{}</span> <code>{}</code> {}",
                    severity_class(finding.severity),
                    finding.location.line,
                    finding.location.column,
                    finding.kind,
                    escape_html(&finding.message)
                );
                if let Some(ref suggestion) = finding.suggestion {
                    let _ = write!(html, "<div class=\"hint\">{}</div>", escape_html(suggestion));
                }
                html.push_str("</li>\n");
            }
            html.push_str("</ul>\n");
        }

        html.push_str("<h3>Recommendations</h3>\n<ul class=\"recs\">\n");
        for rec in &evaluation.recommendations {
            let _ = writeln!(html, "<li>{}</li>", escape_html(rec));
        }
        html.push_str("</ul>\n</section>\n");
    }

    fn template_head() -> &'static str {
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Cadence – Speech Evaluation Report</title>
<style>
:root{--bg:#0f1117;--panel:#181b24;--text:#e6e8ef;--muted:#8b90a0;--accent:#6c8cff;
--excellent:#3fb950;--good:#8bd450;--fair:#d29922;--poor:#f85149}
*{box-sizing:border-box}
body{margin:0 auto;max-width:960px;padding:24px;background:var(--bg);color:var(--text);
font:14px/1.5 -apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif}
h1{font-size:22px;margin:0}h2{font-size:18px;margin:0 0 12px}h3{font-size:15px;margin:18px 0 8px}
.meta{color:var(--muted);margin:4px 0 24px}
section{background:var(--panel);border-radius:10px;padding:20px;margin-bottom:20px}
.metric{display:flex;align-items:baseline;gap:12px}
.metric .value{font-size:40px;font-weight:700}
.metric .label{color:var(--muted);font-size:16px}
.excellent .value{color:var(--excellent)}.good .value{color:var(--good)}
.fair .value{color:var(--fair)}.poor .value{color:var(--poor)}
.feedback{color:var(--muted);margin:4px 0 16px}
table.breakdown{width:100%;border-collapse:collapse}
table.breakdown th{text-align:left;font-weight:500;width:200px;padding:4px 0}
table.breakdown td.num{text-align:right;width:70px;color:var(--muted)}
.bar{background:#262a36;border-radius:4px;height:10px;overflow:hidden}
.fill{background:var(--accent);height:100%}
ul{padding-left:18px;margin:0}
.findings li{margin:4px 0}.findings code{color:var(--muted)}
.findings .error{color:var(--poor)}.findings .warning{color:var(--fair)}
.loc{color:var(--muted);font-family:monospace}
.hint{color:var(--muted);font-style:italic;margin-left:16px}
</style>
</head>
"##
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Scorer;
    use crate::Score;

    fn stats(files: usize, average: f64) -> AggregateStats {
        AggregateStats {
            files_evaluated: files,
            average_score: Score::new(average),
            total_words: 0,
            total_findings: 0,
        }
    }

    #[test]
    fn test_report_contains_structure() {
        let evaluation = Scorer::new().evaluate("keynote.txt", "um we started late");
        let html = HtmlReporter::new().report(&[evaluation.clone()], &stats(1, 0.0));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("keynote.txt"));
        assert!(html.contains(&format!("{}%", format_score(evaluation.score.value))));
        assert!(html.contains(&evaluation.score.rating.to_string()));
        assert!(html.contains("Content &amp; Structure"));
        assert!(html.contains("filler-word"));
        assert!(html.contains("id=\"cadence-data\""));
        assert!(!html.contains("class=\"summary\""));
    }

    #[test]
    fn test_bars_are_proportional() {
        let evaluation = Scorer::new().evaluate("t", "um");
        let html = HtmlReporter::new().report(&[evaluation], &stats(1, 0.0));
        // "um" alone: clarity 0/15
        assert!(html.contains("style=\"width:0%\""));
    }

    #[test]
    fn test_summary_for_many() {
        let scorer = Scorer::new();
        let a = scorer.evaluate("a.txt", "Hello there.");
        let b = scorer.evaluate("b.txt", "Good evening.");
        let html = HtmlReporter::new().report(&[a, b], &stats(2, 37.5));
        assert!(html.contains("class=\"summary\""));
        assert!(html.contains("37.5%"));
    }

    #[test]
    fn test_source_is_escaped() {
        let evaluation = Scorer::new().evaluate("<b>talk</b>.txt", "Hello.");
        let html = HtmlReporter::new().report(&[evaluation], &stats(1, 0.0));
        assert!(html.contains("&lt;b&gt;talk&lt;/b&gt;.txt"));
    }

    #[test]
    fn test_escape_json_for_script() {
        assert_eq!(
            escape_json_for_script("</script>alert(1)"),
            "<\\/script>alert(1)"
        );
        assert_eq!(escape_json_for_script("normal"), "normal");
    }

    #[test]
    fn test_empty_results() {
        let html = HtmlReporter::new().report(&[], &stats(0, 0.0));
        assert!(html.contains(">[]</script>"));
    }
}
