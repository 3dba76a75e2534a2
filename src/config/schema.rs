//! Config schema and deserialization

use crate::analyzer::ScorerSettings;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Finding severity override (error, warning, info, off)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Error,
    Warning,
    Info,
    /// Hide the finding entirely
    Off,
}

impl FindingSeverity {
    /// Convert to crate::Severity if not Off
    pub fn to_severity(self) -> Option<crate::Severity> {
        match self {
            FindingSeverity::Error => Some(crate::Severity::Error),
            FindingSeverity::Warning => Some(crate::Severity::Warning),
            FindingSeverity::Info => Some(crate::Severity::Info),
            FindingSeverity::Off => None,
        }
    }
}

/// Thresholds for the content heuristics
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicsConfig {
    /// Distinct mid-sentence capitalized words needed for full entity points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_tokens: Option<usize>,

    /// Word count that earns full length points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_transcript_words: Option<usize>,
}

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Optional threshold override for matched files
    #[serde(default)]
    pub threshold: Option<u8>,
}

/// Root config structure for .cadencerc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum score threshold (exit 1 if below). Default: 0
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Glob patterns for files/directories to skip
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Transcript file suffixes (default: .txt, .md, .transcript)
    #[serde(default)]
    pub transcript_patterns: Vec<String>,

    /// Extra filler words or phrases for the clarity metric
    #[serde(default)]
    pub filler_words: Vec<String>,

    #[serde(default)]
    pub heuristics: HeuristicsConfig,

    /// Per-finding severity overrides. Key is the finding kind in kebab-case.
    /// Affects presentation only, never the score.
    #[serde(default)]
    pub findings: HashMap<String, FindingSeverity>,

    /// Per-path configuration overrides
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Get the configured severity for a finding kind
    pub fn finding_severity(&self, kind: &str) -> Option<FindingSeverity> {
        self.findings.get(kind).copied()
    }

    /// Threshold for a specific file, applying matching overrides in order
    pub fn effective_threshold(&self, file_path: &Path) -> Option<u8> {
        let mut threshold = self.threshold;
        for override_cfg in &self.overrides {
            if Self::matches_override(file_path, &override_cfg.files) {
                if let Some(t) = override_cfg.threshold {
                    threshold = Some(t);
                }
            }
        }
        threshold
    }

    /// Check if a file path matches any of the override patterns
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| {
            globset::Glob::new(pattern)
                .map(|glob| glob.compile_matcher().is_match(file_path))
                .unwrap_or(false)
        })
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        for (kind, severity) in base.findings {
            self.findings.entry(kind).or_insert(severity);
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.transcript_patterns.is_empty() {
            self.transcript_patterns = base.transcript_patterns;
        }

        let mut fillers = base.filler_words;
        for filler in self.filler_words.drain(..) {
            if !fillers.contains(&filler) {
                fillers.push(filler);
            }
        }
        self.filler_words = fillers;

        if self.heuristics.entity_tokens.is_none() {
            self.heuristics.entity_tokens = base.heuristics.entity_tokens;
        }
        if self.heuristics.long_transcript_words.is_none() {
            self.heuristics.long_transcript_words = base.heuristics.long_transcript_words;
        }

        // Base overrides first so this config's overrides win
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Get transcript file suffixes
    pub fn get_transcript_patterns(&self) -> Vec<&str> {
        if self.transcript_patterns.is_empty() {
            DEFAULT_TRANSCRIPT_PATTERNS.to_vec()
        } else {
            self.transcript_patterns.iter().map(|s| s.as_str()).collect()
        }
    }

    /// Scorer tuning derived from this config
    pub fn scorer_settings(&self) -> ScorerSettings {
        let defaults = ScorerSettings::default();
        ScorerSettings {
            entity_tokens: self
                .heuristics
                .entity_tokens
                .unwrap_or(defaults.entity_tokens),
            long_transcript_words: self
                .heuristics
                .long_transcript_words
                .unwrap_or(defaults.long_transcript_words),
            extra_filler_words: self.filler_words.clone(),
        }
    }
}

pub const DEFAULT_TRANSCRIPT_PATTERNS: &[&str] = &[".txt", ".md", ".transcript"];
