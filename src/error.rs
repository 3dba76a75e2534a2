//! Error types shared by the library and the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Failure inside a linguistic utility (tokenizer, sentiment, readability, corrector).
///
/// Metrics never propagate these; they log and fall back to a neutral value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The operation needs at least one word token
    #[error("{operation}: text contains no words")]
    NoWords { operation: &'static str },

    /// The backend does not provide this operation
    #[error("{operation} is not supported by this analyzer")]
    Unsupported { operation: &'static str },

    /// Backend-specific failure
    #[error("{operation} failed: {reason}")]
    Backend {
        operation: &'static str,
        reason: String,
    },
}

/// Errors surfaced to the user
#[derive(Debug, Error)]
pub enum CadenceError {
    /// Blank or whitespace-only transcript; rejected before scoring
    #[error("No text entered. Please provide a transcript to evaluate.")]
    EmptyInput,

    #[error("Failed to read transcript {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
