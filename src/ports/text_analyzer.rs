//! TextAnalyzer port - interface to the external linguistic analyzer.
//!
//! The engine treats category scoring as an external capability with a
//! fixed output shape: named categories mapped to numeric scores. How the
//! analyzer computes them (lexicon matching, a remote service) is outside
//! the engine's contract.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::foundation::EngineError;

/// Port for computing linguistic category scores for a text.
///
/// Implementations must return a score for every category the reference
/// baseline declares, or explicitly omit it — omission, not zero, signals
/// "not measured". Scoring is synchronous and must be pure: identical
/// text yields identical scores.
pub trait TextAnalyzer: Send + Sync {
    /// Computes category scores for the given text.
    fn score(&self, text: &str) -> Result<BTreeMap<String, f64>, AnalyzerError>;
}

/// Errors from the external analyzer.
#[derive(Debug, Clone, Error)]
pub enum AnalyzerError {
    /// The analyzer backend could not be reached.
    #[error("analyzer unavailable: {message}")]
    Unavailable { message: String },

    /// The analyzer returned output the engine could not interpret.
    #[error("malformed analyzer output: {message}")]
    MalformedOutput { message: String },
}

impl AnalyzerError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        AnalyzerError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a malformed output error.
    pub fn malformed_output(message: impl Into<String>) -> Self {
        AnalyzerError::MalformedOutput {
            message: message.into(),
        }
    }
}

impl From<AnalyzerError> for EngineError {
    fn from(err: AnalyzerError) -> Self {
        EngineError::analyzer_failure(err.to_string())
    }
}
