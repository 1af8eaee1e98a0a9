//! Error types for the style engine domain.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the style engine.
///
/// Extraction- and planning-time errors are fail-fast: they never leave a
/// partial profile or directive behind. Analyzer and generator failures are
/// propagated unchanged so the orchestration layer owns retry policy.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// No usable sample text was provided.
    #[error("empty input: {reason}")]
    EmptyInput { reason: String },

    /// The external text analyzer errored.
    #[error("analyzer failure: {message}")]
    AnalyzerFailure { message: String },

    /// A category is absent from the reference baseline.
    #[error("unknown category '{category}'")]
    UnknownCategory { category: String },

    /// An adapter key did not resolve in the registry.
    #[error("unknown adapter '{key}'")]
    UnknownAdapter { key: String },

    /// A directive merge produced a result missing a required field.
    #[error("incomplete directive: missing required field '{field}'")]
    IncompleteDirective { field: &'static str },

    /// The external text generator errored or timed out.
    #[error("generator unavailable: {message}")]
    GeneratorUnavailable { message: String },

    /// A report bundle is missing a required upstream field.
    ///
    /// Indicates an internal invariant violation, not a recoverable
    /// runtime condition.
    #[error("incomplete bundle: missing required field '{field}'")]
    IncompleteBundle { field: &'static str },
}

impl EngineError {
    /// Creates an empty input error.
    pub fn empty_input(reason: impl Into<String>) -> Self {
        EngineError::EmptyInput {
            reason: reason.into(),
        }
    }

    /// Creates an analyzer failure error.
    pub fn analyzer_failure(message: impl Into<String>) -> Self {
        EngineError::AnalyzerFailure {
            message: message.into(),
        }
    }

    /// Creates an unknown category error.
    pub fn unknown_category(category: impl Into<String>) -> Self {
        EngineError::UnknownCategory {
            category: category.into(),
        }
    }

    /// Creates an unknown adapter error.
    pub fn unknown_adapter(key: impl Into<String>) -> Self {
        EngineError::UnknownAdapter { key: key.into() }
    }

    /// Creates an incomplete directive error.
    pub fn incomplete_directive(field: &'static str) -> Self {
        EngineError::IncompleteDirective { field }
    }

    /// Creates a generator unavailable error.
    pub fn generator_unavailable(message: impl Into<String>) -> Self {
        EngineError::GeneratorUnavailable {
            message: message.into(),
        }
    }

    /// Creates an incomplete bundle error.
    pub fn incomplete_bundle(field: &'static str) -> Self {
        EngineError::IncompleteBundle { field }
    }
}
