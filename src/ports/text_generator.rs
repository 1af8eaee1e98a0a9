//! TextGenerator port - interface to the external text-generation model.
//!
//! The engine hands a fully assembled prompt to the generator and gets raw
//! text back. Retry and backoff policy belongs to the caller, never to
//! implementations of this port or to the harness that consumes it.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::EngineError;

/// Port for the external generative model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// Errors from the external generator.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    /// The request did not complete within the configured timeout.
    #[error("generation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Transport-level failure reaching the provider.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The provider answered with an error status.
    #[error("provider error (status {status}): {message}")]
    Provider { status: u16, message: String },
}

impl GeneratorError {
    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        GeneratorError::Timeout { timeout_secs }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        GeneratorError::Transport {
            message: message.into(),
        }
    }

    /// Creates a provider error.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        GeneratorError::Provider {
            status,
            message: message.into(),
        }
    }
}

impl From<GeneratorError> for EngineError {
    fn from(err: GeneratorError) -> Self {
        EngineError::generator_unavailable(err.to_string())
    }
}
