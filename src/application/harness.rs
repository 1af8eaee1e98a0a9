//! Generator harness: prompt assembly and the single external call.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

use crate::domain::directive::StyleDirective;
use crate::domain::foundation::{EngineError, PromptId};
use crate::ports::{GeneratorError, TextGenerator};

/// Raw generation output with provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub raw_text: String,
    pub prompt_id: PromptId,
    /// Whitespace-token estimate of the generated text.
    pub token_count: usize,
}

/// Thin orchestration around the external generator.
///
/// Assembles one prompt from the directive, makes one call under a
/// timeout, and returns the text untouched. No retries and no
/// interpretation of the output; both belong to other layers.
pub struct GeneratorHarness {
    generator: Arc<dyn TextGenerator>,
    call_timeout: Duration,
}

impl GeneratorHarness {
    /// Creates a harness over the injected generator.
    pub fn new(generator: Arc<dyn TextGenerator>, call_timeout: Duration) -> Self {
        Self {
            generator,
            call_timeout,
        }
    }

    /// Assembles the full prompt for a directive.
    fn assemble_prompt(directive: &StyleDirective) -> String {
        format!("{}\n\n{}", directive.scaffold, directive.prompt_block())
    }

    /// Runs one generation call.
    ///
    /// `GeneratorUnavailable` propagates on transport error or expiry of
    /// the configured timeout.
    pub async fn run(&self, directive: &StyleDirective) -> Result<GenerationOutput, EngineError> {
        let prompt = Self::assemble_prompt(directive);
        let prompt_id = PromptId::new();

        let raw_text = match timeout(self.call_timeout, self.generator.generate(&prompt)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(GeneratorError::timeout(self.call_timeout.as_secs()).into());
            }
        };

        let token_count = raw_text.split_whitespace().count();
        info!(%prompt_id, token_count, "generation call completed");

        Ok(GenerationOutput {
            raw_text,
            prompt_id,
            token_count,
        })
    }
}
