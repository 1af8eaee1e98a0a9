//! Engine tuning configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Tunable thresholds for extraction, enforcement, and validation.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Validation score at or above which output passes.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u8,

    /// Word count above which a sentence counts as long.
    #[serde(default = "default_long_sentence_words")]
    pub long_sentence_words: usize,

    /// Label applied to unlabeled samples.
    #[serde(default = "default_general_label")]
    pub general_label: String,

    /// Tokens kept per mined lexicon bucket.
    #[serde(default = "default_lexicon_top_n")]
    pub lexicon_top_n: usize,
}

impl EngineConfig {
    /// Validates engine configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pass_threshold > 100 {
            return Err(ValidationError::invalid_value(
                "engine.pass_threshold",
                "must be at most 100",
            ));
        }
        if self.long_sentence_words == 0 {
            return Err(ValidationError::invalid_value(
                "engine.long_sentence_words",
                "must be at least 1",
            ));
        }
        if self.lexicon_top_n == 0 {
            return Err(ValidationError::invalid_value(
                "engine.lexicon_top_n",
                "must be at least 1",
            ));
        }
        if self.general_label.trim().is_empty() {
            return Err(ValidationError::invalid_value(
                "engine.general_label",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
            long_sentence_words: default_long_sentence_words(),
            general_label: default_general_label(),
            lexicon_top_n: default_lexicon_top_n(),
        }
    }
}

fn default_pass_threshold() -> u8 {
    70
}

fn default_long_sentence_words() -> usize {
    20
}

fn default_general_label() -> String {
    "general".to_string()
}

fn default_lexicon_top_n() -> usize {
    12
}
