//! Generation provider configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the external generation provider.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// API key for the completion endpoint.
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the completion API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens requested per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl GeneratorConfig {
    /// Returns the timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validates generator configuration.
    ///
    /// An absent key is allowed (mock-backed runs); a present but empty
    /// key is a configuration mistake.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.api_key {
            if key.trim().is_empty() {
                return Err(ValidationError::invalid_value(
                    "generator.api_key",
                    "must not be empty when set",
                ));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::invalid_value(
                "generator.timeout_secs",
                "must be at least 1",
            ));
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::invalid_value(
                "generator.max_tokens",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "composer-large".to_string()
}

fn default_base_url() -> String {
    "https://api.generation.example.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_api_key());
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let config = GeneratorConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn present_api_key_is_detected() {
        let config = GeneratorConfig {
            api_key: Some("vk-live-key".to_string()),
            ..Default::default()
        };
        assert!(config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = GeneratorConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
