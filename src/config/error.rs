//! Configuration error types.

use thiserror::Error;

/// Errors loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded configuration.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("missing required configuration: {0}")]
    MissingRequired(&'static str),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ValidationError {
    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors loading the versioned asset set.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {name}: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse asset {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_field() {
        let err = ValidationError::invalid_value("engine.pass_threshold", "must be at most 100");
        assert_eq!(
            err.to_string(),
            "invalid value for engine.pass_threshold: must be at most 100"
        );
    }

    #[test]
    fn missing_required_names_the_key() {
        let err = ValidationError::MissingRequired("GENERATOR_API_KEY");
        assert_eq!(
            err.to_string(),
            "missing required configuration: GENERATOR_API_KEY"
        );
    }
}
