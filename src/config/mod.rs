//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `VOICEPRINT`
//! prefix and `__` (double underscore) separating nested keys:
//!
//! - `VOICEPRINT__ENGINE__PASS_THRESHOLD=75` -> `engine.pass_threshold`
//! - `VOICEPRINT__GENERATOR__API_KEY=...` -> `generator.api_key`

mod assets;
mod engine;
mod error;
mod generator;

pub use assets::AssetCatalog;
pub use engine::EngineConfig;
pub use error::{AssetError, ConfigError, ValidationError};
pub use generator::GeneratorConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine thresholds and labels.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Generation provider settings.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Optional directory overriding the compiled-in asset set.
    #[serde(default)]
    pub asset_dir: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file first when present (development), then the
    /// `VOICEPRINT__` prefixed environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VOICEPRINT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates all configuration sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.generator.validate()?;
        Ok(())
    }
}
