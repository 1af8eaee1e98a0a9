//! Versioned asset catalog: baseline, trait table, and adapter registry.

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::domain::baseline::{ReferenceBaseline, TraitTable};
use crate::domain::directive::AdapterRegistry;

use super::error::AssetError;

/// Compiled-in default assets.
const BASELINE_YAML: &str = include_str!("../../assets/reference_baseline.yaml");
const TRAIT_TABLE_YAML: &str = include_str!("../../assets/trait_table.yaml");
const ADAPTERS_YAML: &str = include_str!("../../assets/adapters.yaml");

/// The read-only tables every component shares.
///
/// Constructed once at process start; the `Arc`s are cloned into each
/// component so no global mutable state exists.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    pub baseline: Arc<ReferenceBaseline>,
    pub trait_table: Arc<TraitTable>,
    pub adapters: Arc<AdapterRegistry>,
}

impl AssetCatalog {
    /// Loads the compiled-in default asset set.
    pub fn builtin() -> Self {
        let baseline =
            ReferenceBaseline::from_yaml_str(BASELINE_YAML).expect("built-in baseline must parse");
        let trait_table =
            TraitTable::from_yaml_str(TRAIT_TABLE_YAML).expect("built-in trait table must parse");
        let adapters =
            AdapterRegistry::from_yaml_str(ADAPTERS_YAML).expect("built-in adapters must parse");
        Self {
            baseline: Arc::new(baseline),
            trait_table: Arc::new(trait_table),
            adapters: Arc::new(adapters),
        }
    }

    /// Loads an asset set from a directory containing the three YAML
    /// files.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();

        let baseline_text = std::fs::read_to_string(dir.join("reference_baseline.yaml"))
            .map_err(|source| AssetError::Io {
                name: "reference_baseline.yaml",
                source,
            })?;
        let baseline =
            ReferenceBaseline::from_yaml_str(&baseline_text).map_err(|source| AssetError::Parse {
                name: "reference_baseline.yaml",
                source,
            })?;

        let traits_text = std::fs::read_to_string(dir.join("trait_table.yaml")).map_err(
            |source| AssetError::Io {
                name: "trait_table.yaml",
                source,
            },
        )?;
        let trait_table =
            TraitTable::from_yaml_str(&traits_text).map_err(|source| AssetError::Parse {
                name: "trait_table.yaml",
                source,
            })?;

        let adapters_text = std::fs::read_to_string(dir.join("adapters.yaml")).map_err(
            |source| AssetError::Io {
                name: "adapters.yaml",
                source,
            },
        )?;
        let adapters =
            AdapterRegistry::from_yaml_str(&adapters_text).map_err(|source| AssetError::Parse {
                name: "adapters.yaml",
                source,
            })?;

        info!(
            baseline_version = baseline.version(),
            adapters_version = adapters.version(),
            "loaded asset catalog"
        );

        Ok(Self {
            baseline: Arc::new(baseline),
            trait_table: Arc::new(trait_table),
            adapters: Arc::new(adapters),
        })
    }
}
