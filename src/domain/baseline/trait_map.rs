//! Projection of category z-scores onto personality-trait sliders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::UnitInterval;

/// Scale applied to a weighted z-sum before clamping to [0, 1].
///
/// One standard deviation of weighted signal moves a slider by 0.1 from
/// its bias point.
const Z_SLIDER_SCALE: f64 = 0.1;

/// Weighted definition of a single trait slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDefinition {
    /// Category weights contributing to this trait.
    pub weights: BTreeMap<String, f64>,
    /// Resting slider position when all z-scores are zero.
    #[serde(default = "default_bias")]
    pub bias: f64,
}

fn default_bias() -> f64 {
    0.5
}

/// Table of trait systems, each a named set of trait definitions.
///
/// Loaded from the versioned asset set alongside the reference baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitTable {
    version: u32,
    systems: BTreeMap<String, BTreeMap<String, TraitDefinition>>,
}

/// Trait sliders per system, every value clamped to [0, 1].
pub type TraitProjection = BTreeMap<String, BTreeMap<String, UnitInterval>>;

impl TraitTable {
    /// Creates a trait table from its parts.
    pub fn new(version: u32, systems: BTreeMap<String, BTreeMap<String, TraitDefinition>>) -> Self {
        Self { version, systems }
    }

    /// Parses a trait table from its YAML asset form.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Returns the asset-set version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the declared system names in stable order.
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    /// Projects category z-scores onto every trait system.
    ///
    /// Pure and deterministic: identical z-score input yields identical
    /// output. Traits are soft signals, so values that would leave [0, 1]
    /// are clamped rather than rejected; categories missing from the
    /// input simply contribute nothing.
    pub fn project(&self, z_scores: &BTreeMap<String, f64>) -> TraitProjection {
        self.systems
            .iter()
            .map(|(system, traits)| {
                let sliders = traits
                    .iter()
                    .map(|(name, def)| {
                        let weighted: f64 = def
                            .weights
                            .iter()
                            .filter_map(|(category, weight)| {
                                z_scores.get(category).map(|z| z * weight)
                            })
                            .sum();
                        let value = UnitInterval::new(def.bias + Z_SLIDER_SCALE * weighted);
                        (name.clone(), value)
                    })
                    .collect();
                (system.clone(), sliders)
            })
            .collect()
    }
}
