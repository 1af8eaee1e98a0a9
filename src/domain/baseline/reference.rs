//! Reference baseline: population norms per linguistic category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::EngineError;

/// Population mean and standard deviation for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryNorm {
    pub mean: f64,
    pub stdev: f64,
}

impl CategoryNorm {
    /// Creates a new category norm.
    pub fn new(mean: f64, stdev: f64) -> Self {
        Self { mean, stdev }
    }

    /// True when the population shows no variance for this category.
    ///
    /// A degenerate norm cannot discriminate; z-scores against it are
    /// reported as zero with a flag rather than dividing by zero.
    pub fn is_degenerate(&self) -> bool {
        self.stdev == 0.0
    }
}

/// A named genre/context bucket in the domain taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainLegendEntry {
    /// Domain name (e.g. "professional", "casual").
    pub name: String,
    /// Human-readable description of the bucket.
    pub description: String,
}

/// Immutable table of population norms, domain taxonomy, and per-category
/// domain anchors.
///
/// Loaded once at process start and shared read-only for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBaseline {
    /// Asset-set version, bumped when the norm table changes.
    version: u32,
    /// Norms keyed by category name.
    categories: BTreeMap<String, CategoryNorm>,
    /// Taxonomy of named domains.
    #[serde(default)]
    domains: Vec<DomainLegendEntry>,
    /// Per-category anchor z-values by domain: category -> domain -> anchor.
    #[serde(default)]
    anchors: BTreeMap<String, BTreeMap<String, f64>>,
}

impl ReferenceBaseline {
    /// Creates a baseline from its parts.
    pub fn new(
        version: u32,
        categories: BTreeMap<String, CategoryNorm>,
        domains: Vec<DomainLegendEntry>,
        anchors: BTreeMap<String, BTreeMap<String, f64>>,
    ) -> Self {
        Self {
            version,
            categories,
            domains,
            anchors,
        }
    }

    /// Parses a baseline from its YAML asset form.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Returns the asset-set version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Looks up the norm for a category.
    ///
    /// Fails with `UnknownCategory` when the category is absent; callers
    /// must not silently default to zero variance.
    pub fn lookup(&self, category: &str) -> Result<&CategoryNorm, EngineError> {
        self.categories
            .get(category)
            .ok_or_else(|| EngineError::unknown_category(category))
    }

    /// Checks whether a category is declared.
    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Iterates declared category names in stable order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of declared categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns the domain taxonomy.
    pub fn domain_legend(&self) -> &[DomainLegendEntry] {
        &self.domains
    }

    /// Returns the anchor z-value for a category within a domain, if one
    /// is declared.
    pub fn anchor(&self, category: &str, domain: &str) -> Option<f64> {
        self.anchors.get(category)?.get(domain).copied()
    }

    /// Computes the z-score of a corpus mean against this baseline.
    ///
    /// Returns `(z, degenerate)`: when the baseline stdev is zero the
    /// z-score is undefined and reported as `(0.0, true)`.
    pub fn z_score(&self, category: &str, corpus_mean: f64) -> Result<(f64, bool), EngineError> {
        let norm = self.lookup(category)?;
        if norm.is_degenerate() {
            return Ok((0.0, true));
        }
        Ok(((corpus_mean - norm.mean) / norm.stdev, false))
    }
}
