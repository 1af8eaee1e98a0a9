//! Adapter overlays: per-channel style biases.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::domain::foundation::{EngineError, UnitInterval};
use crate::domain::profile::{
    CadencePattern, CadenceRun, CtaStyle, EmpathyTarget, PronounDistance, SentenceKind,
};

/// Closed set of metaphor families an adapter may permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaphorTag {
    Journey,
    Craft,
    Sports,
    Nature,
    Machinery,
    Combat,
}

impl fmt::Display for MetaphorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Journey => write!(f, "journey"),
            Self::Craft => write!(f, "craft"),
            Self::Sports => write!(f, "sports"),
            Self::Nature => write!(f, "nature"),
            Self::Machinery => write!(f, "machinery"),
            Self::Combat => write!(f, "combat"),
        }
    }
}

/// Named partial override of an author's directive defaults.
///
/// A present field wins over the profile default at merge time; an absent
/// field falls through. Category biases are summed onto the profile's own
/// z-scores, never substituted for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterOverlay {
    /// Registry key (e.g. "linkedin").
    pub key: String,
    /// Human-readable channel name used in scaffolds.
    pub label: String,
    #[serde(default)]
    pub cadence: Option<CadencePattern>,
    #[serde(default)]
    pub pronoun_distance: Option<PronounDistance>,
    #[serde(default)]
    pub evidence_density: Option<UnitInterval>,
    #[serde(default)]
    pub empathy: Option<EmpathyTarget>,
    #[serde(default)]
    pub cta_style: Option<CtaStyle>,
    /// Additive z-bias per category.
    #[serde(default)]
    pub category_bias: BTreeMap<String, f64>,
    /// Metaphor families this channel permits.
    #[serde(default)]
    pub metaphor_tags: BTreeSet<MetaphorTag>,
}

impl AdapterOverlay {
    /// Creates an overlay with no overrides.
    pub fn empty(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            cadence: None,
            pronoun_distance: None,
            evidence_density: None,
            empathy: None,
            cta_style: None,
            category_bias: BTreeMap::new(),
            metaphor_tags: BTreeSet::new(),
        }
    }
}

/// Static registry of adapter overlays, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterRegistry {
    version: u32,
    adapters: BTreeMap<String, AdapterOverlay>,
}

impl AdapterRegistry {
    /// Creates a registry from overlays, keyed by their `key` field.
    pub fn new(version: u32, overlays: Vec<AdapterOverlay>) -> Self {
        let adapters = overlays
            .into_iter()
            .map(|overlay| (overlay.key.clone(), overlay))
            .collect();
        Self { version, adapters }
    }

    /// Parses a registry from its YAML asset form.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Returns the asset-set version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Resolves an adapter by key.
    ///
    /// Fails with `UnknownAdapter` rather than falling back, to prevent
    /// silent style drift.
    pub fn get(&self, key: &str) -> Result<&AdapterOverlay, EngineError> {
        self.adapters
            .get(key)
            .ok_or_else(|| EngineError::unknown_adapter(key))
    }

    /// Iterates registered keys in stable order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }

    /// Built-in registry for the platform's three launch channels.
    pub fn builtin() -> Self {
        let linkedin = AdapterOverlay {
            cadence: Some(CadencePattern::new(vec![
                CadenceRun { kind: SentenceKind::Long, len: 1 },
                CadenceRun { kind: SentenceKind::Short, len: 1 },
            ])),
            pronoun_distance: Some(PronounDistance::SecondPerson),
            evidence_density: Some(UnitInterval::new(0.6)),
            empathy: Some(EmpathyTarget {
                min_cues: 1,
                window_sentences: 3,
            }),
            cta_style: Some(CtaStyle::Direct),
            category_bias: BTreeMap::from([
                ("clout".to_string(), 0.3),
                ("positive_emotion".to_string(), 0.2),
            ]),
            metaphor_tags: BTreeSet::from([MetaphorTag::Journey, MetaphorTag::Sports]),
            ..AdapterOverlay::empty("linkedin", "professional network post")
        };

        let blog = AdapterOverlay {
            evidence_density: Some(UnitInterval::new(0.5)),
            cta_style: Some(CtaStyle::Soft),
            category_bias: BTreeMap::from([("analytic".to_string(), 0.2)]),
            metaphor_tags: BTreeSet::from([
                MetaphorTag::Journey,
                MetaphorTag::Craft,
                MetaphorTag::Nature,
            ]),
            ..AdapterOverlay::empty("blog", "long-form article")
        };

        let memo_email = AdapterOverlay {
            cadence: Some(CadencePattern::new(vec![
                CadenceRun { kind: SentenceKind::Short, len: 2 },
                CadenceRun { kind: SentenceKind::Long, len: 1 },
            ])),
            pronoun_distance: Some(PronounDistance::FirstPerson),
            cta_style: Some(CtaStyle::Direct),
            category_bias: BTreeMap::from([("certitude".to_string(), 0.2)]),
            metaphor_tags: BTreeSet::from([MetaphorTag::Craft, MetaphorTag::Machinery]),
            ..AdapterOverlay::empty("memo_email", "internal memo")
        };

        Self::new(1, vec![linkedin, blog, memo_email])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_resolves_registered_keys() {
        let registry = AdapterRegistry::builtin();
        let adapter = registry.get("linkedin").unwrap();
        assert_eq!(adapter.label, "professional network post");
        assert!(adapter.cadence.is_some());
    }

    #[test]
    fn get_fails_for_unknown_keys() {
        let registry = AdapterRegistry::builtin();
        let err = registry.get("does_not_exist").unwrap_err();
        assert!(matches!(err, EngineError::UnknownAdapter { .. }));
    }

    #[test]
    fn builtin_registers_three_channels() {
        let registry = AdapterRegistry::builtin();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, vec!["blog", "linkedin", "memo_email"]);
    }

    #[test]
    fn metaphor_tags_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&MetaphorTag::Journey).unwrap(),
            "\"journey\""
        );
    }

    #[test]
    fn parses_yaml_asset_form() {
        let yaml = r#"
version: 2
adapters:
  newsletter:
    key: newsletter
    label: weekly newsletter
    cta_style: question
    category_bias:
      social: 0.25
    metaphor_tags: [journey, nature]
"#;
        let registry = AdapterRegistry::from_yaml_str(yaml).unwrap();
        assert_eq!(registry.version(), 2);
        let adapter = registry.get("newsletter").unwrap();
        assert_eq!(adapter.cta_style, Some(CtaStyle::Question));
        assert_eq!(adapter.category_bias["social"], 0.25);
        assert!(adapter.metaphor_tags.contains(&MetaphorTag::Nature));
        assert!(adapter.cadence.is_none());
    }
}
