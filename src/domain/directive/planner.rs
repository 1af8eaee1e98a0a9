//! Planner: merges profile defaults, adapter overlay, and goal/audience
//! into a fully resolved style directive.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::EngineError;
use crate::domain::profile::AuthorProfile;

use super::adapter::AdapterRegistry;
use super::style_directive::{CategoryTarget, StyleDirective};

/// Plans style directives against a static adapter registry.
///
/// Pure function of its inputs plus the registry; no side effects.
pub struct Planner {
    registry: Arc<AdapterRegistry>,
}

impl Planner {
    /// Creates a planner over the shared registry.
    pub fn new(registry: Arc<AdapterRegistry>) -> Self {
        Self { registry }
    }

    /// Resolves a directive for one generation run.
    ///
    /// Merge is deterministic and field-by-field: adapter fields win when
    /// present, profile defaults otherwise. Category biases are added to
    /// the profile's own z-scores and clipped to the profile's tolerance
    /// window around the original z, so an adapter may nudge a target but
    /// never explode it. Fails fast with `UnknownAdapter` or
    /// `IncompleteDirective`; never emits a partial directive.
    pub fn plan(
        &self,
        profile: &AuthorProfile,
        goal: &str,
        audience: &str,
        adapter_key: &str,
    ) -> Result<StyleDirective, EngineError> {
        let goal = goal.trim();
        let audience = audience.trim();
        if goal.is_empty() {
            return Err(EngineError::empty_input("goal must not be empty"));
        }
        if audience.is_empty() {
            return Err(EngineError::empty_input("audience must not be empty"));
        }

        let adapter = self.registry.get(adapter_key)?;
        let defaults = profile.default_directive();
        let tolerance = profile.tolerance();

        let cadence = adapter
            .cadence
            .clone()
            .unwrap_or_else(|| defaults.cadence.clone());
        if cadence.is_empty() {
            return Err(EngineError::incomplete_directive("cadence"));
        }

        let mut liwc_targets = BTreeMap::new();
        for (name, score) in profile.categories() {
            let bias = adapter.category_bias.get(name).copied().unwrap_or(0.0);
            let window = tolerance.z_tolerance;
            let target = (score.z + bias).clamp(score.z - window, score.z + window);
            liwc_targets.insert(
                name.clone(),
                CategoryTarget {
                    target,
                    tolerance: window,
                },
            );
        }
        if liwc_targets.is_empty() {
            return Err(EngineError::incomplete_directive("liwc_targets"));
        }

        let lexicon_hints = profile.lexicon().hint_buckets();
        if lexicon_hints.values().all(|tokens| tokens.is_empty()) {
            return Err(EngineError::incomplete_directive("lexicon_hints"));
        }

        let pronoun_distance = adapter
            .pronoun_distance
            .unwrap_or(defaults.pronoun_distance);
        let cta_style = adapter.cta_style.unwrap_or(defaults.cta_style);
        let scaffold = format!(
            "Write a {} for {}. Goal: {}. Close with a {} call to action.",
            adapter.label, audience, goal, cta_style
        );

        let directive = StyleDirective {
            goal: goal.to_string(),
            audience: audience.to_string(),
            adapter_key: adapter.key.clone(),
            cadence,
            pronoun_distance,
            evidence_density: adapter
                .evidence_density
                .unwrap_or(defaults.evidence_density),
            empathy: adapter.empathy.unwrap_or(defaults.empathy),
            cta_style,
            liwc_targets,
            lexicon_hints,
            avoid: profile.lexicon().avoid_tokens(),
            metaphor_tags: adapter.metaphor_tags.clone(),
            scaffold,
            max_long_sentence_run: tolerance.max_long_sentence_run,
        };

        debug!(
            author = %profile.author_id(),
            adapter = adapter_key,
            targets = directive.liwc_targets.len(),
            "planned style directive"
        );

        Ok(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::{CategoryNorm, ReferenceBaseline, TraitProjection};
    use crate::domain::directive::AdapterOverlay;
    use crate::domain::foundation::{AuthorId, ExcerptId, Timestamp};
    use crate::domain::profile::{
        AuthorProfile, CadencePattern, CadenceRun, CategoryScore, DirectiveDefaults, Lexicon,
        PronounDistance, SentenceKind, SourceRef, ToleranceSettings, SIGNATURE_BUCKET,
    };
    use chrono::DateTime;
    use std::collections::BTreeMap;

    fn test_baseline() -> ReferenceBaseline {
        let categories = BTreeMap::from([
            ("big_words".to_string(), CategoryNorm::new(10.0, 2.0)),
            ("clout".to_string(), CategoryNorm::new(50.0, 15.0)),
        ]);
        ReferenceBaseline::new(1, categories, Vec::new(), BTreeMap::new())
    }

    fn test_profile() -> AuthorProfile {
        test_profile_with_lexicon(populated_lexicon())
    }

    fn populated_lexicon() -> Lexicon {
        let mut lexicon = Lexicon::new();
        lexicon.insert(SIGNATURE_BUCKET, "momentum");
        lexicon
    }

    fn test_profile_with_lexicon(lexicon: Lexicon) -> AuthorProfile {
        let categories = BTreeMap::from([
            (
                "big_words".to_string(),
                CategoryScore::new("big_words", 12.0, 2.0, 1.0),
            ),
            (
                "clout".to_string(),
                CategoryScore::new("clout", 53.0, 15.0, 0.2),
            ),
        ]);
        let defaults = DirectiveDefaults {
            cadence: CadencePattern::new(vec![
                CadenceRun { kind: SentenceKind::Long, len: 2 },
                CadenceRun { kind: SentenceKind::Short, len: 1 },
            ]),
            pronoun_distance: PronounDistance::FirstPerson,
            ..DirectiveDefaults::default()
        };
        AuthorProfile::new(
            AuthorId::new("author-1").unwrap(),
            vec![SourceRef {
                excerpt_id: ExcerptId::from_content("sample"),
                domain_label: "general".to_string(),
                audience_label: "general".to_string(),
                char_count: 100,
            }],
            categories,
            TraitProjection::new(),
            lexicon,
            defaults,
            ToleranceSettings {
                z_tolerance: 0.5,
                max_long_sentence_run: 2,
            },
            Timestamp::from_datetime(DateTime::from_timestamp(1_704_326_400, 0).unwrap()),
            &test_baseline(),
        )
        .unwrap()
    }

    fn planner() -> Planner {
        Planner::new(Arc::new(AdapterRegistry::builtin()))
    }

    #[test]
    fn unknown_adapter_is_rejected() {
        let result = planner().plan(&test_profile(), "mobilization", "founders", "does_not_exist");
        assert!(matches!(result, Err(EngineError::UnknownAdapter { .. })));
    }

    #[test]
    fn adapter_fields_override_profile_defaults() {
        let directive = planner()
            .plan(&test_profile(), "mobilization", "founders", "linkedin")
            .unwrap();

        // linkedin tightens cadence and addresses the reader directly.
        assert_ne!(directive.cadence, test_profile().default_directive().cadence);
        assert_eq!(directive.pronoun_distance, PronounDistance::SecondPerson);
    }

    #[test]
    fn absent_adapter_fields_fall_through_to_profile() {
        let directive = planner()
            .plan(&test_profile(), "reflection", "readers", "blog")
            .unwrap();

        // blog declares no cadence or pronoun override.
        assert_eq!(directive.cadence, test_profile().default_directive().cadence);
        assert_eq!(directive.pronoun_distance, PronounDistance::FirstPerson);
    }

    #[test]
    fn category_bias_is_clipped_to_tolerance_window() {
        let directive = planner()
            .plan(&test_profile(), "mobilization", "founders", "linkedin")
            .unwrap();

        // clout bias is +0.3 within a 0.5 window: applied in full.
        let clout = directive.liwc_targets["clout"];
        assert!((clout.target - 0.5).abs() < 1e-9);

        // big_words has no bias: target equals the profile z.
        let big_words = directive.liwc_targets["big_words"];
        assert!((big_words.target - 1.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_bias_clamps_at_window_edge() {
        let mut registry = AdapterRegistry::builtin();
        // Rebuild with an adapter pushing clout far beyond the window.
        let mut overlay = registry.get("linkedin").unwrap().clone();
        overlay.key = "pushy".to_string();
        overlay.category_bias.insert("clout".to_string(), 5.0);
        registry = AdapterRegistry::new(registry.version(), vec![overlay]);

        let planner = Planner::new(Arc::new(registry));
        let directive = planner
            .plan(&test_profile(), "mobilization", "founders", "pushy")
            .unwrap();

        // Profile z is 0.2 with a 0.5 window: clamps to 0.7, not 5.2.
        let clout = directive.liwc_targets["clout"];
        assert!((clout.target - 0.7).abs() < 1e-9);
    }

    #[test]
    fn zero_override_adapter_yields_profile_defaults_plus_targets() {
        let registry = AdapterRegistry::new(1, vec![AdapterOverlay::empty("plain", "plain piece")]);
        let planner = Planner::new(Arc::new(registry));
        let profile = test_profile();

        let directive = planner
            .plan(&profile, "reflection", "readers", "plain")
            .unwrap();

        let defaults = profile.default_directive();
        assert_eq!(directive.cadence, defaults.cadence);
        assert_eq!(directive.pronoun_distance, defaults.pronoun_distance);
        assert_eq!(directive.evidence_density, defaults.evidence_density);
        assert_eq!(directive.empathy, defaults.empathy);
        assert_eq!(directive.cta_style, defaults.cta_style);

        // No bias: every target is the profile's own z.
        assert!((directive.liwc_targets["big_words"].target - 1.0).abs() < 1e-9);
        assert!((directive.liwc_targets["clout"].target - 0.2).abs() < 1e-9);
    }

    #[test]
    fn missing_lexicon_hints_fail_fast() {
        let profile = test_profile_with_lexicon(Lexicon::new());
        let result = planner().plan(&profile, "mobilization", "founders", "linkedin");
        assert!(matches!(
            result,
            Err(EngineError::IncompleteDirective {
                field: "lexicon_hints"
            })
        ));
    }

    #[test]
    fn empty_goal_or_audience_is_rejected() {
        let profile = test_profile();
        assert!(matches!(
            planner().plan(&profile, "  ", "founders", "linkedin"),
            Err(EngineError::EmptyInput { .. })
        ));
        assert!(matches!(
            planner().plan(&profile, "mobilization", "", "linkedin"),
            Err(EngineError::EmptyInput { .. })
        ));
    }

    #[test]
    fn planning_is_deterministic() {
        let profile = test_profile();
        let first = planner()
            .plan(&profile, "mobilization", "founders", "linkedin")
            .unwrap();
        let second = planner()
            .plan(&profile, "mobilization", "founders", "linkedin")
            .unwrap();
        assert_eq!(first, second);
    }
}
