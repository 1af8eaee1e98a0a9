//! Validator: re-scores enforced text and grades conformance.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::baseline::ReferenceBaseline;
use crate::domain::directive::StyleDirective;
use crate::domain::enforcement::{PassEvent, PassKind};
use crate::domain::foundation::EngineError;
use crate::domain::profile::AuthorProfile;
use crate::ports::TextAnalyzer;

/// Weight of each enforcement error in the overall score.
const ERROR_WEIGHT: u32 = 10;

/// Weight of each category warning in the overall score.
const WARNING_WEIGHT: u32 = 2;

/// Default passing threshold.
pub const DEFAULT_PASS_THRESHOLD: u8 = 70;

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Field or category the finding refers to.
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    /// Creates a warning finding.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Creates an error finding.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Result of validating one enforced text.
///
/// Created fresh per validation call; never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
    /// Absolute distance from target z per category.
    pub category_deltas: BTreeMap<String, f64>,
    pub cadence_errors: u32,
    pub pronoun_errors: u32,
    pub metaphor_errors: u32,
    pub empathy_gaps: u32,
    /// Category deltas beyond twice their tolerance.
    pub style_config_errors: u32,
    pub overall_score: u8,
    pub passed: bool,
}

/// Grades enforced text against the directive and profile.
pub struct Validator {
    baseline: Arc<ReferenceBaseline>,
    pass_threshold: u8,
}

impl Validator {
    /// Creates a validator with the default passing threshold.
    pub fn new(baseline: Arc<ReferenceBaseline>) -> Self {
        Self::with_threshold(baseline, DEFAULT_PASS_THRESHOLD)
    }

    /// Creates a validator with a custom passing threshold.
    pub fn with_threshold(baseline: Arc<ReferenceBaseline>, pass_threshold: u8) -> Self {
        Self {
            baseline,
            pass_threshold,
        }
    }

    /// Validates enforced text.
    ///
    /// Pure given identical analyzer output; never mutates its inputs.
    pub fn validate(
        &self,
        enforced_text: &str,
        directive: &StyleDirective,
        profile: &AuthorProfile,
        analyzer: &dyn TextAnalyzer,
        events: &[PassEvent],
    ) -> Result<ValidationReport, EngineError> {
        let scores = analyzer.score(enforced_text)?;

        let mut findings = Vec::new();
        let mut category_deltas = BTreeMap::new();
        let mut warnings = 0u32;
        let mut style_config_errors = 0u32;

        for (name, target) in &directive.liwc_targets {
            // A zero-variance baseline cannot discriminate; skip it.
            if profile
                .categories()
                .get(name)
                .map(|score| score.baseline_degenerate)
                .unwrap_or(false)
            {
                continue;
            }

            let Some(raw) = scores.get(name) else {
                // Omission signals "not measured", not zero.
                findings.push(Finding::warning(
                    name.clone(),
                    "category not measured by analyzer",
                ));
                warnings += 1;
                continue;
            };

            let (z, degenerate) = self.baseline.z_score(name, *raw)?;
            if degenerate {
                continue;
            }
            let delta = (z - target.target).abs();
            category_deltas.insert(name.clone(), delta);

            if delta > 2.0 * target.tolerance {
                findings.push(Finding::error(
                    name.clone(),
                    format!(
                        "z {:.2} is {:.2} from target {:.2}, beyond twice the tolerance {:.2}",
                        z, delta, target.target, target.tolerance
                    ),
                ));
                style_config_errors += 1;
            } else if delta > target.tolerance {
                findings.push(Finding::warning(
                    name.clone(),
                    format!(
                        "z {:.2} is {:.2} from target {:.2}, beyond tolerance {:.2}",
                        z, delta, target.target, target.tolerance
                    ),
                ));
                warnings += 1;
            }
        }

        let mut cadence_errors = 0u32;
        let mut pronoun_errors = 0u32;
        let mut metaphor_errors = 0u32;
        let mut empathy_gaps = 0u32;
        for event in events {
            match event.pass() {
                PassKind::Cadence => cadence_errors += 1,
                PassKind::PronounDistance => pronoun_errors += 1,
                PassKind::MetaphorCoherence => metaphor_errors += 1,
                PassKind::EmpathyCoverage => empathy_gaps += 1,
                PassKind::Typography => {}
            }
        }

        for event in events {
            if let PassEvent::CadenceOverrun { sentence_index, .. } = event {
                findings.push(Finding::warning(
                    "cadence",
                    format!(
                        "sentence {} exceeded the long-run tolerance with no safe split",
                        sentence_index
                    ),
                ));
            }
        }

        let overall_score = Self::compute_score(
            cadence_errors,
            pronoun_errors,
            metaphor_errors,
            empathy_gaps,
            style_config_errors,
            warnings,
        );
        let passed = overall_score >= self.pass_threshold;

        debug!(
            score = overall_score,
            passed,
            findings = findings.len(),
            "validated enforced text"
        );

        Ok(ValidationReport {
            findings,
            category_deltas,
            cadence_errors,
            pronoun_errors,
            metaphor_errors,
            empathy_gaps,
            style_config_errors,
            overall_score,
            passed,
        })
    }

    /// Score formula: each enforcement error costs 10 points, each
    /// category warning 2, saturating at 0.
    fn compute_score(
        cadence_errors: u32,
        pronoun_errors: u32,
        metaphor_errors: u32,
        empathy_gaps: u32,
        style_config_errors: u32,
        warnings: u32,
    ) -> u8 {
        let errors =
            cadence_errors + pronoun_errors + metaphor_errors + empathy_gaps + style_config_errors;
        let penalty = ERROR_WEIGHT * errors + WARNING_WEIGHT * warnings;
        100u32.saturating_sub(penalty).min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::{CategoryNorm, TraitProjection};
    use crate::domain::directive::{CategoryTarget, MetaphorTag};
    use crate::domain::foundation::{AuthorId, ExcerptId, Timestamp, UnitInterval};
    use crate::domain::profile::{
        CadencePattern, CadenceRun, CategoryScore, CtaStyle, DirectiveDefaults, EmpathyTarget,
        Lexicon, PronounDistance, SentenceKind, SourceRef, ToleranceSettings,
    };
    use crate::ports::AnalyzerError;
    use chrono::DateTime;
    use std::collections::BTreeSet;

    struct FixedAnalyzer {
        scores: BTreeMap<String, f64>,
    }

    impl TextAnalyzer for FixedAnalyzer {
        fn score(&self, _text: &str) -> Result<BTreeMap<String, f64>, AnalyzerError> {
            Ok(self.scores.clone())
        }
    }

    struct FailingAnalyzer;

    impl TextAnalyzer for FailingAnalyzer {
        fn score(&self, _text: &str) -> Result<BTreeMap<String, f64>, AnalyzerError> {
            Err(AnalyzerError::unavailable("backend down"))
        }
    }

    fn baseline() -> Arc<ReferenceBaseline> {
        let categories = BTreeMap::from([
            ("big_words".to_string(), CategoryNorm::new(10.0, 2.0)),
            ("certitude".to_string(), CategoryNorm::new(4.0, 0.0)),
        ]);
        Arc::new(ReferenceBaseline::new(
            1,
            categories,
            Vec::new(),
            BTreeMap::new(),
        ))
    }

    fn profile() -> AuthorProfile {
        let categories = BTreeMap::from([
            (
                "big_words".to_string(),
                CategoryScore::new("big_words", 12.0, 2.0, 1.0),
            ),
            (
                "certitude".to_string(),
                CategoryScore::degenerate("certitude", 9.0),
            ),
        ]);
        let mut lexicon = Lexicon::new();
        lexicon.insert("signature", "momentum");
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
            DirectiveDefaults::default(),
            ToleranceSettings::default(),
            Timestamp::from_datetime(DateTime::from_timestamp(1_704_326_400, 0).unwrap()),
            &baseline(),
        )
        .unwrap()
    }

    fn directive() -> StyleDirective {
        StyleDirective {
            goal: "test".to_string(),
            audience: "test".to_string(),
            adapter_key: "blog".to_string(),
            cadence: CadencePattern::new(vec![CadenceRun {
                kind: SentenceKind::Short,
                len: 1,
            }]),
            pronoun_distance: PronounDistance::SecondPerson,
            evidence_density: UnitInterval::new(0.5),
            empathy: EmpathyTarget::default(),
            cta_style: CtaStyle::Soft,
            liwc_targets: BTreeMap::from([
                (
                    "big_words".to_string(),
                    CategoryTarget {
                        target: 1.0,
                        tolerance: 0.5,
                    },
                ),
                (
                    "certitude".to_string(),
                    CategoryTarget {
                        target: 0.0,
                        tolerance: 0.5,
                    },
                ),
            ]),
            lexicon_hints: BTreeMap::new(),
            avoid: Vec::new(),
            metaphor_tags: BTreeSet::from([MetaphorTag::Journey]),
            scaffold: String::new(),
            max_long_sentence_run: 2,
        }
    }

    #[test]
    fn on_target_text_scores_full_marks() {
        // Raw 12.0 -> z 1.0, exactly on target.
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::from([("big_words".to_string(), 12.0)]),
        };
        let report = Validator::new(baseline())
            .validate("text", &directive(), &profile(), &analyzer, &[])
            .unwrap();

        assert_eq!(report.overall_score, 100);
        assert!(report.passed);
        assert!(report.findings.is_empty());
        assert!((report.category_deltas["big_words"]).abs() < 1e-9);
    }

    #[test]
    fn delta_beyond_tolerance_is_a_warning() {
        // Raw 13.6 -> z 1.8, delta 0.8 with tolerance 0.5.
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::from([("big_words".to_string(), 13.6)]),
        };
        let report = Validator::new(baseline())
            .validate("text", &directive(), &profile(), &analyzer, &[])
            .unwrap();

        assert_eq!(report.overall_score, 98);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity, Severity::Warning);
        assert_eq!(report.style_config_errors, 0);
    }

    #[test]
    fn delta_beyond_twice_tolerance_is_an_error() {
        // Raw 16.4 -> z 3.2, delta 2.2 with tolerance 0.5.
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::from([("big_words".to_string(), 16.4)]),
        };
        let report = Validator::new(baseline())
            .validate("text", &directive(), &profile(), &analyzer, &[])
            .unwrap();

        assert_eq!(report.style_config_errors, 1);
        assert_eq!(report.overall_score, 90);
        assert_eq!(report.findings[0].severity, Severity::Error);
    }

    #[test]
    fn degenerate_categories_are_skipped() {
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::from([
                ("big_words".to_string(), 12.0),
                ("certitude".to_string(), 99.0),
            ]),
        };
        let report = Validator::new(baseline())
            .validate("text", &directive(), &profile(), &analyzer, &[])
            .unwrap();

        assert!(!report.category_deltas.contains_key("certitude"));
        assert_eq!(report.overall_score, 100);
    }

    #[test]
    fn omitted_category_yields_not_measured_warning() {
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::new(),
        };
        let report = Validator::new(baseline())
            .validate("text", &directive(), &profile(), &analyzer, &[])
            .unwrap();

        assert!(report
            .findings
            .iter()
            .any(|f| f.message.contains("not measured")));
        assert_eq!(report.overall_score, 98);
    }

    #[test]
    fn enforcement_events_are_aggregated_into_counters() {
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::from([("big_words".to_string(), 12.0)]),
        };
        let events = vec![
            PassEvent::CadenceSplit { sentence_index: 1 },
            PassEvent::CadenceOverrun {
                sentence_index: 3,
                run_len: 4,
            },
            PassEvent::PronounSubstituted {
                from: "you".to_string(),
                to: "one".to_string(),
            },
            PassEvent::EmpathyGap { window_start: 0 },
            PassEvent::MetaphorFlagged {
                phrase: "home run".to_string(),
            },
            PassEvent::TypographyNormalized { replacements: 3 },
        ];
        let report = Validator::new(baseline())
            .validate("text", &directive(), &profile(), &analyzer, &events)
            .unwrap();

        assert_eq!(report.cadence_errors, 2);
        assert_eq!(report.pronoun_errors, 1);
        assert_eq!(report.metaphor_errors, 1);
        assert_eq!(report.empathy_gaps, 1);
        // Typography does not count against the score: 100 - 10*5 = 50.
        assert_eq!(report.overall_score, 50);
        assert!(!report.passed);
    }

    #[test]
    fn one_more_cadence_error_costs_exactly_ten_points() {
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::from([("big_words".to_string(), 12.0)]),
        };
        let validator = Validator::new(baseline());
        let mut events = Vec::new();
        let mut previous = validator
            .validate("text", &directive(), &profile(), &analyzer, &events)
            .unwrap()
            .overall_score;

        for index in 0..12 {
            events.push(PassEvent::CadenceSplit {
                sentence_index: index,
            });
            let score = validator
                .validate("text", &directive(), &profile(), &analyzer, &events)
                .unwrap()
                .overall_score;
            if previous >= 10 {
                assert_eq!(previous - score, 10);
            } else {
                assert_eq!(score, 0);
            }
            previous = score;
        }
    }

    #[test]
    fn analyzer_failure_propagates() {
        let result = Validator::new(baseline()).validate(
            "text",
            &directive(),
            &profile(),
            &FailingAnalyzer,
            &[],
        );
        assert!(matches!(result, Err(EngineError::AnalyzerFailure { .. })));
    }

    #[test]
    fn custom_threshold_controls_passing() {
        let analyzer = FixedAnalyzer {
            scores: BTreeMap::from([("big_words".to_string(), 12.0)]),
        };
        let events = vec![
            PassEvent::EmpathyGap { window_start: 0 },
            PassEvent::EmpathyGap { window_start: 4 },
        ];
        let lenient = Validator::with_threshold(baseline(), 60);
        let strict = Validator::with_threshold(baseline(), 90);

        let report = lenient
            .validate("text", &directive(), &profile(), &analyzer, &events)
            .unwrap();
        assert_eq!(report.overall_score, 80);
        assert!(report.passed);

        let report = strict
            .validate("text", &directive(), &profile(), &analyzer, &events)
            .unwrap();
        assert!(!report.passed);
    }
}
