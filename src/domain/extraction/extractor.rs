//! Profile extraction from raw writing samples.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::baseline::{ReferenceBaseline, TraitTable};
use crate::domain::foundation::{AuthorId, EngineError, ExcerptId, Timestamp, UnitInterval};
use crate::domain::profile::{
    AuthorProfile, CadencePattern, CadenceRun, CategoryScore, CtaStyle, DirectiveDefaults,
    EmpathyTarget, PronounDistance, SentenceKind, SourceRef, ToleranceSettings,
};
use crate::ports::TextAnalyzer;

use super::lexicon_miner::LexiconMiner;
use super::normalizer::normalize_sample;

/// Categories consulted when deriving directive defaults from z-scores.
const BIG_WORDS_CATEGORY: &str = "big_words";
const ANALYTIC_CATEGORY: &str = "analytic";
const FIRST_PERSON_CATEGORY: &str = "first_person";
const SECOND_PERSON_CATEGORY: &str = "second_person";
const THIRD_PERSON_CATEGORY: &str = "third_person";

/// One raw writing sample submitted for extraction.
#[derive(Debug, Clone)]
pub struct WritingSample {
    pub text: String,
    pub domain_label: Option<String>,
    pub audience_label: Option<String>,
}

impl WritingSample {
    /// Creates a sample with no provenance labels.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            domain_label: None,
            audience_label: None,
        }
    }

    /// Sets the domain label.
    pub fn with_domain(mut self, label: impl Into<String>) -> Self {
        self.domain_label = Some(label.into());
        self
    }

    /// Sets the audience label.
    pub fn with_audience(mut self, label: impl Into<String>) -> Self {
        self.audience_label = Some(label.into());
        self
    }
}

/// Provenance bucket: `(domain_label, audience_label)`.
pub type SourceBucket = (String, String);

/// Extraction tuning knobs.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Label applied when a sample carries no domain/audience label.
    pub general_label: String,
    /// Tokens kept per mined lexicon bucket.
    pub lexicon_top_n: usize,
    /// Tolerances recorded on the extracted profile.
    pub tolerance: ToleranceSettings,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            general_label: "general".to_string(),
            lexicon_top_n: 12,
            tolerance: ToleranceSettings::default(),
        }
    }
}

/// Derives author profiles from writing samples and an external analyzer.
pub struct ProfileExtractor {
    baseline: Arc<ReferenceBaseline>,
    trait_table: Arc<TraitTable>,
    config: ExtractionConfig,
}

impl ProfileExtractor {
    /// Creates an extractor over the shared baseline and trait tables.
    pub fn new(
        baseline: Arc<ReferenceBaseline>,
        trait_table: Arc<TraitTable>,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            baseline,
            trait_table,
            config,
        }
    }

    /// Extracts an aggregate profile across all samples.
    ///
    /// Deterministic: identical samples and analyzer behavior produce an
    /// identical profile for a given `extracted_at`. Fails fast with
    /// `EmptyInput` before any analyzer call when a sample is unusable.
    pub fn extract(
        &self,
        author_id: AuthorId,
        samples: &[WritingSample],
        analyzer: &dyn TextAnalyzer,
        extracted_at: Timestamp,
    ) -> Result<AuthorProfile, EngineError> {
        if samples.is_empty() {
            return Err(EngineError::empty_input("no samples provided"));
        }

        let mut normalized = Vec::with_capacity(samples.len());
        for (index, sample) in samples.iter().enumerate() {
            let text = normalize_sample(&sample.text);
            if text.is_empty() {
                return Err(EngineError::empty_input(format!(
                    "sample {} is empty after normalization",
                    index
                )));
            }
            normalized.push(text);
        }

        // Character-count weighting keeps short outlier samples from
        // dominating the aggregate.
        let mut weighted_sums: BTreeMap<String, f64> = BTreeMap::new();
        let mut weight_totals: BTreeMap<String, f64> = BTreeMap::new();
        for text in &normalized {
            let weight = text.chars().count() as f64;
            let scores = analyzer.score(text)?;
            for (category, raw) in scores {
                if !self.baseline.contains(&category) {
                    return Err(EngineError::unknown_category(category));
                }
                *weighted_sums.entry(category.clone()).or_insert(0.0) += raw * weight;
                *weight_totals.entry(category).or_insert(0.0) += weight;
            }
        }

        let mut categories = BTreeMap::new();
        for (name, sum) in &weighted_sums {
            let total = weight_totals[name];
            let mean = sum / total;
            let (z, degenerate) = self.baseline.z_score(name, mean)?;
            let score = if degenerate {
                CategoryScore::degenerate(name.clone(), mean)
            } else {
                let norm = self.baseline.lookup(name)?;
                CategoryScore::new(name.clone(), mean, norm.stdev, z)
            };
            categories.insert(name.clone(), score);
        }

        let z_scores: BTreeMap<String, f64> = categories
            .iter()
            .map(|(name, score)| (name.clone(), score.z))
            .collect();
        let traits = self.trait_table.project(&z_scores);

        let miner = LexiconMiner::new(self.config.lexicon_top_n);
        let lexicon = miner.mine(&normalized, &z_scores, analyzer)?;

        let default_directive = self.derive_defaults(&z_scores);

        let sources: Vec<SourceRef> = samples
            .iter()
            .zip(&normalized)
            .map(|(sample, text)| SourceRef {
                excerpt_id: ExcerptId::from_content(text),
                domain_label: sample
                    .domain_label
                    .clone()
                    .unwrap_or_else(|| self.config.general_label.clone()),
                audience_label: sample
                    .audience_label
                    .clone()
                    .unwrap_or_else(|| self.config.general_label.clone()),
                char_count: text.chars().count(),
            })
            .collect();

        debug!(
            author = %author_id,
            samples = sources.len(),
            categories = categories.len(),
            "extracted author profile"
        );

        AuthorProfile::new(
            author_id,
            sources,
            categories,
            traits,
            lexicon,
            default_directive,
            self.config.tolerance,
            extracted_at,
            &self.baseline,
        )
    }

    /// Extracts one profile per `(domain_label, audience_label)` bucket.
    ///
    /// Optional extension for callers that want channel-specific
    /// profiles; the aggregate `extract` path never pays for this.
    pub fn extract_bucketed(
        &self,
        author_id: AuthorId,
        samples: &[WritingSample],
        analyzer: &dyn TextAnalyzer,
        extracted_at: Timestamp,
    ) -> Result<BTreeMap<SourceBucket, AuthorProfile>, EngineError> {
        if samples.is_empty() {
            return Err(EngineError::empty_input("no samples provided"));
        }

        let mut grouped: BTreeMap<SourceBucket, Vec<WritingSample>> = BTreeMap::new();
        for sample in samples {
            let bucket = (
                sample
                    .domain_label
                    .clone()
                    .unwrap_or_else(|| self.config.general_label.clone()),
                sample
                    .audience_label
                    .clone()
                    .unwrap_or_else(|| self.config.general_label.clone()),
            );
            grouped.entry(bucket).or_default().push(sample.clone());
        }

        let mut profiles = BTreeMap::new();
        for (bucket, group) in grouped {
            let profile = self.extract(author_id.clone(), &group, analyzer, extracted_at)?;
            profiles.insert(bucket, profile);
        }
        Ok(profiles)
    }

    /// Derives directive defaults from the author's own statistics.
    fn derive_defaults(&self, z_scores: &BTreeMap<String, f64>) -> DirectiveDefaults {
        let z = |name: &str| z_scores.get(name).copied().unwrap_or(0.0);

        // Lexically dense authors default to a heavier rhythm.
        let cadence = if z(BIG_WORDS_CATEGORY) > 0.5 {
            CadencePattern::new(vec![
                CadenceRun { kind: SentenceKind::Long, len: 2 },
                CadenceRun { kind: SentenceKind::Short, len: 1 },
            ])
        } else {
            CadencePattern::new(vec![
                CadenceRun { kind: SentenceKind::Long, len: 1 },
                CadenceRun { kind: SentenceKind::Short, len: 2 },
            ])
        };

        let first = z(FIRST_PERSON_CATEGORY);
        let second = z(SECOND_PERSON_CATEGORY);
        let third = z(THIRD_PERSON_CATEGORY);
        let pronoun_distance = if first >= second && first >= third {
            PronounDistance::FirstPerson
        } else if second >= third {
            PronounDistance::SecondPerson
        } else {
            PronounDistance::ThirdPerson
        };

        DirectiveDefaults {
            cadence,
            pronoun_distance,
            evidence_density: UnitInterval::new(0.5 + 0.1 * z(ANALYTIC_CATEGORY)),
            empathy: EmpathyTarget::default(),
            cta_style: CtaStyle::Soft,
        }
    }
}
