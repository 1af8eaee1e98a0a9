//! AuthorProfile aggregate root.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::baseline::{ReferenceBaseline, TraitProjection};
use crate::domain::foundation::{AuthorId, EngineError, ExcerptId, Timestamp};

use super::{CategoryScore, DirectiveDefaults, Lexicon};

/// Provenance record for one writing sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub excerpt_id: ExcerptId,
    pub domain_label: String,
    pub audience_label: String,
    pub char_count: usize,
}

/// Tolerances the planner and enforcer honor for this author.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceSettings {
    /// Half-width of the window an adapter may nudge a category target
    /// within, in z units.
    pub z_tolerance: f64,
    /// Longest run of long sentences enforcement will leave intact.
    pub max_long_sentence_run: usize,
}

impl Default for ToleranceSettings {
    fn default() -> Self {
        Self {
            z_tolerance: 0.5,
            max_long_sentence_run: 2,
        }
    }
}

/// Statistical voice profile for one author.
///
/// Created once per extraction call and immutable afterwards; a
/// re-extraction produces a replacement profile, never an in-place
/// update. Profile history is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorProfile {
    author_id: AuthorId,
    sources: Vec<SourceRef>,
    categories: BTreeMap<String, CategoryScore>,
    traits: TraitProjection,
    lexicon: Lexicon,
    default_directive: DirectiveDefaults,
    tolerance: ToleranceSettings,
    extracted_at: Timestamp,
}

impl AuthorProfile {
    /// Assembles a profile, enforcing the category invariant.
    ///
    /// Every category key must exist in the reference baseline; an
    /// unknown key fails the whole construction rather than producing a
    /// partial profile.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        author_id: AuthorId,
        sources: Vec<SourceRef>,
        categories: BTreeMap<String, CategoryScore>,
        traits: TraitProjection,
        lexicon: Lexicon,
        default_directive: DirectiveDefaults,
        tolerance: ToleranceSettings,
        extracted_at: Timestamp,
        baseline: &ReferenceBaseline,
    ) -> Result<Self, EngineError> {
        for name in categories.keys() {
            if !baseline.contains(name) {
                return Err(EngineError::unknown_category(name));
            }
        }
        Ok(Self {
            author_id,
            sources,
            categories,
            traits,
            lexicon,
            default_directive,
            tolerance,
            extracted_at,
        })
    }

    pub fn author_id(&self) -> &AuthorId {
        &self.author_id
    }

    pub fn sources(&self) -> &[SourceRef] {
        &self.sources
    }

    pub fn categories(&self) -> &BTreeMap<String, CategoryScore> {
        &self.categories
    }

    pub fn traits(&self) -> &TraitProjection {
        &self.traits
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn default_directive(&self) -> &DirectiveDefaults {
        &self.default_directive
    }

    pub fn tolerance(&self) -> &ToleranceSettings {
        &self.tolerance
    }

    pub fn extracted_at(&self) -> Timestamp {
        self.extracted_at
    }

    /// Total characters across all source excerpts.
    pub fn total_chars(&self) -> usize {
        self.sources.iter().map(|s| s.char_count).sum()
    }

    /// Returns category z-scores keyed by name.
    pub fn z_scores(&self) -> BTreeMap<String, f64> {
        self.categories
            .iter()
            .map(|(name, score)| (name.clone(), score.z))
            .collect()
    }
}
