//! Report bundle assembly.

use serde::{Deserialize, Serialize};

use crate::domain::directive::StyleDirective;
use crate::domain::foundation::{AuthorId, EngineError, PromptId, Timestamp};
use crate::domain::profile::AuthorProfile;
use crate::domain::validation::ValidationReport;

/// Bundle schema version.
///
/// Incremented whenever a required field is added to the bundle.
pub const SCHEMA_VERSION: u32 = 1;

/// Summary of one extraction run, carried into the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub author_id: AuthorId,
    pub sample_count: usize,
    pub total_chars: usize,
    pub category_count: usize,
    pub trait_systems: Vec<String>,
    pub extracted_at: Timestamp,
}

impl ExtractionSummary {
    /// Summarizes a profile.
    pub fn from_profile(profile: &AuthorProfile) -> Self {
        Self {
            author_id: profile.author_id().clone(),
            sample_count: profile.sources().len(),
            total_chars: profile.total_chars(),
            category_count: profile.categories().len(),
            trait_systems: profile.traits().keys().cloned().collect(),
            extracted_at: profile.extracted_at(),
        }
    }
}

/// Provenance for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub prompt_id: PromptId,
    pub token_count: usize,
}

/// Versioned, serializable aggregate of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle {
    pub schema_version: u32,
    pub extraction: ExtractionSummary,
    pub directive: StyleDirective,
    pub validation: ValidationReport,
    pub generation: GenerationRecord,
}

/// Assembles report bundles.
///
/// Pure aggregation; fails only when a required upstream field is
/// missing, never by silently omitting fields.
pub struct Reporter;

impl Reporter {
    /// Builds a bundle from the pipeline's outputs.
    pub fn build(
        extraction: ExtractionSummary,
        directive: StyleDirective,
        validation: ValidationReport,
        generation: GenerationRecord,
    ) -> Result<ReportBundle, EngineError> {
        if extraction.sample_count == 0 {
            return Err(EngineError::incomplete_bundle("extraction.sample_count"));
        }
        if extraction.category_count == 0 {
            return Err(EngineError::incomplete_bundle("extraction.category_count"));
        }
        if directive.liwc_targets.is_empty() {
            return Err(EngineError::incomplete_bundle("directive.liwc_targets"));
        }

        Ok(ReportBundle {
            schema_version: SCHEMA_VERSION,
            extraction,
            directive,
            validation,
            generation,
        })
    }
}
