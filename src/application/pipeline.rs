//! StylePipeline - command handler for the full generation flow.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::domain::directive::Planner;
use crate::domain::enforcement::Enforcer;
use crate::domain::foundation::{EngineError, ProfileId};
use crate::domain::profile::AuthorProfile;
use crate::domain::report::{ExtractionSummary, GenerationRecord, ReportBundle, Reporter};
use crate::domain::validation::Validator;
use crate::ports::{ProfileStore, StorageError, TextAnalyzer};

use super::harness::GeneratorHarness;

/// Errors from pipeline orchestration.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Command describing one generation run.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub goal: String,
    pub audience: String,
    pub adapter_key: String,
}

/// Final text plus the full report bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub text: String,
    pub bundle: ReportBundle,
}

/// Orchestrates plan, generate, enforce, validate, and report.
///
/// This is the seam an outer transport layer calls; everything below it
/// is pure except the single generation call.
pub struct StylePipeline {
    planner: Planner,
    harness: GeneratorHarness,
    enforcer: Enforcer,
    validator: Validator,
}

impl StylePipeline {
    /// Creates a pipeline from its stages.
    pub fn new(
        planner: Planner,
        harness: GeneratorHarness,
        enforcer: Enforcer,
        validator: Validator,
    ) -> Self {
        Self {
            planner,
            harness,
            enforcer,
            validator,
        }
    }

    /// Runs the full flow against an in-hand profile.
    pub async fn run(
        &self,
        profile: &AuthorProfile,
        request: &PipelineRequest,
        analyzer: &dyn TextAnalyzer,
    ) -> Result<PipelineOutcome, EngineError> {
        let directive = self.planner.plan(
            profile,
            &request.goal,
            &request.audience,
            &request.adapter_key,
        )?;

        let generation = self.harness.run(&directive).await?;
        let enforcement = self.enforcer.enforce(&generation.raw_text, &directive);
        let validation = self.validator.validate(
            &enforcement.text,
            &directive,
            profile,
            analyzer,
            &enforcement.events,
        )?;

        info!(
            author = %profile.author_id(),
            adapter = %request.adapter_key,
            score = validation.overall_score,
            passed = validation.passed,
            "pipeline run completed"
        );

        let bundle = Reporter::build(
            ExtractionSummary::from_profile(profile),
            directive,
            validation,
            GenerationRecord {
                prompt_id: generation.prompt_id,
                token_count: generation.token_count,
            },
        )?;

        Ok(PipelineOutcome {
            text: enforcement.text,
            bundle,
        })
    }

    /// Runs the full flow against a stored profile.
    pub async fn run_stored(
        &self,
        store: &dyn ProfileStore,
        profile_id: ProfileId,
        request: &PipelineRequest,
        analyzer: &dyn TextAnalyzer,
    ) -> Result<PipelineOutcome, PipelineError> {
        let profile = store.load(profile_id).await?;
        Ok(self.run(&profile, request, analyzer).await?)
    }
}
