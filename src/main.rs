//! Voiceprint demo entry point.
//!
//! Extracts a profile from bundled writing samples, plans a directive
//! for the requested channel, runs the pipeline against the configured
//! generator, and prints the report bundle as JSON. An outer transport
//! layer would call the same seams; this binary exists for local runs.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use voiceprint::adapters::analyzer::LexiconAnalyzer;
use voiceprint::adapters::generator::{HttpGenerator, HttpGeneratorConfig, MockGenerator};
use voiceprint::application::{GeneratorHarness, PipelineRequest, StylePipeline};
use voiceprint::config::{AppConfig, AssetCatalog};
use voiceprint::domain::directive::Planner;
use voiceprint::domain::enforcement::{Enforcer, EnforcerConfig};
use voiceprint::domain::extraction::{ExtractionConfig, ProfileExtractor, WritingSample};
use voiceprint::domain::foundation::{AuthorId, Timestamp};
use voiceprint::domain::validation::Validator;
use voiceprint::ports::TextGenerator;

const DEMO_SAMPLES: [&str; 3] = [
    "We measure everything because the evidence decides the argument, and the data never \
     flatters anyone. I learned that the hard way.",
    "Honestly, the team delivered a great result this quarter. You can see it in the \
     retention analysis, and I think everyone should read it.",
    "I believe momentum comes from saying no. We understand the tradeoff, we own it, and \
     we keep shipping anyway.",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,voiceprint=debug".into()),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let catalog = match &config.asset_dir {
        Some(dir) => AssetCatalog::load_dir(dir)?,
        None => AssetCatalog::builtin(),
    };
    info!(
        categories = catalog.baseline.category_count(),
        adapters = catalog.adapters.keys().count(),
        "asset catalog ready"
    );

    let analyzer = LexiconAnalyzer::new();
    let extractor = ProfileExtractor::new(
        catalog.baseline.clone(),
        catalog.trait_table.clone(),
        ExtractionConfig {
            general_label: config.engine.general_label.clone(),
            lexicon_top_n: config.engine.lexicon_top_n,
            ..ExtractionConfig::default()
        },
    );

    let samples: Vec<WritingSample> = DEMO_SAMPLES
        .iter()
        .map(|text| WritingSample::new(*text).with_domain("professional"))
        .collect();
    let profile = extractor.extract(
        AuthorId::new("demo-author")?,
        &samples,
        &analyzer,
        Timestamp::now(),
    )?;
    info!(author = %profile.author_id(), categories = profile.categories().len(), "profile extracted");

    let generator: Arc<dyn TextGenerator> = match &config.generator.api_key {
        Some(key) => {
            let provider_config = HttpGeneratorConfig::new(key.clone())
                .with_model(config.generator.model.clone())
                .with_base_url(config.generator.base_url.clone())
                .with_timeout(config.generator.timeout());
            Arc::new(HttpGenerator::new(provider_config)?)
        }
        None => {
            info!("no generator API key configured, using the mock generator");
            Arc::new(MockGenerator::new().with_response(
                "You already know the numbers. Your team reads them weekly. \
                 Consider what they hide, and decide what to ship next.",
            ))
        }
    };

    let pipeline = StylePipeline::new(
        Planner::new(catalog.adapters.clone()),
        GeneratorHarness::new(generator, Duration::from_secs(config.generator.timeout_secs)),
        Enforcer::new(EnforcerConfig {
            long_sentence_words: config.engine.long_sentence_words,
        }),
        Validator::with_threshold(catalog.baseline.clone(), config.engine.pass_threshold),
    );

    let outcome = pipeline
        .run(
            &profile,
            &PipelineRequest {
                goal: "reflection".to_string(),
                audience: "operators".to_string(),
                adapter_key: "memo_email".to_string(),
            },
            &analyzer,
        )
        .await?;

    println!("{}", outcome.text);
    println!("{}", serde_json::to_string_pretty(&outcome.bundle)?);
    Ok(())
}
