//! Application layer: orchestration over the domain and ports.

mod harness;
mod pipeline;

pub use harness::{GenerationOutput, GeneratorHarness};
pub use pipeline::{PipelineError, PipelineOutcome, PipelineRequest, StylePipeline};
