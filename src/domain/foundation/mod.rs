//! Foundation value objects shared across the engine.

mod errors;
mod ids;
mod timestamp;
mod unit_interval;

pub use errors::{EngineError, ValidationError};
pub use ids::{AuthorId, ExcerptId, ProfileId, PromptId};
pub use timestamp::Timestamp;
pub use unit_interval::UnitInterval;
