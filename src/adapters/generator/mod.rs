//! Generator adapters.

mod http_provider;
mod mock;

pub use http_provider::{HttpGenerator, HttpGeneratorConfig};
pub use mock::MockGenerator;
