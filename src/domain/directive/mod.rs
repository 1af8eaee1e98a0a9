//! Style-instruction planning: adapters, directives, and the planner.

mod adapter;
mod planner;
mod style_directive;

pub use adapter::{AdapterOverlay, AdapterRegistry, MetaphorTag};
pub use planner::Planner;
pub use style_directive::{CategoryTarget, StyleDirective};
