//! Reference baseline and trait projection.
//!
//! The baseline is the population-level statistical context every author
//! profile is normalized against. Both tables are loaded once at process
//! start from the versioned asset set and never mutated afterwards.

mod reference;
mod trait_map;

pub use reference::{CategoryNorm, DomainLegendEntry, ReferenceBaseline};
pub use trait_map::{TraitDefinition, TraitProjection, TraitTable};
