//! Author voice profile model.

mod author_profile;
mod category_score;
mod directive_defaults;
mod lexicon;

pub use author_profile::{AuthorProfile, SourceRef, ToleranceSettings};
pub use category_score::CategoryScore;
pub use directive_defaults::{
    CadencePattern, CadenceRun, CtaStyle, DirectiveDefaults, EmpathyTarget, PronounDistance,
    SentenceKind,
};
pub use lexicon::{Lexicon, AVOID_BUCKET, SIGNATURE_BUCKET};
