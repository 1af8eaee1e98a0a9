//! Deterministic enforcement: a fixed pipeline of pure text passes.
//!
//! Passes run in a fixed order and never skip silently. A pass that
//! cannot act deterministically degrades to "flag, don't mutate": the
//! outcome is recorded as an event for the validator rather than raised
//! as an error, so one malformed sentence never aborts the pipeline.

mod cadence;
mod empathy;
mod metaphor;
mod pronouns;
mod sentences;
mod typography;

pub use sentences::{split_at_clause, split_sentences, word_count};

use serde::{Deserialize, Serialize};

use crate::domain::directive::{MetaphorTag, StyleDirective};
use crate::domain::profile::PronounDistance;

/// The five enforcement passes, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Typography,
    Cadence,
    PronounDistance,
    EmpathyCoverage,
    MetaphorCoherence,
}

/// Outcome record emitted by an enforcement pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PassEvent {
    /// Typography characters were normalized.
    TypographyNormalized { replacements: usize },
    /// A long-sentence run was broken at a clause boundary.
    CadenceSplit { sentence_index: usize },
    /// A long-sentence run exceeded tolerance but had no safe split.
    CadenceOverrun { sentence_index: usize, run_len: usize },
    /// One pronoun was rewritten toward the target class.
    PronounSubstituted { from: String, to: String },
    /// Dominance could not be shifted with safe substitutions.
    PronounDrift {
        dominant: PronounDistance,
        target: PronounDistance,
    },
    /// A sentence window fell short of the empathy cue target.
    EmpathyGap { window_start: usize },
    /// An offending metaphor clause was removed.
    MetaphorRemoved { tag: MetaphorTag, phrase: String },
    /// An offending metaphor could not be removed safely.
    MetaphorFlagged { phrase: String },
}

impl PassEvent {
    /// The pass that emitted this event.
    pub fn pass(&self) -> PassKind {
        match self {
            PassEvent::TypographyNormalized { .. } => PassKind::Typography,
            PassEvent::CadenceSplit { .. } | PassEvent::CadenceOverrun { .. } => PassKind::Cadence,
            PassEvent::PronounSubstituted { .. } | PassEvent::PronounDrift { .. } => {
                PassKind::PronounDistance
            }
            PassEvent::EmpathyGap { .. } => PassKind::EmpathyCoverage,
            PassEvent::MetaphorRemoved { .. } | PassEvent::MetaphorFlagged { .. } => {
                PassKind::MetaphorCoherence
            }
        }
    }
}

/// Text and events produced by a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PassResult {
    pub text: String,
    pub events: Vec<PassEvent>,
}

/// Final text and the concatenated events of every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EnforcementOutcome {
    pub text: String,
    pub events: Vec<PassEvent>,
}

/// Enforcement tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct EnforcerConfig {
    /// Word count above which a sentence counts as long.
    pub long_sentence_words: usize,
}

impl Default for EnforcerConfig {
    fn default() -> Self {
        Self {
            long_sentence_words: 20,
        }
    }
}

/// Runs the fixed enforcement pipeline over generator output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enforcer {
    config: EnforcerConfig,
}

impl Enforcer {
    /// Creates an enforcer with the given configuration.
    pub fn new(config: EnforcerConfig) -> Self {
        Self { config }
    }

    /// Applies all passes in order and concatenates their events.
    ///
    /// Pure: identical text and directive produce an identical outcome.
    pub fn enforce(&self, text: &str, directive: &StyleDirective) -> EnforcementOutcome {
        let mut events = Vec::new();

        let result = typography::apply(text);
        events.extend(result.events);

        let result = cadence::apply(&result.text, directive, self.config.long_sentence_words);
        events.extend(result.events);

        let result = pronouns::apply(&result.text, directive);
        events.extend(result.events);

        let result = empathy::apply(&result.text, directive);
        events.extend(result.events);

        let result = metaphor::apply(&result.text, directive);
        events.extend(result.events);

        EnforcementOutcome {
            text: result.text,
            events,
        }
    }
}
