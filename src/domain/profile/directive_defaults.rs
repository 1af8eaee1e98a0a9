//! Default style-instruction fields carried by an author profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{UnitInterval, ValidationError};

/// Sentence length class used by cadence specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceKind {
    Short,
    Long,
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Long => write!(f, "long"),
        }
    }
}

/// One run in a cadence pattern: `len` consecutive sentences of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceRun {
    pub kind: SentenceKind,
    pub len: usize,
}

impl CadenceRun {
    /// Creates a run, rejecting zero lengths.
    pub fn new(kind: SentenceKind, len: usize) -> Result<Self, ValidationError> {
        if len == 0 {
            return Err(ValidationError::invalid_format(
                "cadence_run",
                "run length must be at least 1",
            ));
        }
        Ok(Self { kind, len })
    }
}

/// Ordered run-length spec for sentence rhythm, e.g. "2 long then 1 short".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadencePattern {
    runs: Vec<CadenceRun>,
}

impl CadencePattern {
    /// Creates a pattern from ordered runs.
    pub fn new(runs: Vec<CadenceRun>) -> Self {
        Self { runs }
    }

    /// Returns the ordered runs.
    pub fn runs(&self) -> &[CadenceRun] {
        &self.runs
    }

    /// True when the pattern declares no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Longest run of long sentences the pattern itself calls for.
    pub fn max_long_run(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| run.kind == SentenceKind::Long)
            .map(|run| run.len)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for CadencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .runs
            .iter()
            .map(|run| format!("{} {}", run.len, run.kind))
            .collect();
        write!(f, "{}", parts.join(" / "))
    }
}

/// Dominant grammatical person the text should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PronounDistance {
    /// Writer-centered voice (I, we).
    FirstPerson,
    /// Reader-addressed voice (you).
    SecondPerson,
    /// Detached voice (they, one).
    ThirdPerson,
}

impl Default for PronounDistance {
    fn default() -> Self {
        Self::SecondPerson
    }
}

impl fmt::Display for PronounDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstPerson => write!(f, "first person"),
            Self::SecondPerson => write!(f, "second person"),
            Self::ThirdPerson => write!(f, "third person"),
        }
    }
}

/// Minimum frequency of direct-address cues per sentence window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmpathyTarget {
    /// Minimum cue sentences required per window.
    pub min_cues: usize,
    /// Window size in sentences.
    pub window_sentences: usize,
}

impl EmpathyTarget {
    /// Creates an empathy target, rejecting a zero-sentence window.
    pub fn new(min_cues: usize, window_sentences: usize) -> Result<Self, ValidationError> {
        if window_sentences == 0 {
            return Err(ValidationError::invalid_format(
                "empathy_target",
                "window must span at least 1 sentence",
            ));
        }
        Ok(Self {
            min_cues,
            window_sentences,
        })
    }
}

impl Default for EmpathyTarget {
    fn default() -> Self {
        Self {
            min_cues: 1,
            window_sentences: 5,
        }
    }
}

/// Call-to-action register for the closing of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaStyle {
    /// No explicit ask.
    None,
    /// Gentle invitation ("worth a look").
    Soft,
    /// Imperative ask ("sign up today").
    Direct,
    /// Closing question to the reader.
    Question,
}

impl Default for CtaStyle {
    fn default() -> Self {
        Self::Soft
    }
}

impl fmt::Display for CtaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Soft => write!(f, "soft"),
            Self::Direct => write!(f, "direct"),
            Self::Question => write!(f, "question"),
        }
    }
}

/// Style-instruction defaults derived at extraction time.
///
/// Adapters overlay these field-by-field at planning time; a present
/// overlay field wins, an absent one falls through to these values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectiveDefaults {
    pub cadence: CadencePattern,
    pub pronoun_distance: PronounDistance,
    pub evidence_density: UnitInterval,
    pub empathy: EmpathyTarget,
    pub cta_style: CtaStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_run_rejects_zero_length() {
        assert!(CadenceRun::new(SentenceKind::Long, 0).is_err());
        assert!(CadenceRun::new(SentenceKind::Long, 2).is_ok());
    }

    #[test]
    fn cadence_pattern_displays_runs_in_order() {
        let pattern = CadencePattern::new(vec![
            CadenceRun::new(SentenceKind::Long, 2).unwrap(),
            CadenceRun::new(SentenceKind::Short, 1).unwrap(),
        ]);
        assert_eq!(format!("{}", pattern), "2 long / 1 short");
    }

    #[test]
    fn cadence_pattern_reports_max_long_run() {
        let pattern = CadencePattern::new(vec![
            CadenceRun::new(SentenceKind::Long, 2).unwrap(),
            CadenceRun::new(SentenceKind::Short, 1).unwrap(),
            CadenceRun::new(SentenceKind::Long, 3).unwrap(),
        ]);
        assert_eq!(pattern.max_long_run(), 3);

        let short_only =
            CadencePattern::new(vec![CadenceRun::new(SentenceKind::Short, 2).unwrap()]);
        assert_eq!(short_only.max_long_run(), 0);
    }

    #[test]
    fn empathy_target_rejects_zero_window() {
        assert!(EmpathyTarget::new(1, 0).is_err());
        assert!(EmpathyTarget::new(1, 4).is_ok());
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&PronounDistance::FirstPerson).unwrap(),
            "\"first_person\""
        );
        assert_eq!(serde_json::to_string(&CtaStyle::Soft).unwrap(), "\"soft\"");
        assert_eq!(
            serde_json::to_string(&SentenceKind::Long).unwrap(),
            "\"long\""
        );
    }

    #[test]
    fn defaults_are_reader_addressed_soft_ask() {
        let defaults = DirectiveDefaults::default();
        assert_eq!(defaults.pronoun_distance, PronounDistance::SecondPerson);
        assert_eq!(defaults.cta_style, CtaStyle::Soft);
        assert!(defaults.cadence.is_empty());
    }
}
