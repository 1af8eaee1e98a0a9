//! Fully resolved style directive consumed by the generator harness.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use crate::domain::foundation::UnitInterval;
use crate::domain::profile::{CadencePattern, CtaStyle, EmpathyTarget, PronounDistance};

use super::adapter::MetaphorTag;

/// Target z-value and tolerance window for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTarget {
    pub target: f64,
    pub tolerance: f64,
}

/// Fully resolved instruction set for one generation run.
///
/// Every field the downstream contract requires is present; the planner
/// fails fast rather than emitting a partial directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDirective {
    /// What the piece is meant to achieve.
    pub goal: String,
    /// Who the piece is for.
    pub audience: String,
    /// Adapter key the directive was planned with.
    pub adapter_key: String,
    pub cadence: CadencePattern,
    pub pronoun_distance: PronounDistance,
    pub evidence_density: UnitInterval,
    pub empathy: EmpathyTarget,
    pub cta_style: CtaStyle,
    /// Category z-targets with tolerance, resolved from profile plus
    /// adapter bias.
    pub liwc_targets: BTreeMap<String, CategoryTarget>,
    /// Vocabulary the generator should favor, by bucket.
    pub lexicon_hints: BTreeMap<String, Vec<String>>,
    /// Vocabulary the generator should not use.
    pub avoid: Vec<String>,
    /// Metaphor families permitted in the output.
    pub metaphor_tags: BTreeSet<MetaphorTag>,
    /// Scaffold text prepended to the assembled prompt.
    pub scaffold: String,
    /// Longest run of long sentences enforcement tolerates.
    pub max_long_sentence_run: usize,
}

impl StyleDirective {
    /// Renders the directive as the instruction block of a prompt.
    ///
    /// Deterministic: map iteration order is stable, so identical
    /// directives render identical blocks.
    pub fn prompt_block(&self) -> String {
        let mut block = String::new();
        let _ = writeln!(block, "Goal: {}", self.goal);
        let _ = writeln!(block, "Audience: {}", self.audience);
        let _ = writeln!(block, "Sentence rhythm: {}", self.cadence);
        let _ = writeln!(block, "Voice: {}", self.pronoun_distance);
        let _ = writeln!(block, "Evidence density: {}", self.evidence_density);
        let _ = writeln!(
            block,
            "Reader acknowledgment: at least {} cue(s) every {} sentences",
            self.empathy.min_cues, self.empathy.window_sentences
        );
        let _ = writeln!(block, "Call to action: {}", self.cta_style);

        if !self.lexicon_hints.is_empty() {
            let mut hints = Vec::new();
            for tokens in self.lexicon_hints.values() {
                hints.extend(tokens.iter().cloned());
            }
            let _ = writeln!(block, "Favor vocabulary: {}", hints.join(", "));
        }
        if !self.avoid.is_empty() {
            let _ = writeln!(block, "Avoid vocabulary: {}", self.avoid.join(", "));
        }
        if !self.metaphor_tags.is_empty() {
            let tags: Vec<String> = self.metaphor_tags.iter().map(|t| t.to_string()).collect();
            let _ = writeln!(block, "Permitted metaphor families: {}", tags.join(", "));
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{CadenceRun, SentenceKind};

    fn test_directive() -> StyleDirective {
        StyleDirective {
            goal: "mobilization".to_string(),
            audience: "founders".to_string(),
            adapter_key: "linkedin".to_string(),
            cadence: CadencePattern::new(vec![
                CadenceRun { kind: SentenceKind::Long, len: 1 },
                CadenceRun { kind: SentenceKind::Short, len: 1 },
            ]),
            pronoun_distance: PronounDistance::SecondPerson,
            evidence_density: UnitInterval::new(0.6),
            empathy: EmpathyTarget { min_cues: 1, window_sentences: 3 },
            cta_style: CtaStyle::Direct,
            liwc_targets: BTreeMap::from([(
                "big_words".to_string(),
                CategoryTarget { target: 1.0, tolerance: 0.5 },
            )]),
            lexicon_hints: BTreeMap::from([(
                "signature".to_string(),
                vec!["momentum".to_string(), "trajectory".to_string()],
            )]),
            avoid: vec!["synergy".to_string()],
            metaphor_tags: BTreeSet::from([MetaphorTag::Journey]),
            scaffold: "Write a professional network post.".to_string(),
            max_long_sentence_run: 2,
        }
    }

    #[test]
    fn prompt_block_lists_all_constraints() {
        let block = test_directive().prompt_block();
        assert!(block.contains("Goal: mobilization"));
        assert!(block.contains("Audience: founders"));
        assert!(block.contains("Sentence rhythm: 1 long / 1 short"));
        assert!(block.contains("Voice: second person"));
        assert!(block.contains("Favor vocabulary: momentum, trajectory"));
        assert!(block.contains("Avoid vocabulary: synergy"));
        assert!(block.contains("Permitted metaphor families: journey"));
    }

    #[test]
    fn prompt_block_is_deterministic() {
        let directive = test_directive();
        assert_eq!(directive.prompt_block(), directive.prompt_block());
    }

    #[test]
    fn serde_round_trip_preserves_directive() {
        let directive = test_directive();
        let json = serde_json::to_string(&directive).unwrap();
        let back: StyleDirective = serde_json::from_str(&json).unwrap();
        assert_eq!(back, directive);
    }
}
