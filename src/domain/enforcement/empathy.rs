//! Empathy coverage pass.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::directive::StyleDirective;

use super::sentences::split_sentences;
use super::{PassEvent, PassResult};

/// Direct-address and acknowledgment cues.
static CUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(you|your|yours|let's|imagine|consider|picture this|think about|we know|we understand|we've all|i hear|sound familiar|notice)\b",
    )
    .expect("cue pattern must compile")
});

/// Checks each sentence window for the directive's minimum cue count.
///
/// Detection only: inserting content risks corrupting meaning, so
/// windows under target are surfaced as gaps for the validator instead
/// of being silently fixed.
pub fn apply(text: &str, directive: &StyleDirective) -> PassResult {
    let sentences = split_sentences(text);
    let window = directive.empathy.window_sentences.max(1);
    let min_cues = directive.empathy.min_cues;
    let mut events = Vec::new();

    for (window_index, chunk) in sentences.chunks(window).enumerate() {
        // A trailing partial window is held to a prorated floor so a
        // two-sentence coda is not required to carry a full window's
        // cues.
        let required = if chunk.len() == window {
            min_cues
        } else {
            (min_cues * chunk.len()).div_ceil(window)
        };
        let cues = chunk
            .iter()
            .filter(|sentence| CUE_RE.is_match(sentence))
            .count();
        if cues < required {
            events.push(PassEvent::EmpathyGap {
                window_start: window_index * window,
            });
        }
    }

    PassResult {
        text: text.to_string(),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directive::{CategoryTarget, StyleDirective};
    use crate::domain::foundation::UnitInterval;
    use crate::domain::profile::{
        CadencePattern, CadenceRun, CtaStyle, EmpathyTarget, PronounDistance, SentenceKind,
    };
    use std::collections::{BTreeMap, BTreeSet};

    fn directive(min_cues: usize, window: usize) -> StyleDirective {
        StyleDirective {
            goal: "test".to_string(),
            audience: "test".to_string(),
            adapter_key: "blog".to_string(),
            cadence: CadencePattern::new(vec![CadenceRun {
                kind: SentenceKind::Short,
                len: 1,
            }]),
            pronoun_distance: PronounDistance::SecondPerson,
            evidence_density: UnitInterval::new(0.5),
            empathy: EmpathyTarget {
                min_cues,
                window_sentences: window,
            },
            cta_style: CtaStyle::Soft,
            liwc_targets: BTreeMap::from([(
                "big_words".to_string(),
                CategoryTarget {
                    target: 0.0,
                    tolerance: 0.5,
                },
            )]),
            lexicon_hints: BTreeMap::new(),
            avoid: Vec::new(),
            metaphor_tags: BTreeSet::new(),
            scaffold: String::new(),
            max_long_sentence_run: 2,
        }
    }

    #[test]
    fn covered_windows_produce_no_gaps() {
        let text = "You know the feeling. The report lands late. Imagine the alternative. The team reads it anyway.";
        let result = apply(text, &directive(1, 2));
        assert!(result.events.is_empty());
        assert_eq!(result.text, text);
    }

    #[test]
    fn uncovered_window_is_reported_not_fixed() {
        let text = "The report landed late. The team read it. You noticed immediately. The charts told the story.";
        let result = apply(text, &directive(1, 2));

        assert_eq!(
            result.events,
            vec![PassEvent::EmpathyGap { window_start: 0 }]
        );
        assert_eq!(result.text, text);
    }

    #[test]
    fn trailing_partial_window_is_prorated() {
        // Five sentences with a window of 4: the single-sentence tail
        // needs ceil(1*1/4) = 1 cue only if min_cues*len rounds up.
        let text = "You saw it coming. It happened. It kept happening. Nothing changed. The end.";
        let result = apply(text, &directive(1, 4));
        assert_eq!(
            result.events,
            vec![PassEvent::EmpathyGap { window_start: 4 }]
        );
    }

    #[test]
    fn multiple_gaps_are_all_reported() {
        let text = "One. Two. Three. Four.";
        let result = apply(text, &directive(1, 2));
        assert_eq!(result.events.len(), 2);
    }
}
