//! Pronoun distance enforcement pass.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::directive::StyleDirective;
use crate::domain::profile::PronounDistance;

use super::{PassEvent, PassResult};

/// Margin by which the dominant class must beat the target class before
/// the pass rewrites anything.
const DOMINANCE_TOLERANCE: usize = 2;

static FIRST_PERSON: &[&str] = &["i", "me", "my", "mine", "we", "us", "our", "ours"];
static SECOND_PERSON: &[&str] = &["you", "your", "yours", "yourself"];
static THIRD_PERSON: &[&str] = &[
    "he", "she", "they", "them", "their", "theirs", "him", "her", "his", "hers", "one", "one's",
];

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z']+").expect("word pattern must compile"));

fn class_words(class: PronounDistance) -> &'static [&'static str] {
    match class {
        PronounDistance::FirstPerson => FIRST_PERSON,
        PronounDistance::SecondPerson => SECOND_PERSON,
        PronounDistance::ThirdPerson => THIRD_PERSON,
    }
}

/// Word-level substitution table for shifting one class toward another.
///
/// Only grammatically safe swaps are listed; a pronoun without a safe
/// counterpart is left alone.
fn substitution(from: PronounDistance, to: PronounDistance, word: &str) -> Option<&'static str> {
    use PronounDistance::*;
    match (from, to, word) {
        (SecondPerson, ThirdPerson, "you") => Some("one"),
        (SecondPerson, ThirdPerson, "your") => Some("one's"),
        (SecondPerson, ThirdPerson, "yours") => Some("one's"),
        (SecondPerson, ThirdPerson, "yourself") => Some("oneself"),
        (SecondPerson, FirstPerson, "you") => Some("we"),
        (SecondPerson, FirstPerson, "your") => Some("our"),
        (SecondPerson, FirstPerson, "yours") => Some("ours"),
        (FirstPerson, SecondPerson, "we") => Some("you"),
        (FirstPerson, SecondPerson, "us") => Some("you"),
        (FirstPerson, SecondPerson, "our") => Some("your"),
        (FirstPerson, SecondPerson, "ours") => Some("yours"),
        (FirstPerson, ThirdPerson, "we") => Some("they"),
        (FirstPerson, ThirdPerson, "us") => Some("them"),
        (FirstPerson, ThirdPerson, "our") => Some("their"),
        (FirstPerson, ThirdPerson, "ours") => Some("theirs"),
        (FirstPerson, ThirdPerson, "i") => Some("one"),
        (FirstPerson, ThirdPerson, "my") => Some("one's"),
        (FirstPerson, ThirdPerson, "me") => Some("one"),
        (ThirdPerson, SecondPerson, "they") => Some("you"),
        (ThirdPerson, SecondPerson, "them") => Some("you"),
        (ThirdPerson, SecondPerson, "their") => Some("your"),
        (ThirdPerson, SecondPerson, "theirs") => Some("yours"),
        (ThirdPerson, FirstPerson, "they") => Some("we"),
        (ThirdPerson, FirstPerson, "them") => Some("us"),
        (ThirdPerson, FirstPerson, "their") => Some("our"),
        (ThirdPerson, FirstPerson, "theirs") => Some("ours"),
        _ => None,
    }
}

/// Counts pronoun occurrences per class.
fn count_classes(text: &str) -> [(PronounDistance, usize); 3] {
    let mut first = 0usize;
    let mut second = 0usize;
    let mut third = 0usize;
    for m in WORD_RE.find_iter(text) {
        let word = m.as_str().to_lowercase();
        if FIRST_PERSON.contains(&word.as_str()) {
            first += 1;
        } else if SECOND_PERSON.contains(&word.as_str()) {
            second += 1;
        } else if THIRD_PERSON.contains(&word.as_str()) {
            third += 1;
        }
    }
    [
        (PronounDistance::FirstPerson, first),
        (PronounDistance::SecondPerson, second),
        (PronounDistance::ThirdPerson, third),
    ]
}

/// Preserves a leading capital when substituting.
fn match_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().map(char::is_uppercase).unwrap_or(false);
    if starts_upper {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}

/// Shifts the dominant pronoun class toward the directive's target.
///
/// Substitutes the minimal number of pronouns needed to make the target
/// class dominant, in text order, logging each substitution. When the
/// safe substitution table cannot flip dominance the pass degrades to a
/// drift flag without mutating further.
pub fn apply(text: &str, directive: &StyleDirective) -> PassResult {
    let target = directive.pronoun_distance;
    let counts = count_classes(text);
    let (dominant, dominant_count) = counts
        .iter()
        .copied()
        .max_by_key(|(_, count)| *count)
        .unwrap_or((target, 0));
    let target_count = counts
        .iter()
        .find(|(class, _)| *class == target)
        .map(|(_, count)| *count)
        .unwrap_or(0);

    if dominant == target || dominant_count < target_count + DOMINANCE_TOLERANCE {
        return PassResult {
            text: text.to_string(),
            events: Vec::new(),
        };
    }

    // Each swap moves one occurrence across classes, closing the gap by
    // two per substitution.
    let gap = dominant_count - target_count;
    let needed = gap / 2 + 1;

    let mut events = Vec::new();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    let mut done = 0usize;

    for m in WORD_RE.find_iter(text) {
        if done >= needed {
            break;
        }
        let word = m.as_str();
        let lowered = word.to_lowercase();
        if !class_words(dominant).contains(&lowered.as_str()) {
            continue;
        }
        if let Some(replacement) = substitution(dominant, target, &lowered) {
            out.push_str(&text[cursor..m.start()]);
            let cased = match_case(word, replacement);
            debug!(from = word, to = %cased, "pronoun substitution");
            events.push(PassEvent::PronounSubstituted {
                from: word.to_string(),
                to: cased.clone(),
            });
            out.push_str(&cased);
            cursor = m.end();
            done += 1;
        }
    }
    out.push_str(&text[cursor..]);

    if done < needed {
        events.push(PassEvent::PronounDrift {
            dominant,
            target,
        });
    }

    PassResult { text: out, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directive::{CategoryTarget, StyleDirective};
    use crate::domain::foundation::UnitInterval;
    use crate::domain::profile::{
        CadencePattern, CadenceRun, CtaStyle, EmpathyTarget, SentenceKind,
    };
    use std::collections::{BTreeMap, BTreeSet};

    fn directive(target: PronounDistance) -> StyleDirective {
        StyleDirective {
            goal: "test".to_string(),
            audience: "test".to_string(),
            adapter_key: "blog".to_string(),
            cadence: CadencePattern::new(vec![CadenceRun {
                kind: SentenceKind::Short,
                len: 1,
            }]),
            pronoun_distance: target,
            evidence_density: UnitInterval::new(0.5),
            empathy: EmpathyTarget::default(),
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
    fn matching_dominant_class_is_untouched() {
        let text = "You should trust your own reading of the numbers.";
        let result = apply(text, &directive(PronounDistance::SecondPerson));
        assert_eq!(result.text, text);
        assert!(result.events.is_empty());
    }

    #[test]
    fn small_imbalance_is_within_tolerance() {
        let text = "You decide. They watch.";
        let result = apply(text, &directive(PronounDistance::ThirdPerson));
        assert_eq!(result.text, text);
        assert!(result.events.is_empty());
    }

    #[test]
    fn shifts_second_person_to_third() {
        let text = "You own the outcome. You set the pace. You carry the risk.";
        let result = apply(text, &directive(PronounDistance::ThirdPerson));

        // Two substitutions flip a 3-0 gap to 1-2.
        let substitutions = result
            .events
            .iter()
            .filter(|e| matches!(e, PassEvent::PronounSubstituted { .. }))
            .count();
        assert_eq!(substitutions, 2);
        assert!(result.text.starts_with("One own the outcome. One set the pace."));
        assert!(result.text.contains("You carry the risk."));
    }

    #[test]
    fn preserves_capitalization() {
        let text = "You lead here. Also you follow. Then you rest. Later you stop.";
        let result = apply(text, &directive(PronounDistance::ThirdPerson));
        assert!(result.text.starts_with("One lead here."));
        assert!(result.text.contains("Also one follow."));
    }

    #[test]
    fn unmappable_dominance_is_flagged_not_mutated() {
        // "his"/"hers" have no safe counterpart toward second person.
        let text = "His view won. Hers lost. His plan shipped. Hers stalled.";
        let result = apply(text, &directive(PronounDistance::SecondPerson));
        assert!(result
            .events
            .iter()
            .any(|e| matches!(e, PassEvent::PronounDrift { .. })));
        assert_eq!(result.text, text);
    }

    #[test]
    fn substitutions_are_logged_in_order() {
        let text = "We shipped it. We measured it. We moved on.";
        let result = apply(text, &directive(PronounDistance::SecondPerson));
        let first = result.events.first().unwrap();
        assert!(matches!(
            first,
            PassEvent::PronounSubstituted { from, .. } if from == "We"
        ));
    }
}
