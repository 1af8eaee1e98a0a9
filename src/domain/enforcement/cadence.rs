//! Cadence enforcement pass.

use crate::domain::directive::StyleDirective;

use super::sentences::{join_sentences, split_at_clause, split_sentences, word_count};
use super::{PassEvent, PassResult};

/// Splits excessive runs of long sentences at clause boundaries.
///
/// A sentence is "long" when its word count exceeds `long_words`. Runs
/// of long sentences beyond the directive's tolerated run length are
/// split at the clause boundary nearest the sentence midpoint; a
/// sentence with no safe split point is left unchanged and flagged for
/// the validator.
pub fn apply(text: &str, directive: &StyleDirective, long_words: usize) -> PassResult {
    let sentences = split_sentences(text);
    let max_run = directive.max_long_sentence_run;
    let mut events = Vec::new();
    let mut output: Vec<String> = Vec::with_capacity(sentences.len());
    let mut run_len = 0usize;

    for (index, sentence) in sentences.iter().enumerate() {
        let is_long = word_count(sentence) > long_words;
        if !is_long {
            run_len = 0;
            output.push(sentence.clone());
            continue;
        }

        run_len += 1;
        if run_len <= max_run {
            output.push(sentence.clone());
            continue;
        }

        // The run has exceeded tolerance: break this sentence in two.
        match split_at_clause(sentence) {
            Some((left, right)) => {
                events.push(PassEvent::CadenceSplit {
                    sentence_index: index,
                });
                // The split resets the run only if the halves drop
                // under the long threshold.
                run_len = if word_count(&right) > long_words { 1 } else { 0 };
                output.push(left);
                output.push(right);
            }
            None => {
                events.push(PassEvent::CadenceOverrun {
                    sentence_index: index,
                    run_len,
                });
                output.push(sentence.clone());
            }
        }
    }

    PassResult {
        text: join_sentences(&output),
        events,
    }
}
