//! Metaphor coherence pass.

use once_cell::sync::Lazy;

use crate::domain::directive::{MetaphorTag, StyleDirective};

use super::{PassEvent, PassResult};

/// Indicator phrases mapped to their metaphor family.
static INDICATORS: Lazy<Vec<(&'static str, MetaphorTag)>> = Lazy::new(|| {
    vec![
        ("home run", MetaphorTag::Sports),
        ("slam dunk", MetaphorTag::Sports),
        ("move the goalposts", MetaphorTag::Sports),
        ("full-court press", MetaphorTag::Sports),
        ("par for the course", MetaphorTag::Sports),
        ("north star", MetaphorTag::Journey),
        ("roadmap", MetaphorTag::Journey),
        ("milestone", MetaphorTag::Journey),
        ("at a crossroads", MetaphorTag::Journey),
        ("chart a course", MetaphorTag::Journey),
        ("blueprint", MetaphorTag::Craft),
        ("building blocks", MetaphorTag::Craft),
        ("laying the foundation", MetaphorTag::Craft),
        ("measure twice", MetaphorTag::Craft),
        ("well-oiled machine", MetaphorTag::Machinery),
        ("firing on all cylinders", MetaphorTag::Machinery),
        ("engine of growth", MetaphorTag::Machinery),
        ("bear fruit", MetaphorTag::Nature),
        ("fertile ground", MetaphorTag::Nature),
        ("put down roots", MetaphorTag::Nature),
        ("organic growth", MetaphorTag::Nature),
        ("battle-tested", MetaphorTag::Combat),
        ("war room", MetaphorTag::Combat),
        ("in the trenches", MetaphorTag::Combat),
        ("take no prisoners", MetaphorTag::Combat),
    ]
});

/// Punctuation that bounds a removable clause.
fn is_clause_boundary(c: char) -> bool {
    matches!(c, ',' | ';' | '.' | '!' | '?')
}

/// Removes or flags metaphor phrases outside the permitted families.
///
/// The offending clause is removed only when it is preceded by a comma
/// or semicolon and runs to the next punctuation mark; anything less
/// clearly bounded is flagged instead of mutated.
pub fn apply(text: &str, directive: &StyleDirective) -> PassResult {
    let mut current = text.to_string();
    let mut events = Vec::new();

    // Phrases are processed in table order; after each removal the scan
    // restarts on the rewritten text so offsets stay valid. ASCII
    // lowering keeps byte offsets aligned with the original text.
    loop {
        let lowered = current.to_ascii_lowercase();
        let mut acted = false;

        for (phrase, tag) in INDICATORS.iter() {
            if directive.metaphor_tags.contains(tag) {
                continue;
            }
            let Some(start) = lowered.find(phrase) else {
                continue;
            };
            let end = start + phrase.len();

            match clause_bounds(&current, start, end) {
                Some((clause_start, clause_end)) => {
                    let removed = current[clause_start..clause_end].trim().to_string();
                    current.replace_range(clause_start..clause_end, "");
                    current = current.replace("  ", " ");
                    events.push(PassEvent::MetaphorRemoved {
                        tag: *tag,
                        phrase: removed,
                    });
                    acted = true;
                    break;
                }
                None => {
                    // Flag once per phrase occurrence; record and move on.
                    if !events.iter().any(|e| {
                        matches!(e, PassEvent::MetaphorFlagged { phrase: p } if p == phrase)
                    }) {
                        events.push(PassEvent::MetaphorFlagged {
                            phrase: phrase.to_string(),
                        });
                    }
                }
            }
        }

        if !acted {
            break;
        }
    }

    PassResult {
        text: current,
        events,
    }
}

/// Finds the removable clause containing `[start, end)`.
///
/// The clause must begin at a comma or semicolon and extend to (but not
/// including) the next punctuation mark. Returns byte bounds covering
/// the leading comma through the end of the clause.
fn clause_bounds(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let before = &text[..start];
    let boundary = before.rfind(is_clause_boundary)?;
    if !matches!(&text[boundary..=boundary], "," | ";") {
        return None;
    }

    let after_offset = text[end..].find(is_clause_boundary)?;
    let clause_end = end + after_offset;
    Some((boundary, clause_end))
}
