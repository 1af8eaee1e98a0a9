//! Typography normalization pass.

use super::{PassEvent, PassResult};

/// Replaces curly quotes, long dashes, and ellipses with canonical
/// forms, strips control characters, and collapses space runs.
///
/// Idempotent: applying it twice yields the same result as applying it
/// once.
pub fn apply(text: &str) -> PassResult {
    let mut replacements = 0usize;
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => {
                out.push('\'');
                replacements += 1;
            }
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => {
                out.push('"');
                replacements += 1;
            }
            '\u{2013}' | '\u{2014}' | '\u{2015}' => {
                out.push('-');
                replacements += 1;
            }
            '\u{2026}' => {
                out.push_str("...");
                replacements += 1;
            }
            '\u{00A0}' => {
                out.push(' ');
                replacements += 1;
            }
            c if c.is_control() => {
                out.push(' ');
                replacements += 1;
            }
            c => out.push(c),
        }
    }

    // Collapse space runs introduced by the replacements above or
    // already present in the input.
    let mut collapsed = String::with_capacity(out.len());
    let mut last_was_space = false;
    for c in out.chars() {
        if c == ' ' {
            if !last_was_space {
                collapsed.push(c);
            } else {
                replacements += 1;
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }
    let trimmed = collapsed.trim().to_string();

    let events = if replacements > 0 {
        vec![PassEvent::TypographyNormalized { replacements }]
    } else {
        Vec::new()
    };

    PassResult {
        text: trimmed,
        events,
    }
}
