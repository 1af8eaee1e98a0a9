//! Sample text normalization applied before analysis.

use unicode_normalization::UnicodeNormalization;

/// Zero-width characters stripped from samples.
fn is_zero_width(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
    )
}

/// Normalizes a writing sample for analysis.
///
/// Applies Unicode NFC, strips zero-width and control characters, and
/// collapses whitespace runs to single spaces. Idempotent.
pub fn normalize_sample(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let cleaned: String = composed
        .chars()
        .filter(|c| !is_zero_width(*c))
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
