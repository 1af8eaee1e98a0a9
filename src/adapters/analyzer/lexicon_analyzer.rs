//! Word-list linguistic analyzer.
//!
//! Reference implementation of the `TextAnalyzer` port: category scores
//! are the percentage of tokens matched by each category's detector.
//! Production deployments may swap in a richer analyzer behind the same
//! port; this one anchors tests and local runs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

use crate::ports::{AnalyzerError, TextAnalyzer};

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z][a-z'-]*").expect("word pattern must compile"));

/// Letters at or above which a token counts as a big word.
const BIG_WORD_LETTERS: usize = 7;

/// Word lists per category, applied to lower-cased tokens.
static CATEGORY_WORDS: Lazy<Vec<(&'static str, HashSet<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            "analytic",
            HashSet::from([
                "therefore", "however", "consequently", "evidence", "analysis", "data",
                "measure", "result", "because", "compare", "ratio", "percent",
            ]),
        ),
        (
            "clout",
            HashSet::from([
                "lead", "win", "drive", "own", "deliver", "command", "decisive", "control",
                "winning", "leading",
            ]),
        ),
        (
            "authentic",
            HashSet::from([
                "honestly", "felt", "admit", "learned", "mistake", "truth", "failed",
                "wrong", "frankly",
            ]),
        ),
        (
            "positive_emotion",
            HashSet::from([
                "great", "good", "love", "excited", "proud", "happy", "win", "joy",
                "delighted", "hopeful",
            ]),
        ),
        (
            "negative_emotion",
            HashSet::from([
                "bad", "hate", "worried", "afraid", "angry", "sad", "lost", "fear",
                "painful", "frustrating",
            ]),
        ),
        (
            "social",
            HashSet::from([
                "team", "people", "friend", "community", "reader", "everyone", "together",
                "audience", "customer", "partner",
            ]),
        ),
        (
            "first_person",
            HashSet::from(["i", "me", "my", "mine", "we", "us", "our", "ours"]),
        ),
        (
            "second_person",
            HashSet::from(["you", "your", "yours", "yourself"]),
        ),
        (
            "third_person",
            HashSet::from([
                "he", "she", "they", "them", "their", "theirs", "him", "her", "his",
                "hers", "one",
            ]),
        ),
        (
            "cognition",
            HashSet::from([
                "think", "know", "believe", "understand", "realize", "consider", "reason",
                "assume", "figure", "wonder",
            ]),
        ),
        (
            "certitude",
            HashSet::from([
                "always", "never", "certainly", "definitely", "clearly", "must",
                "obviously", "undoubtedly", "absolute", "every",
            ]),
        ),
    ]
});

/// Frequency-based analyzer over built-in category word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    /// Creates the analyzer.
    pub fn new() -> Self {
        Self
    }
}

impl TextAnalyzer for LexiconAnalyzer {
    fn score(&self, text: &str) -> Result<BTreeMap<String, f64>, AnalyzerError> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();
        if tokens.is_empty() {
            return Err(AnalyzerError::malformed_output(
                "no scorable tokens in text",
            ));
        }
        let total = tokens.len() as f64;

        let mut scores = BTreeMap::new();
        for (category, words) in CATEGORY_WORDS.iter() {
            let matches = tokens.iter().filter(|t| words.contains(**t)).count();
            scores.insert(category.to_string(), 100.0 * matches as f64 / total);
        }
        let big = tokens
            .iter()
            .filter(|t| t.chars().filter(|c| c.is_alphabetic()).count() >= BIG_WORD_LETTERS)
            .count();
        scores.insert("big_words".to_string(), 100.0 * big as f64 / total);

        Ok(scores)
    }
}
