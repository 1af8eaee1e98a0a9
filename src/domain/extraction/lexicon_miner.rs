//! Lexicon mining: signature and avoid vocabulary from source text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::domain::foundation::EngineError;
use crate::domain::profile::{Lexicon, AVOID_BUCKET, SIGNATURE_BUCKET};
use crate::ports::TextAnalyzer;

/// Word pattern for candidate tokens.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z][a-z'-]{2,}").expect("word pattern must compile"));

/// Function words excluded from mining.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "that", "this", "with", "you", "your", "are", "was", "were", "has",
        "have", "had", "but", "not", "all", "can", "will", "our", "they", "their", "them",
        "from", "what", "when", "where", "who", "how", "why", "its", "it's", "than", "then",
        "there", "here", "been", "being", "into", "out", "about", "over", "under", "again",
        "more", "most", "some", "any", "each", "just", "only", "very", "also", "because", "while",
        "which", "would", "could", "should", "these", "those", "such", "other", "after", "before",
        "between", "does", "did", "doing", "don't", "didn't",
    ]
    .into_iter()
    .collect()
});

/// Most frequent tokens considered before per-token category checks.
const MAX_CANDIDATES: usize = 160;

/// Miner configuration.
#[derive(Debug, Clone, Copy)]
pub struct LexiconMiner {
    /// Tokens kept per bucket.
    top_n: usize,
}

impl LexiconMiner {
    /// Creates a miner keeping `top_n` tokens per bucket.
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Mines signature and avoid buckets from normalized samples.
    ///
    /// Candidates are content tokens ranked by document frequency with a
    /// lexicographic tie-break for determinism. A candidate lands in the
    /// signature bucket when the analyzer places it in a category from
    /// the top quartile of the author's z-scores, and in the avoid bucket
    /// when its categories sit in the bottom quartile.
    pub fn mine(
        &self,
        normalized_samples: &[String],
        z_scores: &BTreeMap<String, f64>,
        analyzer: &dyn TextAnalyzer,
    ) -> Result<Lexicon, EngineError> {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for sample in normalized_samples {
            let lowered = sample.to_lowercase();
            let tokens: BTreeSet<&str> = WORD_RE
                .find_iter(&lowered)
                .map(|m| m.as_str())
                .filter(|t| !STOPWORDS.contains(t))
                .collect();
            for token in tokens {
                *doc_freq.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        // Rank by frequency desc, then token asc for a stable tie-break.
        let mut ranked: Vec<(String, usize)> = doc_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(MAX_CANDIDATES);

        let (top, bottom) = quartile_categories(z_scores);
        let mut lexicon = Lexicon::new();
        let mut signature_count = 0;
        let mut avoid_count = 0;

        for (token, _) in ranked {
            if signature_count >= self.top_n && avoid_count >= self.top_n {
                break;
            }
            let token_categories = analyzer.score(&token)?;
            let active: BTreeSet<&str> = token_categories
                .iter()
                .filter(|(_, score)| **score > 0.0)
                .map(|(name, _)| name.as_str())
                .collect();
            if active.is_empty() {
                continue;
            }
            if signature_count < self.top_n && active.iter().any(|c| top.contains(*c)) {
                lexicon.insert(SIGNATURE_BUCKET, &token);
                signature_count += 1;
            } else if avoid_count < self.top_n && active.iter().any(|c| bottom.contains(*c)) {
                lexicon.insert(AVOID_BUCKET, &token);
                avoid_count += 1;
            }
        }

        Ok(lexicon)
    }
}

/// Splits category names into top- and bottom-quartile sets by z-score.
fn quartile_categories(z_scores: &BTreeMap<String, f64>) -> (BTreeSet<String>, BTreeSet<String>) {
    if z_scores.is_empty() {
        return (BTreeSet::new(), BTreeSet::new());
    }
    let mut values: Vec<f64> = z_scores.values().copied().collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q3 = values[(values.len() * 3) / 4..]
        .first()
        .copied()
        .unwrap_or(f64::INFINITY);
    let q1 = values[..=(values.len() / 4).min(values.len() - 1)]
        .last()
        .copied()
        .unwrap_or(f64::NEG_INFINITY);

    let top = z_scores
        .iter()
        .filter(|(_, z)| **z >= q3)
        .map(|(name, _)| name.clone())
        .collect();
    let bottom = z_scores
        .iter()
        .filter(|(_, z)| **z <= q1)
        .map(|(name, _)| name.clone())
        .collect();
    (top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::AnalyzerError;

    /// Analyzer that tags tokens by a fixed word-to-category table.
    struct TableAnalyzer;

    impl TextAnalyzer for TableAnalyzer {
        fn score(&self, text: &str) -> Result<BTreeMap<String, f64>, AnalyzerError> {
            let mut scores = BTreeMap::new();
            for token in text.split_whitespace() {
                match token {
                    "momentum" | "leverage" | "trajectory" => {
                        *scores.entry("analytic".to_string()).or_insert(0.0) += 1.0;
                    }
                    "maybe" | "perhaps" => {
                        *scores.entry("hedging".to_string()).or_insert(0.0) += 1.0;
                    }
                    _ => {}
                }
            }
            Ok(scores)
        }
    }

    fn z_scores() -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("analytic".to_string(), 2.0),
            ("clout".to_string(), 0.5),
            ("social".to_string(), 0.1),
            ("hedging".to_string(), -1.5),
        ])
    }

    #[test]
    fn mines_signature_tokens_from_top_quartile_categories() {
        let miner = LexiconMiner::new(4);
        let samples = vec![
            "Momentum and leverage carry the argument.".to_string(),
            "Momentum, maybe, perhaps.".to_string(),
        ];
        let lexicon = miner.mine(&samples, &z_scores(), &TableAnalyzer).unwrap();

        let signature = lexicon.bucket(SIGNATURE_BUCKET).unwrap();
        assert!(signature.contains("momentum"));
        assert!(signature.contains("leverage"));
    }

    #[test]
    fn mines_avoid_tokens_from_bottom_quartile_categories() {
        let miner = LexiconMiner::new(4);
        let samples = vec!["Maybe this works, perhaps not.".to_string()];
        let lexicon = miner.mine(&samples, &z_scores(), &TableAnalyzer).unwrap();

        assert_eq!(
            lexicon.avoid_tokens(),
            vec!["maybe".to_string(), "perhaps".to_string()]
        );
    }

    #[test]
    fn skips_stopwords_and_uncategorized_tokens() {
        let miner = LexiconMiner::new(4);
        let samples = vec!["The gardener watered the zinnias.".to_string()];
        let lexicon = miner.mine(&samples, &z_scores(), &TableAnalyzer).unwrap();
        assert!(lexicon.has_no_hints());
    }

    #[test]
    fn mining_is_deterministic() {
        let miner = LexiconMiner::new(4);
        let samples = vec![
            "Momentum and leverage and trajectory.".to_string(),
            "Trajectory beats leverage.".to_string(),
        ];
        let first = miner.mine(&samples, &z_scores(), &TableAnalyzer).unwrap();
        let second = miner.mine(&samples, &z_scores(), &TableAnalyzer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn respects_top_n_cap() {
        let miner = LexiconMiner::new(1);
        let samples = vec!["Momentum leverage trajectory.".to_string()];
        let lexicon = miner.mine(&samples, &z_scores(), &TableAnalyzer).unwrap();
        assert_eq!(lexicon.bucket(SIGNATURE_BUCKET).unwrap().len(), 1);
    }
}
