//! Author lexicon: token buckets mined from source text.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Bucket name for tokens the generator should favor.
pub const SIGNATURE_BUCKET: &str = "signature";

/// Bucket name for tokens that cut against the author's profile.
pub const AVOID_BUCKET: &str = "avoid";

/// Named buckets of unique, lower-cased tokens drawn only from the
/// author's own source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    buckets: BTreeMap<String, BTreeSet<String>>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token into a bucket, lower-casing it first.
    ///
    /// Duplicate tokens within a bucket are collapsed.
    pub fn insert(&mut self, bucket: impl Into<String>, token: &str) {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            return;
        }
        self.buckets.entry(bucket.into()).or_default().insert(token);
    }

    /// Returns the tokens in a bucket, if present.
    pub fn bucket(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.buckets.get(name)
    }

    /// Iterates bucket names in stable order.
    pub fn bucket_names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Returns hint buckets: every bucket except `avoid`, with tokens in
    /// lexicographic order.
    pub fn hint_buckets(&self) -> BTreeMap<String, Vec<String>> {
        self.buckets
            .iter()
            .filter(|(name, _)| name.as_str() != AVOID_BUCKET)
            .map(|(name, tokens)| (name.clone(), tokens.iter().cloned().collect()))
            .collect()
    }

    /// Returns the avoid-bucket tokens in lexicographic order.
    pub fn avoid_tokens(&self) -> Vec<String> {
        self.buckets
            .get(AVOID_BUCKET)
            .map(|tokens| tokens.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// True when no bucket other than `avoid` holds a token.
    pub fn has_no_hints(&self) -> bool {
        self.buckets
            .iter()
            .all(|(name, tokens)| name.as_str() == AVOID_BUCKET || tokens.is_empty())
    }
}
