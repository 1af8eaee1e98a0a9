//! Normalized category measurement for one author.

use serde::{Deserialize, Serialize};

/// A linguistic category measurement normalized against the reference
/// baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category name as declared by the baseline.
    pub name: String,
    /// Weighted corpus mean across the author's samples.
    pub mean: f64,
    /// Population standard deviation from the baseline.
    pub stdev: f64,
    /// Standardized distance from the population mean.
    pub z: f64,
    /// True when the baseline stdev was zero, making `z` undefined and
    /// reported as 0.
    #[serde(default)]
    pub baseline_degenerate: bool,
}

impl CategoryScore {
    /// Creates a score with a well-defined z.
    pub fn new(name: impl Into<String>, mean: f64, stdev: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            stdev,
            z,
            baseline_degenerate: false,
        }
    }

    /// Creates a score whose baseline had zero variance.
    pub fn degenerate(name: impl Into<String>, mean: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            stdev: 0.0,
            z: 0.0,
            baseline_degenerate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carries_z() {
        let score = CategoryScore::new("big_words", 14.0, 2.0, 2.0);
        assert_eq!(score.z, 2.0);
        assert!(!score.baseline_degenerate);
    }

    #[test]
    fn degenerate_reports_zero_z_with_flag() {
        let score = CategoryScore::degenerate("certitude", 9.0);
        assert_eq!(score.z, 0.0);
        assert!(score.baseline_degenerate);
    }

    #[test]
    fn degenerate_flag_defaults_false_on_deserialize() {
        let score: CategoryScore = serde_json::from_str(
            r#"{"name":"big_words","mean":14.0,"stdev":2.0,"z":2.0}"#,
        )
        .unwrap();
        assert!(!score.baseline_degenerate);
    }
}
