//! UnitInterval value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0.0 and 1.0 inclusive.
///
/// Used for trait sliders and evidence density, where out-of-range inputs
/// are soft signals to be clamped rather than hard errors.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitInterval(f64);

impl UnitInterval {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// One.
    pub const ONE: Self = Self(1.0);

    /// Creates a new UnitInterval, clamping to the valid range.
    ///
    /// Non-finite inputs clamp to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a UnitInterval, returning an error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "unit_interval",
                0.0,
                1.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for UnitInterval {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for UnitInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(UnitInterval::new(0.0).value(), 0.0);
        assert_eq!(UnitInterval::new(0.5).value(), 0.5);
        assert_eq!(UnitInterval::new(1.0).value(), 1.0);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(UnitInterval::new(-0.3).value(), 0.0);
        assert_eq!(UnitInterval::new(1.7).value(), 1.0);
        assert_eq!(UnitInterval::new(50.0).value(), 1.0);
    }

    #[test]
    fn new_clamps_nan_to_zero() {
        assert_eq!(UnitInterval::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(UnitInterval::try_new(0.5).is_ok());
        assert!(UnitInterval::try_new(-0.1).is_err());
        assert!(UnitInterval::try_new(1.1).is_err());
        assert!(UnitInterval::try_new(f64::NAN).is_err());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(format!("{}", UnitInterval::new(0.5)), "0.50");
        assert_eq!(format!("{}", UnitInterval::ONE), "1.00");
    }

    #[test]
    fn serializes_transparently() {
        let v = UnitInterval::new(0.25);
        assert_eq!(serde_json::to_string(&v).unwrap(), "0.25");
        let back: UnitInterval = serde_json::from_str("0.25").unwrap();
        assert_eq!(back, v);
    }
}
