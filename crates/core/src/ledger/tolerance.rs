//! Balancing tolerance.

use ledgerly_shared::config::ValidationConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance must be zero or positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Tolerance must not be negative: {0}")]
pub struct NegativeTolerance(pub Decimal);

/// Largest absolute difference still considered balanced.
///
/// Absorbs decimal rounding only. A real imbalance of any size above it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tolerance(Decimal);

impl Tolerance {
    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeTolerance`] when `value` is below zero.
    pub fn new(value: Decimal) -> Result<Self, NegativeTolerance> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NegativeTolerance(value));
        }
        Ok(Self(value))
    }

    /// A tolerance that only accepts exact equality.
    #[must_use]
    pub const fn exact() -> Self {
        Self(Decimal::ZERO)
    }

    /// Reads the configured tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeTolerance`] when the configured value is below zero.
    pub fn from_config(config: &ValidationConfig) -> Result<Self, NegativeTolerance> {
        Self::new(config.tolerance)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if `difference` is within the tolerance (either sign).
    #[must_use]
    pub fn admits(self, difference: Decimal) -> bool {
        difference.abs() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(Decimal::new(1, 2))
    }
}

impl<'de> Deserialize<'de> for Tolerance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_one_cent() {
        assert_eq!(Tolerance::default().value(), dec!(0.01));
    }

    #[test]
    fn test_admits_boundary() {
        let tolerance = Tolerance::default();
        assert!(tolerance.admits(dec!(0.01)));
        assert!(tolerance.admits(dec!(-0.01)));
        assert!(!tolerance.admits(dec!(0.011)));
        assert!(!tolerance.admits(dec!(-0.5)));
    }

    #[test]
    fn test_exact() {
        assert!(Tolerance::exact().admits(Decimal::ZERO));
        assert!(!Tolerance::exact().admits(dec!(0.0001)));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(Tolerance::new(dec!(-0.01)), Err(NegativeTolerance(dec!(-0.01))));
        assert!(Tolerance::new(Decimal::ZERO).is_ok());
        assert!(serde_json::from_str::<Tolerance>(r#""-1""#).is_err());
    }

    #[test]
    fn test_deserialize_from_string() {
        let tolerance: Tolerance = serde_json::from_str(r#""0.05""#).unwrap();
        assert_eq!(tolerance.value(), dec!(0.05));
    }

    #[test]
    fn test_from_config() {
        let config = ValidationConfig {
            tolerance: dec!(0.5),
        };
        assert_eq!(Tolerance::from_config(&config).unwrap().value(), dec!(0.5));
    }
}
