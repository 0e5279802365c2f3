//! Base-unit vote weights.
//!
//! Weights are fixed-point integers where 100 units are 1% and 10 000 units
//! are the whole of a user's voting power. Percentages enter as decimals
//! with up to two fractional digits and are truncated, never rounded.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// A vote weight in base units (1/100 of a percent).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BaseUnits(u64);

impl BaseUnits {
    pub const ZERO: Self = Self(0);

    /// The per-user voting budget: 100%.
    pub const MAX_WEIGHT: Self = Self(10_000);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Convert a percentage to base units as `floor(percent * 100)`.
    ///
    /// Negative percentages saturate to zero and values too large for
    /// `u64` saturate to `u64::MAX`, so this never panics.
    pub fn from_percent(percent: Decimal) -> Self {
        if percent.is_sign_negative() {
            return Self::ZERO;
        }
        match percent.checked_mul(Decimal::ONE_HUNDRED) {
            Some(scaled) => Self(scaled.floor().to_u64().unwrap_or(u64::MAX)),
            None => Self(u64::MAX),
        }
    }

    /// The weight as a percentage with two fractional digits.
    pub fn to_percent(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Weight left over when `self` has been allocated out of `budget`.
    pub fn remaining_of(self, budget: Self) -> Self {
        budget.saturating_sub(self)
    }
}

impl fmt::Display for BaseUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUnits {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TypesError::InvalidWeight(s.to_string()))
    }
}

impl From<u64> for BaseUnits {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Serde adapter encoding [`BaseUnits`] as a decimal-integer string, the
/// form the voting contract call takes its weights in.
pub mod as_string {
    use super::BaseUnits;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BaseUnits, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BaseUnits, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_conversion_truncates() {
        assert_eq!(BaseUnits::from_percent(dec!(30)), BaseUnits::new(3000));
        assert_eq!(BaseUnits::from_percent(dec!(0.29)), BaseUnits::new(29));
        assert_eq!(BaseUnits::from_percent(dec!(12.345)), BaseUnits::new(1234));
        assert_eq!(BaseUnits::from_percent(dec!(0.005)), BaseUnits::ZERO);
    }

    #[test]
    fn percent_conversion_saturates() {
        assert_eq!(BaseUnits::from_percent(dec!(-5)), BaseUnits::ZERO);
        assert_eq!(BaseUnits::from_percent(Decimal::MAX), BaseUnits::new(u64::MAX));
    }

    #[test]
    fn to_percent_inverts_whole_units() {
        assert_eq!(BaseUnits::new(1234).to_percent(), dec!(12.34));
        assert_eq!(BaseUnits::MAX_WEIGHT.to_percent(), dec!(100));
    }

    #[test]
    fn remaining_of_budget() {
        assert_eq!(
            BaseUnits::new(7500).remaining_of(BaseUnits::MAX_WEIGHT),
            BaseUnits::new(2500)
        );
        assert_eq!(
            BaseUnits::new(12_000).remaining_of(BaseUnits::MAX_WEIGHT),
            BaseUnits::ZERO
        );
    }

    #[test]
    fn arithmetic_saturates_instead_of_panicking() {
        assert_eq!(
            BaseUnits::new(500).saturating_sub(BaseUnits::new(8000)),
            BaseUnits::ZERO
        );
        assert_eq!(
            BaseUnits::new(u64::MAX).saturating_add(BaseUnits::new(1)),
            BaseUnits::new(u64::MAX)
        );
    }

    #[test]
    fn parse_from_string() {
        assert_eq!("6000".parse::<BaseUnits>().unwrap(), BaseUnits::new(6000));
        assert_eq!(
            "-1".parse::<BaseUnits>(),
            Err(TypesError::InvalidWeight("-1".to_string()))
        );
    }
}
