use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount in the smallest currency unit (e.g. cents).
///
/// Integer-backed so that fee arithmetic is exact; conversion to major units
/// goes through `rust_decimal::Decimal`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Converts to major units given the currency exponent (2 for USD, 0 for JPY).
    pub fn to_major(&self, exponent: u32) -> Decimal {
        Decimal::from_i128_with_scale(self.0 as i128, exponent)
    }
}

impl From<u64> for MinorUnits {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<MinorUnits> for u64 {
    fn from(amount: MinorUnits) -> Self {
        amount.0
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_checked_arithmetic() {
        let a = MinorUnits::new(10);
        let b = MinorUnits::new(5);
        assert_eq!(a.checked_add(b), Some(MinorUnits::new(15)));
        assert_eq!(a.checked_sub(b), Some(MinorUnits::new(5)));
        assert_eq!(b.checked_sub(a), None);
        assert_eq!(MinorUnits::new(u64::MAX).checked_add(b), None);
    }

    #[test]
    fn test_to_major() {
        assert_eq!(MinorUnits::new(1999).to_major(2), dec!(19.99));
        assert_eq!(MinorUnits::new(500).to_major(0), dec!(500));
        assert_eq!(MinorUnits::ZERO.to_major(2), dec!(0));
    }

    #[test]
    fn test_deserializes_from_plain_integer() {
        let amount: MinorUnits = serde_json::from_str("1250").unwrap();
        assert_eq!(amount.value(), 1250);
    }
}
