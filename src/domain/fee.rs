use super::amount::MinorUnits;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::Serialize;

const BPS_PER_UNIT: u128 = 10_000;

/// The platform fee retained on every charge unless configured otherwise.
pub const DEFAULT_FEE_PERCENT: Decimal = dec!(10);

/// Computes the default platform fee (10%) for an amount in minor units,
/// rounded half-up to the nearest integer.
pub fn platform_fee(amount: u64) -> u64 {
    FeePolicy::default().fee(MinorUnits::new(amount)).value()
}

/// A flat-percentage platform fee, stored in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeePolicy {
    rate_bps: u32,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self { rate_bps: 1_000 }
    }
}

impl FeePolicy {
    pub fn from_bps(rate_bps: u32) -> Result<Self> {
        if rate_bps as u128 > BPS_PER_UNIT {
            return Err(PaymentError::InvalidFeeRate(format!(
                "{} bps exceeds 100%",
                rate_bps
            )));
        }
        Ok(Self { rate_bps })
    }

    /// Builds a policy from a percentage such as `10` or `2.75`.
    ///
    /// The percentage must resolve to a whole number of basis points between 0% and 100%.
    pub fn from_percent(percent: Decimal) -> Result<Self> {
        let bps = percent.checked_mul(dec!(100)).ok_or_else(|| {
            PaymentError::InvalidFeeRate(format!("{}% is out of range", percent))
        })?;
        if bps.is_sign_negative() && !bps.is_zero() {
            return Err(PaymentError::InvalidFeeRate(format!(
                "{}% is negative",
                percent
            )));
        }
        if !bps.fract().is_zero() {
            return Err(PaymentError::InvalidFeeRate(format!(
                "{}% is finer than one basis point",
                percent
            )));
        }
        let bps = bps.to_u32().ok_or_else(|| {
            PaymentError::InvalidFeeRate(format!("{}% is out of range", percent))
        })?;
        Self::from_bps(bps)
    }

    pub fn rate_bps(&self) -> u32 {
        self.rate_bps
    }

    pub fn rate_percent(&self) -> Decimal {
        Decimal::from(self.rate_bps) / dec!(100)
    }

    /// Fee for `amount`, rounded half-up. Never exceeds `amount`.
    pub fn fee(&self, amount: MinorUnits) -> MinorUnits {
        let scaled = amount.value() as u128 * self.rate_bps as u128;
        let rounded = (scaled + BPS_PER_UNIT / 2) / BPS_PER_UNIT;
        // rate_bps <= 10_000, so rounded <= amount
        MinorUnits::new(rounded as u64)
    }

    pub fn breakdown(&self, amount: MinorUnits) -> FeeBreakdown {
        let fee = self.fee(amount);
        FeeBreakdown {
            amount,
            fee,
            net: amount.checked_sub(fee).unwrap_or(MinorUnits::ZERO),
        }
    }
}

/// The result of applying a [`FeePolicy`] to a single amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    pub amount: MinorUnits,
    pub fee: MinorUnits,
    pub net: MinorUnits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_fee_examples() {
        assert_eq!(platform_fee(100), 10);
        assert_eq!(platform_fee(999), 100);
        assert_eq!(platform_fee(0), 0);
    }

    #[test]
    fn test_platform_fee_rounds_half_up() {
        assert_eq!(platform_fee(4), 0);
        assert_eq!(platform_fee(5), 1);
        assert_eq!(platform_fee(15), 2);
        assert_eq!(platform_fee(25), 3);
        assert_eq!(platform_fee(994), 99);
        assert_eq!(platform_fee(995), 100);
    }

    #[test]
    fn test_platform_fee_no_overflow_at_max() {
        let fee = platform_fee(u64::MAX);
        assert_eq!(fee, u64::MAX / 10 + 1);
    }

    #[test]
    fn test_from_percent() {
        assert_eq!(FeePolicy::from_percent(dec!(10)).unwrap(), FeePolicy::default());
        assert_eq!(FeePolicy::from_percent(dec!(2.75)).unwrap().rate_bps(), 275);
        assert_eq!(FeePolicy::from_percent(dec!(0)).unwrap().rate_bps(), 0);
        assert_eq!(FeePolicy::from_percent(dec!(100)).unwrap().rate_bps(), 10_000);
    }

    #[test]
    fn test_from_percent_rejects_invalid() {
        assert!(matches!(
            FeePolicy::from_percent(dec!(-1)),
            Err(PaymentError::InvalidFeeRate(_))
        ));
        assert!(matches!(
            FeePolicy::from_percent(dec!(100.01)),
            Err(PaymentError::InvalidFeeRate(_))
        ));
        assert!(matches!(
            FeePolicy::from_percent(dec!(1.001)),
            Err(PaymentError::InvalidFeeRate(_))
        ));
        assert!(matches!(
            FeePolicy::from_percent(Decimal::MAX),
            Err(PaymentError::InvalidFeeRate(_))
        ));
        assert!(matches!(
            FeePolicy::from_percent(Decimal::MIN),
            Err(PaymentError::InvalidFeeRate(_))
        ));
        assert!(matches!(
            FeePolicy::from_bps(10_001),
            Err(PaymentError::InvalidFeeRate(_))
        ));
    }

    #[test]
    fn test_breakdown() {
        let policy = FeePolicy::default();
        let b = policy.breakdown(MinorUnits::new(999));
        assert_eq!(b.fee, MinorUnits::new(100));
        assert_eq!(b.net, MinorUnits::new(899));

        let full = FeePolicy::from_bps(10_000).unwrap().breakdown(MinorUnits::new(7));
        assert_eq!(full.fee, MinorUnits::new(7));
        assert_eq!(full.net, MinorUnits::ZERO);
    }

    #[test]
    fn test_rate_percent() {
        assert_eq!(FeePolicy::default().rate_percent(), dec!(10));
        assert_eq!(FeePolicy::from_bps(275).unwrap().rate_percent(), dec!(2.75));
    }
}
