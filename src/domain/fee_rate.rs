//! Swap fee expressed as an exact fraction.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// Fraction of every swap input retained by the pool.
///
/// Stored as `numerator / denominator` so the pricing formula stays in exact
/// integer arithmetic.  The default is `3 / 1000` (0.3%).
///
/// # Invariant
///
/// `denominator > 0` and `numerator < denominator`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::FeeRate;
///
/// let fee = FeeRate::DEFAULT;
/// assert_eq!((fee.numerator(), fee.denominator()), (3, 1000));
/// assert_eq!(fee.retained(), 997);
/// assert!(FeeRate::new(1000, 1000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFeeRate", into = "RawFeeRate")]
pub struct FeeRate {
    numerator: u32,
    denominator: u32,
}

impl FeeRate {
    /// The standard 0.3% fee.
    pub const DEFAULT: Self = Self {
        numerator: 3,
        denominator: 1000,
    };

    /// No fee at all.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Creates a validated fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the denominator is zero
    /// or the fee is 100% or more.
    pub const fn new(numerator: u32, denominator: u32) -> Result<Self, SwapError> {
        if denominator == 0 {
            return Err(SwapError::InvalidConfiguration(
                "fee denominator must be non-zero",
            ));
        }
        if numerator >= denominator {
            return Err(SwapError::InvalidConfiguration(
                "fee must be less than 100%",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// `denominator - numerator`: the share of the input that moves the price.
    #[must_use]
    pub const fn retained(&self) -> u32 {
        self.denominator - self.numerator
    }

    /// Returns `true` for a zero fee.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Serialize, Deserialize)]
struct RawFeeRate {
    numerator: u32,
    denominator: u32,
}

impl TryFrom<RawFeeRate> for FeeRate {
    type Error = SwapError;

    fn try_from(raw: RawFeeRate) -> Result<Self, Self::Error> {
        Self::new(raw.numerator, raw.denominator)
    }
}

impl From<FeeRate> for RawFeeRate {
    fn from(fee: FeeRate) -> Self {
        Self {
            numerator: fee.numerator,
            denominator: fee.denominator,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thirty_basis_points() {
        assert_eq!(FeeRate::default(), FeeRate::DEFAULT);
        assert_eq!(FeeRate::DEFAULT.retained(), 997);
        assert!(!FeeRate::DEFAULT.is_zero());
    }

    #[test]
    fn zero_fee_is_valid() {
        assert!(FeeRate::ZERO.is_zero());
        assert_eq!(FeeRate::ZERO.retained(), 1);
        assert_eq!(FeeRate::new(0, 1), Ok(FeeRate::ZERO));
    }

    #[test]
    fn rejects_zero_denominator() {
        let Err(e) = FeeRate::new(0, 0) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            SwapError::InvalidConfiguration("fee denominator must be non-zero")
        );
    }

    #[test]
    fn rejects_full_fee() {
        assert!(FeeRate::new(10, 10).is_err());
        assert!(FeeRate::new(11, 10).is_err());
        assert!(FeeRate::new(9, 10).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(FeeRate::DEFAULT.to_string(), "3/1000");
    }
}
