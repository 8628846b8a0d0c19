//! Raw token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of decimal places every pooled token uses.
pub const TOKEN_DECIMALS: u8 = 18;

/// One whole token expressed in raw units (`10^18`).
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// A raw token amount in the smallest unit (18 decimal places).
///
/// `Amount` is a plain `u128`: every value is valid.  Arithmetic methods are
/// checked and return `None` on overflow, underflow, or division by zero
/// instead of panicking.  Division always floors.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(Amount::from_tokens(2).get(), 2_000_000_000_000_000_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an amount of `whole` tokens (scaled by `10^18`).
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    pub const fn from_tokens(whole: u64) -> Self {
        Self(whole as u128 * ONE_TOKEN)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Floor division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        Some(Self(self.0 / divisor.0))
    }

    /// Returns the smaller of two amounts.
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn from_tokens_scales_by_eighteen_decimals() {
        assert_eq!(Amount::from_tokens(1).get(), ONE_TOKEN);
        assert_eq!(Amount::from_tokens(100).get(), 100 * ONE_TOKEN);
        assert_eq!(Amount::from_tokens(0), Amount::ZERO);
    }

    #[test]
    fn from_tokens_max_does_not_overflow() {
        let a = Amount::from_tokens(u64::MAX);
        assert_eq!(a.get(), u128::from(u64::MAX) * ONE_TOKEN);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
        assert_eq!(Amount::new(5).min(Amount::new(3)), Amount::new(3));
        assert_eq!(Amount::new(3).min(Amount::new(5)), Amount::new(3));
    }

    #[test]
    fn add_and_overflow() {
        assert_eq!(
            Amount::new(100).checked_add(&Amount::new(200)),
            Some(Amount::new(300))
        );
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_and_underflow() {
        assert_eq!(
            Amount::new(300).checked_sub(&Amount::new(100)),
            Some(Amount::new(200))
        );
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn mul_and_overflow() {
        assert_eq!(
            Amount::new(100).checked_mul(&Amount::new(200)),
            Some(Amount::new(20_000))
        );
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    #[test]
    fn div_floors() {
        assert_eq!(
            Amount::new(10).checked_div(&Amount::new(3)),
            Some(Amount::new(3))
        );
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2)),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(Amount::new(100).checked_div(&Amount::ZERO), None);
    }
}
