//! Fixed-point spot price.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A spot price in 18-decimal fixed point: `raw / 10^18` units of the quote
/// token per unit of the base token.
///
/// Produced by [`pricing::spot_price`](crate::pools::pricing::spot_price), which
/// floors the exact ratio.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Price;
///
/// let p = Price::from_raw(1_500_000_000_000_000_000);
/// assert_eq!(p.to_string(), "1.5");
/// assert_eq!(Price::ONE.raw(), Price::SCALE);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// Fixed-point scale (`10^18`).
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// A price of exactly one.
    pub const ONE: Self = Self(Self::SCALE);

    /// Wraps a raw fixed-point value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Raw fixed-point value (`price * 10^18`, floored).
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Integer part of the price.
    #[must_use]
    pub const fn whole(&self) -> u128 {
        self.0 / Self::SCALE
    }

    /// Lossy conversion for display and charting.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:018}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}
