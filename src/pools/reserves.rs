//! Authoritative record of the two pool reserves.
//!
//! # Invariant
//!
//! Both reserves change together: [`ReserveLedger::apply_delta`] computes the
//! two new values before writing either, so no caller can observe a state
//! where only one side moved.

use primitive_types::U256;

use crate::domain::{Amount, Side};
use crate::error::{Result, SwapError};
use crate::math::product;

/// Signed change to one reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveDelta {
    /// Tokens flow into the pool.
    Credit(Amount),
    /// Tokens flow out of the pool.
    Debit(Amount),
}

impl ReserveDelta {
    fn apply(self, reserve: Amount) -> Result<Amount> {
        match self {
            Self::Credit(amount) => reserve
                .checked_add(&amount)
                .ok_or(SwapError::Overflow("reserve overflow on credit")),
            Self::Debit(amount) => reserve
                .checked_sub(&amount)
                .ok_or(SwapError::InsufficientLiquidity),
        }
    }
}

/// A snapshot of both reserves in canonical pair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reserves {
    /// Reserve of the lower-address token.
    pub reserve_a: Amount,
    /// Reserve of the higher-address token.
    pub reserve_b: Amount,
}

impl Reserves {
    /// Reserve on `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// `(reserve on first, reserve on the other side)`.
    #[must_use]
    pub const fn oriented(&self, first: Side) -> (Amount, Amount) {
        (self.get(first), self.get(first.flip()))
    }

    /// Exact `reserve_a * reserve_b`.
    #[must_use]
    pub fn product(&self) -> U256 {
        product(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub const fn has_zero(&self) -> bool {
        self.reserve_a.is_zero() || self.reserve_b.is_zero()
    }
}

/// Owns the pool's reserves; only the engine holds a mutable reference.
#[derive(Debug, Clone, Default)]
pub struct ReserveLedger {
    reserves: Reserves,
}

impl ReserveLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn current(&self) -> (Amount, Amount) {
        (self.reserves.reserve_a, self.reserves.reserve_b)
    }

    /// Current reserves as a [`Reserves`] snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> Reserves {
        self.reserves
    }

    /// Exact product of the current reserves.
    #[must_use]
    pub fn product(&self) -> U256 {
        self.reserves.product()
    }

    /// Computes the reserves `apply_delta` would produce, without writing.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientLiquidity`] if a debit exceeds its reserve.
    /// - [`SwapError::Overflow`] if a credit overflows.
    pub fn preview_delta(
        &self,
        delta_a: ReserveDelta,
        delta_b: ReserveDelta,
    ) -> Result<Reserves> {
        Ok(Reserves {
            reserve_a: delta_a.apply(self.reserves.reserve_a)?,
            reserve_b: delta_b.apply(self.reserves.reserve_b)?,
        })
    }

    /// Applies both deltas as one update.
    ///
    /// # Errors
    ///
    /// As [`preview_delta`](Self::preview_delta); on error nothing changes.
    pub fn apply_delta(
        &mut self,
        delta_a: ReserveDelta,
        delta_b: ReserveDelta,
    ) -> Result<Reserves> {
        let next = self.preview_delta(delta_a, delta_b)?;
        self.reserves = next;
        Ok(next)
    }
}

/// Builds canonical `(delta_a, delta_b)` from a delta on `side` and one on
/// the opposite side.
#[must_use]
pub const fn deltas_for(
    side: Side,
    on_side: ReserveDelta,
    other: ReserveDelta,
) -> (ReserveDelta, ReserveDelta) {
    match side {
        Side::A => (on_side, other),
        Side::B => (other, on_side),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn seeded(a: u128, b: u128) -> ReserveLedger {
        let mut ledger = ReserveLedger::new();
        let Ok(_) = ledger.apply_delta(
            ReserveDelta::Credit(Amount::new(a)),
            ReserveDelta::Credit(Amount::new(b)),
        ) else {
            panic!("seed failed");
        };
        ledger
    }

    #[test]
    fn starts_empty() {
        let ledger = ReserveLedger::new();
        assert_eq!(ledger.current(), (Amount::ZERO, Amount::ZERO));
        assert!(ledger.snapshot().has_zero());
        assert_eq!(ledger.product(), U256::zero());
    }

    #[test]
    fn credit_and_debit_together() {
        let mut ledger = seeded(1_000, 2_000);
        let Ok(next) = ledger.apply_delta(
            ReserveDelta::Credit(Amount::new(100)),
            ReserveDelta::Debit(Amount::new(150)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(next.reserve_a, Amount::new(1_100));
        assert_eq!(next.reserve_b, Amount::new(1_850));
        assert_eq!(ledger.current(), (Amount::new(1_100), Amount::new(1_850)));
    }

    #[test]
    fn overdraw_fails_without_partial_update() {
        let mut ledger = seeded(1_000, 2_000);
        let result = ledger.apply_delta(
            ReserveDelta::Credit(Amount::new(5)),
            ReserveDelta::Debit(Amount::new(2_001)),
        );
        assert_eq!(result, Err(SwapError::InsufficientLiquidity));
        assert_eq!(ledger.current(), (Amount::new(1_000), Amount::new(2_000)));
    }

    #[test]
    fn credit_overflow_fails_without_partial_update() {
        let mut ledger = seeded(1, u128::MAX);
        let result = ledger.apply_delta(
            ReserveDelta::Debit(Amount::new(1)),
            ReserveDelta::Credit(Amount::new(1)),
        );
        assert!(matches!(result, Err(SwapError::Overflow(_))));
        assert_eq!(ledger.current(), (Amount::new(1), Amount::MAX));
    }

    #[test]
    fn preview_does_not_write() {
        let ledger = seeded(10, 20);
        let Ok(preview) = ledger.preview_delta(
            ReserveDelta::Debit(Amount::new(10)),
            ReserveDelta::Debit(Amount::new(20)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(preview, Reserves::default());
        assert_eq!(ledger.current(), (Amount::new(10), Amount::new(20)));
    }

    #[test]
    fn product_is_exact_beyond_u128() {
        let big = 1_000_000_000_000_000_000_000u128;
        let ledger = seeded(big, big);
        assert_eq!(ledger.product(), U256::from(big) * U256::from(big));
    }

    #[test]
    fn orientation_helpers() {
        let r = Reserves {
            reserve_a: Amount::new(1),
            reserve_b: Amount::new(2),
        };
        assert_eq!(r.oriented(Side::A), (Amount::new(1), Amount::new(2)));
        assert_eq!(r.oriented(Side::B), (Amount::new(2), Amount::new(1)));
        let up = ReserveDelta::Credit(Amount::new(3));
        let down = ReserveDelta::Debit(Amount::new(4));
        assert_eq!(deltas_for(Side::A, up, down), (up, down));
        assert_eq!(deltas_for(Side::B, up, down), (down, up));
    }
}
