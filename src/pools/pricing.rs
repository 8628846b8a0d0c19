//! Pure constant-product pricing.
//!
//! Every function here is deterministic integer arithmetic over explicit
//! reserves; none reads or writes pool state.  Products are formed in 512-bit
//! width and every division floors.
//!
//! ```text
//! amount_in_with_fee = amount_in × (den − num)
//! amount_out         = ⌊amount_in_with_fee × reserve_out / (reserve_in × den + amount_in_with_fee)⌋
//! amount_in          = ⌊reserve_in × amount_out × den / ((reserve_out − amount_out) × (den − num))⌋ + 1
//! ```
//!
//! The exact real-valued output is strictly less than `reserve_out`, so the
//! floored output is too: a single finite swap can never drain a reserve.

use primitive_types::U512;

use crate::domain::{Amount, FeeRate, Price};
use crate::error::{Result, SwapError};
use crate::math::mul_div;
use crate::math::wide::{narrow, widen};

/// Output of an exact-input swap of `amount_in` against the given reserves.
///
/// # Errors
///
/// - [`SwapError::InvalidReserves`] if either reserve is zero (checked first).
/// - [`SwapError::InsufficientInputAmount`] if `amount_in` is zero.
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SwapError::InvalidReserves);
    }
    if amount_in.is_zero() {
        return Err(SwapError::InsufficientInputAmount);
    }
    let amount_in_with_fee = widen(amount_in.get()) * U512::from(fee.retained());
    let numerator = amount_in_with_fee * widen(reserve_out.get());
    let denominator = widen(reserve_in.get()) * U512::from(fee.denominator()) + amount_in_with_fee;
    narrow(numerator / denominator, "amount_out").map(Amount::new)
}

/// Smallest input whose [`get_amount_out`] is at least `amount_out`.
///
/// # Errors
///
/// - [`SwapError::InvalidReserves`] if either reserve is zero.
/// - [`SwapError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`SwapError::InsufficientLiquidity`] if `amount_out >= reserve_out`.
/// - [`SwapError::Overflow`] if the required input exceeds `u128::MAX`.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SwapError::InvalidReserves);
    }
    if amount_out.is_zero() {
        return Err(SwapError::InsufficientOutputAmount {
            amount_out,
            amount_out_min: Amount::new(1),
        });
    }
    let remaining = reserve_out
        .checked_sub(&amount_out)
        .filter(|r| !r.is_zero())
        .ok_or(SwapError::InsufficientLiquidity)?;
    let numerator = widen(reserve_in.get())
        * widen(amount_out.get())
        * U512::from(fee.denominator());
    let denominator = widen(remaining.get()) * U512::from(fee.retained());
    narrow(numerator / denominator + U512::one(), "amount_in").map(Amount::new)
}

/// Amount of the other token worth `amount_a` at the current reserve ratio:
/// `⌊amount_a × reserve_b / reserve_a⌋`.
///
/// # Errors
///
/// Returns [`SwapError::InvalidReserves`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(SwapError::InvalidReserves);
    }
    mul_div(amount_a.get(), reserve_b.get(), reserve_a.get()).map(Amount::new)
}

/// Price of X in units of Y: `⌊reserve_y × 10^18 / reserve_x⌋`.
///
/// # Errors
///
/// - [`SwapError::InvalidReserves`] if `reserve_x` is zero.
/// - [`SwapError::Overflow`] if the ratio exceeds the fixed-point range.
pub fn spot_price(reserve_x: Amount, reserve_y: Amount) -> Result<Price> {
    if reserve_x.is_zero() {
        return Err(SwapError::InvalidReserves);
    }
    mul_div(reserve_y.get(), Price::SCALE, reserve_x.get()).map(Price::from_raw)
}

/// Portion of `amount_in` retained as the LP fee, floored.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] only for a malformed fee.
pub fn swap_fee(amount_in: Amount, fee: FeeRate) -> Result<Amount> {
    mul_div(
        amount_in.get(),
        u128::from(fee.numerator()),
        u128::from(fee.denominator()),
    )
    .map(Amount::new)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ONE_TOKEN;

    fn amt(v: u128) -> Amount {
        Amount::new(v)
    }

    // -- get_amount_out -----------------------------------------------------

    #[test]
    fn amount_out_known_value() {
        // 997_000 * 100_000 / (100_000 * 1000 + 997_000) = 987.15...
        assert_eq!(
            get_amount_out(amt(1_000), amt(100_000), amt(100_000), FeeRate::DEFAULT),
            Ok(amt(987))
        );
    }

    #[test]
    fn amount_out_zero_fee() {
        // 10 * 200 / (100 + 10) = 18.18...
        assert_eq!(
            get_amount_out(amt(10), amt(100), amt(200), FeeRate::ZERO),
            Ok(amt(18))
        );
    }

    #[test]
    fn amount_out_rejects_zero_reserves() {
        let fee = FeeRate::DEFAULT;
        assert_eq!(
            get_amount_out(amt(1), Amount::ZERO, amt(1), fee),
            Err(SwapError::InvalidReserves)
        );
        assert_eq!(
            get_amount_out(amt(1), amt(1), Amount::ZERO, fee),
            Err(SwapError::InvalidReserves)
        );
    }

    #[test]
    fn amount_out_rejects_zero_input() {
        assert_eq!(
            get_amount_out(Amount::ZERO, amt(1), amt(1), FeeRate::DEFAULT),
            Err(SwapError::InsufficientInputAmount)
        );
    }

    #[test]
    fn amount_out_never_drains_reserve() {
        let Ok(out) = get_amount_out(Amount::MAX, amt(1), amt(1_000), FeeRate::ZERO) else {
            panic!("expected Ok");
        };
        assert!(out < amt(1_000));
        assert_eq!(out, amt(999));
    }

    #[test]
    fn amount_out_with_eighteen_decimal_reserves() {
        let r = 1_000_000 * ONE_TOKEN;
        let Ok(out) = get_amount_out(amt(ONE_TOKEN), amt(r), amt(r), FeeRate::DEFAULT) else {
            panic!("expected Ok");
        };
        assert!(out.get() > 996 * ONE_TOKEN / 1_000);
        assert!(out.get() < ONE_TOKEN);
    }

    #[test]
    fn amount_out_grows_with_input() {
        let fee = FeeRate::DEFAULT;
        let (rin, rout) = (amt(1_000_000), amt(2_000_000));
        let mut last = Amount::ZERO;
        for step in 1..=20u128 {
            let Ok(out) = get_amount_out(amt(step * 1_000), rin, rout, fee) else {
                panic!("expected Ok");
            };
            assert!(out > last);
            last = out;
        }
    }

    // -- get_amount_in ------------------------------------------------------

    #[test]
    fn amount_in_inverts_amount_out() {
        let fee = FeeRate::DEFAULT;
        let (rin, rout) = (amt(100_000), amt(100_000));
        let Ok(needed) = get_amount_in(amt(987), rin, rout, fee) else {
            panic!("expected Ok");
        };
        let Ok(out) = get_amount_out(needed, rin, rout, fee) else {
            panic!("expected Ok");
        };
        assert!(out >= amt(987));
        let Ok(short) = get_amount_out(amt(needed.get() - 1), rin, rout, fee) else {
            panic!("expected Ok");
        };
        assert!(short < amt(987));
    }

    #[test]
    fn amount_in_rejects_draining_request() {
        let fee = FeeRate::DEFAULT;
        assert_eq!(
            get_amount_in(amt(100), amt(100), amt(100), fee),
            Err(SwapError::InsufficientLiquidity)
        );
        assert_eq!(
            get_amount_in(amt(101), amt(100), amt(100), fee),
            Err(SwapError::InsufficientLiquidity)
        );
    }

    #[test]
    fn amount_in_rejects_zero_output_and_reserves() {
        let fee = FeeRate::DEFAULT;
        assert!(matches!(
            get_amount_in(Amount::ZERO, amt(1), amt(1), fee),
            Err(SwapError::InsufficientOutputAmount { .. })
        ));
        assert_eq!(
            get_amount_in(amt(1), Amount::ZERO, amt(1), fee),
            Err(SwapError::InvalidReserves)
        );
    }

    // -- quote / spot_price -------------------------------------------------

    #[test]
    fn quote_is_proportional_and_floors() {
        assert_eq!(quote(amt(10), amt(100), amt(200)), Ok(amt(20)));
        assert_eq!(quote(amt(1), amt(3), amt(2)), Ok(Amount::ZERO));
        assert_eq!(
            quote(amt(1), Amount::ZERO, amt(2)),
            Err(SwapError::InvalidReserves)
        );
    }

    #[test]
    fn spot_price_scales_ratio() {
        let Ok(p) = spot_price(amt(100), amt(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.raw(), 2 * Price::SCALE);
        let Ok(p) = spot_price(amt(3), amt(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.raw(), 333_333_333_333_333_333);
        assert_eq!(spot_price(Amount::ZERO, amt(1)), Err(SwapError::InvalidReserves));
    }

    #[test]
    fn swap_fee_floors() {
        assert_eq!(swap_fee(amt(1_000), FeeRate::DEFAULT), Ok(amt(3)));
        assert_eq!(swap_fee(amt(999), FeeRate::DEFAULT), Ok(amt(2)));
        assert_eq!(swap_fee(amt(1_000), FeeRate::ZERO), Ok(Amount::ZERO));
    }
}
