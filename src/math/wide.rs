//! Wide intermediate arithmetic for 18-decimal amounts.
//!
//! Two 18-decimal reserves multiplied together easily exceed `u128`
//! (`10^21 * 10^21 = 10^42 > 2^128`).  Every product-before-division in the
//! engine therefore widens to [`U512`], divides there, and narrows back with
//! an explicit range check.
//!
//! # Errors
//!
//! Functions return [`SwapError::Overflow`] when a final result does not fit
//! in `u128` or a divisor is zero.

use primitive_types::{U256, U512};

use crate::error::{Result, SwapError};

/// Widens a `u128` to [`U512`].
#[inline]
#[must_use]
pub fn widen(value: u128) -> U512 {
    U512::from(value)
}

/// Narrows a [`U512`] back to `u128`.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] with `context` if `value > u128::MAX`.
#[inline]
pub fn narrow(value: U512, context: &'static str) -> Result<u128> {
    if value > U512::from(u128::MAX) {
        return Err(SwapError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Computes `floor(a * b / denominator)` without intermediate overflow.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if `denominator` is zero or the quotient
/// exceeds `u128::MAX`.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(SwapError::Overflow("mul_div by zero"));
    }
    let numerator = widen(a)
        .checked_mul(widen(b))
        .ok_or(SwapError::Overflow("mul_div numerator"))?;
    narrow(numerator / widen(denominator), "mul_div result")
}

/// Exact product of two reserves.
///
/// Both factors are below `2^128`, so the product always fits in 256 bits.
#[must_use]
pub fn product(a: u128, b: u128) -> U256 {
    let (value, _) = U256::from(a).overflowing_mul(U256::from(b));
    value
}

/// `floor(sqrt(a * b))`, computed over the exact 256-bit product.
///
/// The result is at most `max(a, b) < 2^128` and always fits in `u128`.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    product(a, b).integer_sqrt().low_u128()
}
