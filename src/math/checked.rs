//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, SwapError>`](crate::error::SwapError) instead
//! of panicking on overflow or underflow.
//!
//! # Implementations
//!
//! - [`Amount`]: token quantities (`u128`)
//! - [`Shares`]: LP share quantities (`u128`)
//!
//! # Examples
//!
//! ```
//! use simple_swap::domain::Amount;
//! use simple_swap::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! let b = Amount::new(200);
//! assert_eq!(a.safe_add(&b), Ok(Amount::new(300)));
//! assert!(a.safe_sub(&b).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::SwapError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the result exceeds `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::Overflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("shares addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::Overflow("shares subtraction underflow"))
    }
}
