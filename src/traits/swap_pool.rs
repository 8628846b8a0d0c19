//! Core swap pool trait for executing swaps and querying pool state.
//!
//! [`SwapPool`] covers the trading side of a pool:
//!
//! 1. **Execute**: [`SwapPool::swap_exact_tokens_for_tokens`] performs the
//!    token exchange.
//! 2. **Quote**: [`SwapPool::get_price`], [`SwapPool::get_amount_out`] and
//!    [`SwapPool::get_amount_in`] price trades without touching state.
//! 3. **Inspect**: [`SwapPool::token_pair`], [`SwapPool::fee_rate`] and
//!    [`SwapPool::reserves`].
//!
//! # Fee Invariant
//!
//! The fee is applied to the input before the pricing formula and is never
//! paid out: the input reserve is credited with the full `amount_in`.
//!
//! ```text
//! amount_in_with_fee = amount_in × (den − num)
//! amount_out = amount_in_with_fee × reserve_out / (reserve_in × den + amount_in_with_fee)
//! ```

use crate::domain::{Address, Amount, FeeRate, Price, SwapReceipt, SwapRequest, Token, TokenPair};
use crate::error::SwapError;

/// Trading interface of a two-token pool.
///
/// # Implementors
///
/// - [`SimpleSwap`](crate::pools::SimpleSwap): single-owner engine.
/// - [`SharedSwap`](crate::pools::SharedSwap): thread-safe handle that
///   serializes every call.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, SwapError>`].  Common error
/// variants include:
///
/// - [`SwapError::Expired`]: the caller's deadline has passed
/// - [`SwapError::InvalidPath`] / [`SwapError::InvalidToken`]: tokens do
///   not match the pool pair
/// - [`SwapError::InvalidReserves`]: the pool has no liquidity
/// - [`SwapError::InsufficientOutputAmount`]: slippage floor not met
pub trait SwapPool {
    /// Swaps an exact `amount_in` of `path[0]` for as much `path[1]` as the
    /// curve yields, paying `caller`'s input and sending output to
    /// `request.recipient`.
    ///
    /// All-or-nothing: on any error the pool and both token ledgers are
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Expired`] when the deadline has passed (checked first).
    /// - [`SwapError::InvalidPath`] unless the path is exactly the pair.
    /// - [`SwapError::InsufficientOutputAmount`] below `amount_out_min`.
    /// - [`SwapError::TransferFailed`] if the input cannot be pulled.
    fn swap_exact_tokens_for_tokens(
        &mut self,
        caller: Address,
        request: &SwapRequest,
    ) -> Result<SwapReceipt, SwapError>;

    /// Spot price of `token_x` in units of `token_y`, 18-decimal fixed point.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidReserves`] if the pool is empty.
    /// - [`SwapError::InvalidToken`] if either token is outside the pair.
    fn get_price(&self, token_x: &Token, token_y: &Token) -> Result<Price, SwapError>;

    /// Output for `amount_in` against explicit reserves at the pool's fee.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidReserves`] if either reserve is zero.
    /// - [`SwapError::InsufficientInputAmount`] if `amount_in` is zero.
    fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, SwapError>;

    /// Minimum input that yields `amount_out` against explicit reserves at
    /// the pool's fee.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidReserves`] if either reserve is zero.
    /// - [`SwapError::InsufficientOutputAmount`] if `amount_out` is zero.
    /// - [`SwapError::InsufficientLiquidity`] if `amount_out >= reserve_out`.
    fn get_amount_in(
        &self,
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, SwapError>;

    /// The canonically ordered token pair traded by this pool.
    #[must_use]
    fn token_pair(&self) -> TokenPair;

    /// The fee applied to every swap.
    #[must_use]
    fn fee_rate(&self) -> FeeRate;

    /// Current `(reserve_a, reserve_b)` in canonical pair order.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);
}
