//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds deposits, withdrawals and LP share accounting on
//! top of [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The total share supply changes only through
//! [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`],
//! and always equals the sum of every holder's balance:
//!
//! ```text
//! total_supply = Σ balance_of(holder)
//! ```
//!
//! Shares are redeemable pro rata: burning `s` of `T` shares pays out
//! `floor(s × reserve / T)` of each token.

use super::SwapPool;
use crate::domain::{
    AddLiquidity, AddLiquidityReceipt, Address, LiquidityChange, RemoveLiquidity,
    RemoveLiquidityReceipt, Shares,
};
use crate::error::SwapError;

/// Outcome of [`LiquidityPool::change_liquidity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidityReceipt {
    /// A deposit was committed.
    Added(AddLiquidityReceipt),
    /// A withdrawal was committed.
    Removed(RemoveLiquidityReceipt),
}

/// Liquidity provision and LP share interface.
///
/// # Errors
///
/// Beyond the [`SwapPool`] errors, common variants include:
///
/// - [`SwapError::InsufficientAmountA`] / [`SwapError::InsufficientAmountB`]:
///   the ratio-adjusted amounts fall below the caller's minimums
/// - [`SwapError::InsufficientInitialLiquidity`]: first deposit too small
/// - [`SwapError::ZeroSharesMinted`]: a deposit worth less than one share
/// - [`SwapError::InsufficientShares`]: burning or moving more than held
pub trait LiquidityPool: SwapPool {
    /// Deposits both tokens from `caller` and mints shares to the recipient.
    ///
    /// # Errors
    ///
    /// See the trait-level list; also [`SwapError::Expired`] and
    /// [`SwapError::TransferFailed`].
    fn add_liquidity(
        &mut self,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityReceipt, SwapError>;

    /// Burns `caller`'s shares and pays both tokens to the recipient.
    ///
    /// # Errors
    ///
    /// See the trait-level list; also [`SwapError::Expired`].
    fn remove_liquidity(
        &mut self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityReceipt, SwapError>;

    /// Dispatches a [`LiquidityChange`] to the matching operation.
    ///
    /// # Errors
    ///
    /// Whatever the dispatched operation returns.
    fn change_liquidity(
        &mut self,
        caller: Address,
        change: &LiquidityChange,
    ) -> Result<LiquidityReceipt, SwapError> {
        match change {
            LiquidityChange::Add(add) => self
                .add_liquidity(caller, add)
                .map(LiquidityReceipt::Added),
            LiquidityChange::Remove(remove) => self
                .remove_liquidity(caller, remove)
                .map(LiquidityReceipt::Removed),
        }
    }

    /// Moves LP shares between holders.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientShares`] if `from` holds fewer than
    /// `amount`.
    fn transfer_shares(
        &mut self,
        from: Address,
        to: Address,
        amount: Shares,
    ) -> Result<(), SwapError>;

    /// Shares held by `account`.
    #[must_use]
    fn balance_of(&self, account: Address) -> Shares;

    /// Total shares outstanding.
    #[must_use]
    fn total_supply(&self) -> Shares;
}
