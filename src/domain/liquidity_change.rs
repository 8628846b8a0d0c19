//! Liquidity deposit and withdrawal requests.

use super::{Address, Amount, Shares, Timestamp, Token};

/// Deposit into the pool.
///
/// `token_a` and `token_b` may be given in either order relative to the
/// pool's canonical pair; every amount here follows the caller's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidity {
    /// First token as the caller names it.
    pub token_a: Token,
    /// Second token as the caller names it.
    pub token_b: Token,
    /// Most the caller is willing to deposit of `token_a`.
    pub amount_a_desired: Amount,
    /// Most the caller is willing to deposit of `token_b`.
    pub amount_b_desired: Amount,
    /// Least the caller accepts to deposit of `token_a`.
    pub amount_a_min: Amount,
    /// Least the caller accepts to deposit of `token_b`.
    pub amount_b_min: Amount,
    /// Account credited with the minted shares.
    pub recipient: Address,
    /// Latest instant at which the deposit may execute.
    pub deadline: Timestamp,
}

/// Withdrawal from the pool by burning shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidity {
    /// First token as the caller names it.
    pub token_a: Token,
    /// Second token as the caller names it.
    pub token_b: Token,
    /// Shares to burn from the caller.
    pub shares: Shares,
    /// Least the caller accepts to receive of `token_a`.
    pub amount_a_min: Amount,
    /// Least the caller accepts to receive of `token_b`.
    pub amount_b_min: Amount,
    /// Account receiving both tokens.
    pub recipient: Address,
    /// Latest instant at which the withdrawal may execute.
    pub deadline: Timestamp,
}

/// A change to a provider's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidityChange {
    /// Deposit both tokens and mint shares.
    Add(AddLiquidity),
    /// Burn shares and withdraw both tokens.
    Remove(RemoveLiquidity),
}

impl LiquidityChange {
    /// Deadline of the wrapped request.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        match self {
            Self::Add(add) => add.deadline,
            Self::Remove(remove) => remove.deadline,
        }
    }

    /// Returns `true` for a deposit.
    #[must_use]
    pub const fn is_add(&self) -> bool {
        matches!(self, Self::Add(_))
    }
}

impl From<AddLiquidity> for LiquidityChange {
    fn from(add: AddLiquidity) -> Self {
        Self::Add(add)
    }
}

impl From<RemoveLiquidity> for LiquidityChange {
    fn from(remove: RemoveLiquidity) -> Self {
        Self::Remove(remove)
    }
}
