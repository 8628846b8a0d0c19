//! Outcomes of committed pool operations.

use core::fmt;

use super::{Amount, Shares, Token};

/// Result of a committed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    /// Token paid in.
    pub token_in: Token,
    /// Token paid out.
    pub token_out: Token,
    /// Amount taken from the caller.
    pub amount_in: Amount,
    /// Amount sent to the recipient.
    pub amount_out: Amount,
    /// Portion of `amount_in` retained as the LP fee (floored).
    pub fee: Amount,
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} {} -> {} {} (fee {})",
            self.amount_in, self.token_in, self.amount_out, self.token_out, self.fee
        )
    }
}

/// Result of a committed deposit, in the caller's token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityReceipt {
    /// Amount of the caller's `token_a` deposited.
    pub amount_a: Amount,
    /// Amount of the caller's `token_b` deposited.
    pub amount_b: Amount,
    /// Shares credited to the recipient.
    pub shares_minted: Shares,
}

/// Result of a committed withdrawal, in the caller's token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityReceipt {
    /// Amount of the caller's `token_a` paid out.
    pub amount_a: Amount,
    /// Amount of the caller's `token_b` paid out.
    pub amount_b: Amount,
}
