//! Unified error types for the SimpleSwap engine.
//!
//! Every fallible engine operation returns [`SwapError`].  Variants carry the
//! offending values where a caller can act on them (slippage floors, share
//! balances, deadlines).  Token-ledger failures are wrapped unchanged in
//! [`SwapError::TransferFailed`].
//!
//! [`SwapError::InvariantViolation`] is reserved for states that correct
//! pricing and accounting can never produce; it signals a logic defect rather
//! than bad input and is surfaced separately via
//! [`SwapError::is_invariant_violation`].

use thiserror::Error;

use crate::domain::{Amount, Shares, Timestamp};

/// Errors reported by a [`TokenLedger`](crate::traits::TokenLedger)
/// collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The owner does not hold enough tokens.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Current balance of the owner.
        have: Amount,
        /// Amount the transfer required.
        need: Amount,
    },

    /// The spender has not been approved for enough tokens.
    #[error("insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance {
        /// Current allowance granted to the spender.
        have: Amount,
        /// Amount the transfer required.
        need: Amount,
    },

    /// A privileged operation was attempted without the right capability.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// A balance or supply counter would overflow.
    #[error("ledger arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Errors produced by the swap and liquidity engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// The caller's deadline has already passed; nothing was touched.
    #[error("transaction expired: deadline {deadline}, now {now}")]
    Expired {
        /// Deadline supplied by the caller.
        deadline: Timestamp,
        /// Time observed when the operation started.
        now: Timestamp,
    },

    /// Swap path has the wrong length or does not match the pool pair.
    #[error("invalid swap path: {0}")]
    InvalidPath(&'static str),

    /// A token argument is not one of the pool's two tokens.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Pricing was attempted against a zero reserve.
    #[error("invalid reserves: pricing requires non-zero reserves")]
    InvalidReserves,

    /// The input amount of a swap or quote is zero.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The computed output is below the caller's floor.
    #[error("insufficient output amount: got {amount_out}, minimum {amount_out_min}")]
    InsufficientOutputAmount {
        /// Output the pool would pay.
        amount_out: Amount,
        /// Minimum output the caller accepts.
        amount_out_min: Amount,
    },

    /// The amount of token A used is below the caller's floor.
    #[error("insufficient token A amount: got {amount}, minimum {minimum}")]
    InsufficientAmountA {
        /// Amount of token A the operation would use.
        amount: Amount,
        /// Minimum amount the caller accepts.
        minimum: Amount,
    },

    /// The amount of token B used is below the caller's floor.
    #[error("insufficient token B amount: got {amount}, minimum {minimum}")]
    InsufficientAmountB {
        /// Amount of token B the operation would use.
        amount: Amount,
        /// Minimum amount the caller accepts.
        minimum: Amount,
    },

    /// The first deposit is too small to mint any shares.
    #[error("insufficient initial liquidity")]
    InsufficientInitialLiquidity,

    /// A deposit into a seeded pool would mint zero shares.
    #[error("deposit mints zero shares")]
    ZeroSharesMinted,

    /// The account holds fewer shares than requested.
    #[error("insufficient shares: balance {balance}, requested {requested}")]
    InsufficientShares {
        /// Shares currently held.
        balance: Shares,
        /// Shares the operation needed.
        requested: Shares,
    },

    /// A reserve outflow would drive a reserve below zero.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The shares held at the zero address back the minimum-liquidity lock
    /// and cannot be burned or moved.
    #[error("minimum liquidity is locked")]
    LockedLiquidity,

    /// The payout recipient cannot receive tokens from this pool.
    #[error("invalid recipient: {0}")]
    InvalidRecipient(&'static str),

    /// The token collaborator rejected a transfer.
    #[error("token transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),

    /// Arithmetic overflow in an intermediate computation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// The pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A configuration document could not be read or parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(String),

    /// Internal accounting invariant broken; indicates a logic defect.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}

impl SwapError {
    /// Returns `true` for logic defects as opposed to rejected input.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }

    /// Returns `true` if the error is a slippage-floor rejection.
    #[must_use]
    pub const fn is_slippage(&self) -> bool {
        matches!(
            self,
            Self::InsufficientOutputAmount { .. }
                | Self::InsufficientAmountA { .. }
                | Self::InsufficientAmountB { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SwapError>;
