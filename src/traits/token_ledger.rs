//! Collaborator seam for the two underlying token ledgers.
//!
//! The pool never holds balances itself; every token movement goes through a
//! [`TokenLedger`].  Handles take `&self` because a ledger is shared state
//! owned outside the pool (other pools and wallets move the same tokens).
//!
//! # Preflight contract
//!
//! [`TokenLedger::can_transfer`] and [`TokenLedger::can_transfer_from`] must
//! report exactly the error the corresponding transfer would return at that
//! moment, without side effects.  The pool preflights every transfer of an
//! operation before executing any of them.

use crate::domain::{Address, Amount, Token};
use crate::error::LedgerError;

/// A fungible-token ledger the pool can move balances on.
pub trait TokenLedger {
    /// Identity of the token this ledger tracks.
    fn token(&self) -> Token;

    /// Balance held by `account`.
    fn balance_of(&self, account: Address) -> Amount;

    /// Moves `amount` from `owner` to `recipient` on `owner`'s authority.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] or
    /// [`LedgerError::Overflow`].
    fn transfer(
        &self,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` from `owner` to `recipient` using an allowance
    /// `owner` granted to `spender`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientAllowance`],
    /// [`LedgerError::InsufficientBalance`] or [`LedgerError::Overflow`].
    fn transfer_from(
        &self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Side-effect-free check that `transfer(owner, _, amount)` would succeed.
    ///
    /// # Errors
    ///
    /// The error the transfer would return.
    fn can_transfer(&self, owner: Address, amount: Amount) -> Result<(), LedgerError>;

    /// Side-effect-free check that `transfer_from(spender, owner, _, amount)`
    /// would succeed.
    ///
    /// # Errors
    ///
    /// The error the transfer would return.
    fn can_transfer_from(
        &self,
        spender: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
