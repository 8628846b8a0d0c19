//! LP share balances and total supply.
//!
//! # Invariant
//!
//! `total_supply == Σ balance_of(holder)` after every successful call.  Each
//! mutating method validates with the matching `check_*` first, so a failed
//! call leaves every balance untouched.

use std::collections::HashMap;

use crate::domain::{Address, Shares, TOKEN_DECIMALS};
use crate::error::{Result, SwapError};

/// Metadata of the LP share token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpMetadata {
    /// Human-readable name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal places; shares use the same precision as pooled tokens.
    pub decimals: u8,
}

impl LpMetadata {
    /// Metadata with the standard share precision.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: TOKEN_DECIMALS,
        }
    }
}

/// Fungible LP share accounting for one pool.
#[derive(Debug, Clone)]
pub struct ShareLedger {
    metadata: LpMetadata,
    total_supply: Shares,
    balances: HashMap<Address, Shares>,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new(metadata: LpMetadata) -> Self {
        Self {
            metadata,
            total_supply: Shares::ZERO,
            balances: HashMap::new(),
        }
    }

    /// LP token metadata.
    #[must_use]
    pub const fn metadata(&self) -> &LpMetadata {
        &self.metadata
    }

    /// Shares held by `account`.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> Shares {
        self.balances.get(account).copied().unwrap_or(Shares::ZERO)
    }

    /// Total shares outstanding.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.total_supply
    }

    /// Every holder with a non-zero balance.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Shares)> {
        self.balances.iter()
    }

    /// Checks that minting `amount` more shares would succeed.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroSharesMinted`] when `amount` is zero.
    /// - [`SwapError::Overflow`] if the total supply would overflow.
    pub fn check_mint(&self, amount: Shares) -> Result<()> {
        if amount.is_zero() {
            return Err(SwapError::ZeroSharesMinted);
        }
        self.total_supply
            .checked_add(&amount)
            .ok_or(SwapError::Overflow("share supply overflow"))?;
        Ok(())
    }

    /// Checks that `account` can give up `amount` shares.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientShares`] if the balance is smaller.
    pub fn check_burn(&self, account: &Address, amount: Shares) -> Result<()> {
        let balance = self.balance_of(account);
        if balance < amount {
            return Err(SwapError::InsufficientShares {
                balance,
                requested: amount,
            });
        }
        Ok(())
    }

    /// Creates `amount` shares for `account`.
    ///
    /// # Errors
    ///
    /// As [`check_mint`](Self::check_mint).
    pub fn mint(&mut self, account: Address, amount: Shares) -> Result<()> {
        self.check_mint(amount)?;
        // Bounded by total_supply, which check_mint just validated.
        let balance = self
            .balance_of(&account)
            .checked_add(&amount)
            .ok_or(SwapError::Overflow("share balance overflow"))?;
        let total = self
            .total_supply
            .checked_add(&amount)
            .ok_or(SwapError::Overflow("share supply overflow"))?;
        self.balances.insert(account, balance);
        self.total_supply = total;
        Ok(())
    }

    /// Destroys `amount` of `account`'s shares.
    ///
    /// # Errors
    ///
    /// As [`check_burn`](Self::check_burn).
    pub fn burn(&mut self, account: Address, amount: Shares) -> Result<()> {
        self.check_burn(&account, amount)?;
        let balance = self
            .balance_of(&account)
            .checked_sub(&amount)
            .ok_or(SwapError::InvariantViolation("burn exceeds checked balance"))?;
        let total = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(SwapError::InvariantViolation("burn exceeds total supply"))?;
        self.set_balance(account, balance);
        self.total_supply = total;
        Ok(())
    }

    /// Moves `amount` shares from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientShares`] if `from` holds fewer.
    pub fn transfer(&mut self, from: Address, to: Address, amount: Shares) -> Result<()> {
        self.check_burn(&from, amount)?;
        if from == to {
            return Ok(());
        }
        let debited = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(SwapError::InvariantViolation("transfer exceeds checked balance"))?;
        let credited = self
            .balance_of(&to)
            .checked_add(&amount)
            .ok_or(SwapError::InvariantViolation("share balance exceeds supply"))?;
        self.set_balance(from, debited);
        self.set_balance(to, credited);
        Ok(())
    }

    fn set_balance(&mut self, account: Address, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::from_low_u64(1)
    }

    fn bob() -> Address {
        Address::from_low_u64(2)
    }

    fn ledger_with(amount: u128) -> ShareLedger {
        let mut ledger = ShareLedger::new(LpMetadata::new("Token SimpleSwap", "TSS"));
        let Ok(()) = ledger.mint(alice(), Shares::new(amount)) else {
            panic!("mint failed");
        };
        ledger
    }

    fn sum(ledger: &ShareLedger) -> u128 {
        ledger.holders().map(|(_, s)| s.get()).sum()
    }

    // -- Mint ---------------------------------------------------------------

    #[test]
    fn mint_increases_balance_and_supply() {
        let ledger = ledger_with(100);
        assert_eq!(ledger.balance_of(&alice()), Shares::new(100));
        assert_eq!(ledger.total_supply(), Shares::new(100));
    }

    #[test]
    fn zero_mint_rejected() {
        let mut ledger = ledger_with(1);
        assert_eq!(
            ledger.mint(bob(), Shares::ZERO),
            Err(SwapError::ZeroSharesMinted)
        );
        assert_eq!(ledger.total_supply(), Shares::new(1));
    }

    #[test]
    fn supply_overflow_rejected() {
        let mut ledger = ledger_with(u128::MAX);
        assert!(matches!(
            ledger.mint(bob(), Shares::new(1)),
            Err(SwapError::Overflow(_))
        ));
        assert_eq!(ledger.balance_of(&bob()), Shares::ZERO);
    }

    // -- Burn ---------------------------------------------------------------

    #[test]
    fn burn_decreases_balance_and_supply() {
        let mut ledger = ledger_with(100);
        let Ok(()) = ledger.burn(alice(), Shares::new(40)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&alice()), Shares::new(60));
        assert_eq!(ledger.total_supply(), Shares::new(60));
    }

    #[test]
    fn burn_beyond_balance_rejected() {
        let mut ledger = ledger_with(10);
        let Err(e) = ledger.burn(alice(), Shares::new(11)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            SwapError::InsufficientShares {
                balance: Shares::new(10),
                requested: Shares::new(11),
            }
        );
        assert_eq!(ledger.total_supply(), Shares::new(10));
    }

    #[test]
    fn burn_everything_empties_ledger() {
        let mut ledger = ledger_with(10);
        assert!(ledger.burn(alice(), Shares::new(10)).is_ok());
        assert_eq!(ledger.total_supply(), Shares::ZERO);
        assert_eq!(ledger.holders().count(), 0);
    }

    // -- Transfer -----------------------------------------------------------

    #[test]
    fn transfer_preserves_supply() {
        let mut ledger = ledger_with(100);
        let Ok(()) = ledger.transfer(alice(), bob(), Shares::new(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&alice()), Shares::new(70));
        assert_eq!(ledger.balance_of(&bob()), Shares::new(30));
        assert_eq!(sum(&ledger), ledger.total_supply().get());
    }

    #[test]
    fn transfer_beyond_balance_rejected() {
        let mut ledger = ledger_with(5);
        assert!(ledger.transfer(alice(), bob(), Shares::new(6)).is_err());
        assert_eq!(ledger.balance_of(&bob()), Shares::ZERO);
    }

    #[test]
    fn self_transfer_is_noop() {
        let mut ledger = ledger_with(5);
        assert!(ledger.transfer(alice(), alice(), Shares::new(5)).is_ok());
        assert_eq!(ledger.balance_of(&alice()), Shares::new(5));
    }

    #[test]
    fn metadata_defaults_to_token_precision() {
        let ledger = ledger_with(1);
        assert_eq!(ledger.metadata().name, "Token SimpleSwap");
        assert_eq!(ledger.metadata().symbol, "TSS");
        assert_eq!(ledger.metadata().decimals, 18);
    }
}
