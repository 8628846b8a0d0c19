//! Reference in-memory fungible-token ledger.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{Address, Amount, Token, TOKEN_DECIMALS};
use crate::error::LedgerError;
use crate::traits::TokenLedger;

#[derive(Debug)]
struct TokenBook {
    name: String,
    symbol: String,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
}

impl TokenBook {
    fn balance(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn check_balance(&self, owner: &Address, amount: Amount) -> Result<(), LedgerError> {
        let have = self.balance(owner);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        Ok(())
    }

    fn check_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let have = self.allowance(owner, spender);
        if have < amount {
            return Err(LedgerError::InsufficientAllowance { have, need: amount });
        }
        Ok(())
    }

    /// Moves `amount` after computing both new balances, so a failure
    /// leaves the book untouched.
    fn move_balance(
        &mut self,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.check_balance(&owner, amount)?;
        if owner == recipient {
            return Ok(());
        }
        let from = self
            .balance(&owner)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                have: self.balance(&owner),
                need: amount,
            })?;
        let to = self
            .balance(&recipient)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow("recipient balance overflow"))?;
        self.balances.insert(owner, from);
        self.balances.insert(recipient, to);
        Ok(())
    }
}

/// Proof of the right to mint one specific [`InMemoryToken`].
///
/// Only [`InMemoryToken::create`] hands one out, and it authorizes minting on
/// that token alone.
#[derive(Debug)]
pub struct MintCapability {
    book: Arc<Mutex<TokenBook>>,
}

/// Cloneable handle to a shared in-memory token ledger.
///
/// Clones see the same balances, so a test can give one handle to a pool and
/// keep another to fund wallets and inspect results.  Allowances equal to
/// [`Amount::MAX`] are treated as unlimited and never decrease.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Amount};
/// use simple_swap::token::InMemoryToken;
/// use simple_swap::traits::TokenLedger;
///
/// let alice = Address::from_low_u64(1);
/// let (token, minter) = InMemoryToken::create(Address::from_low_u64(0xa), "Token A", "TKA");
/// token.mint(&minter, alice, Amount::new(100)).expect("mint");
/// assert_eq!(token.balance_of(alice), Amount::new(100));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryToken {
    token: Token,
    book: Arc<Mutex<TokenBook>>,
}

impl InMemoryToken {
    /// Creates an empty ledger at `address` and the capability to mint on it.
    pub fn create(
        address: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> (Self, MintCapability) {
        let book = Arc::new(Mutex::new(TokenBook {
            name: name.into(),
            symbol: symbol.into(),
            total_supply: Amount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }));
        let cap = MintCapability {
            book: Arc::clone(&book),
        };
        (
            Self {
                token: Token::new(address),
                book,
            },
            cap,
        )
    }

    /// Creates `amount` new tokens for `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Unauthorized`] if `cap` belongs to another token.
    /// - [`LedgerError::Overflow`] if the supply or balance would overflow.
    pub fn mint(
        &self,
        cap: &MintCapability,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if !Arc::ptr_eq(&cap.book, &self.book) {
            return Err(LedgerError::Unauthorized(
                "mint capability belongs to another token",
            ));
        }
        let mut book = self.book.lock();
        let supply = book
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow("total supply overflow"))?;
        let balance = book
            .balance(&to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow("balance overflow"))?;
        book.total_supply = supply;
        book.balances.insert(to, balance);
        debug!(token = %self.token, %to, %amount, "minted");
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s tokens to `amount`.
    pub fn approve(&self, owner: Address, spender: Address, amount: Amount) {
        self.book.lock().allowances.insert((owner, spender), amount);
    }

    /// Remaining allowance `owner` granted to `spender`.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.book.lock().allowance(&owner, &spender)
    }

    /// Total tokens in existence.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.book.lock().total_supply
    }

    /// Human-readable token name.
    #[must_use]
    pub fn name(&self) -> String {
        self.book.lock().name.clone()
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> String {
        self.book.lock().symbol.clone()
    }

    /// Decimal places (always 18).
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }
}

impl TokenLedger for InMemoryToken {
    fn token(&self) -> Token {
        self.token
    }

    fn balance_of(&self, account: Address) -> Amount {
        self.book.lock().balance(&account)
    }

    fn transfer(
        &self,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.book.lock().move_balance(owner, recipient, amount)
    }

    fn transfer_from(
        &self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut book = self.book.lock();
        book.check_allowance(&owner, &spender, amount)?;
        book.move_balance(owner, recipient, amount)?;
        let allowance = book.allowance(&owner, &spender);
        if allowance != Amount::MAX {
            let remaining = allowance.checked_sub(&amount).unwrap_or(Amount::ZERO);
            book.allowances.insert((owner, spender), remaining);
        }
        Ok(())
    }

    fn can_transfer(&self, owner: Address, amount: Amount) -> Result<(), LedgerError> {
        self.book.lock().check_balance(&owner, amount)
    }

    fn can_transfer_from(
        &self,
        spender: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let book = self.book.lock();
        book.check_allowance(&owner, &spender, amount)?;
        book.check_balance(&owner, amount)
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

    fn funded(amount: u128) -> InMemoryToken {
        let (token, cap) = InMemoryToken::create(Address::from_low_u64(0xa), "Token A", "TKA");
        let Ok(()) = token.mint(&cap, alice(), Amount::new(amount)) else {
            panic!("mint failed");
        };
        token
    }

    // -- Minting ------------------------------------------------------------

    #[test]
    fn mint_credits_balance_and_supply() {
        let token = funded(500);
        assert_eq!(token.balance_of(alice()), Amount::new(500));
        assert_eq!(token.total_supply(), Amount::new(500));
    }

    #[test]
    fn foreign_capability_is_rejected() {
        let token = funded(1);
        let (_, other_cap) = InMemoryToken::create(Address::from_low_u64(0xa), "Fake", "FAKE");
        let Err(e) = token.mint(&other_cap, bob(), Amount::new(1)) else {
            panic!("expected Err");
        };
        assert!(matches!(e, LedgerError::Unauthorized(_)));
        assert_eq!(token.total_supply(), Amount::new(1));
    }

    #[test]
    fn mint_overflow_leaves_book_unchanged() {
        let (token, cap) = InMemoryToken::create(Address::from_low_u64(0xa), "A", "A");
        let Ok(()) = token.mint(&cap, alice(), Amount::MAX) else {
            panic!("mint failed");
        };
        let Err(e) = token.mint(&cap, bob(), Amount::new(1)) else {
            panic!("expected Err");
        };
        assert_eq!(e, LedgerError::Overflow("total supply overflow"));
        assert_eq!(token.balance_of(bob()), Amount::ZERO);
        assert_eq!(token.total_supply(), Amount::MAX);
    }

    // -- Transfers ----------------------------------------------------------

    #[test]
    fn transfer_moves_balance() {
        let token = funded(100);
        let Ok(()) = token.transfer(alice(), bob(), Amount::new(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(token.balance_of(alice()), Amount::new(70));
        assert_eq!(token.balance_of(bob()), Amount::new(30));
    }

    #[test]
    fn transfer_rejects_overdraft() {
        let token = funded(10);
        let Err(e) = token.transfer(alice(), bob(), Amount::new(11)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            LedgerError::InsufficientBalance {
                have: Amount::new(10),
                need: Amount::new(11),
            }
        );
        assert_eq!(token.balance_of(alice()), Amount::new(10));
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let token = funded(10);
        assert!(token.transfer(alice(), alice(), Amount::new(10)).is_ok());
        assert_eq!(token.balance_of(alice()), Amount::new(10));
    }

    // -- Allowances ---------------------------------------------------------

    #[test]
    fn transfer_from_consumes_allowance() {
        let token = funded(100);
        token.approve(alice(), bob(), Amount::new(40));
        let Ok(()) = token.transfer_from(bob(), alice(), bob(), Amount::new(25)) else {
            panic!("expected Ok");
        };
        assert_eq!(token.allowance(alice(), bob()), Amount::new(15));
        assert_eq!(token.balance_of(bob()), Amount::new(25));
    }

    #[test]
    fn transfer_from_requires_allowance() {
        let token = funded(100);
        let Err(e) = token.transfer_from(bob(), alice(), bob(), Amount::new(1)) else {
            panic!("expected Err");
        };
        assert!(matches!(e, LedgerError::InsufficientAllowance { .. }));
        assert_eq!(token.balance_of(alice()), Amount::new(100));
    }

    #[test]
    fn unlimited_allowance_never_decreases() {
        let token = funded(100);
        token.approve(alice(), bob(), Amount::MAX);
        assert!(token.transfer_from(bob(), alice(), bob(), Amount::new(60)).is_ok());
        assert_eq!(token.allowance(alice(), bob()), Amount::MAX);
    }

    #[test]
    fn preflight_matches_transfer_outcome() {
        let token = funded(5);
        assert!(token.can_transfer(alice(), Amount::new(5)).is_ok());
        assert!(token.can_transfer(alice(), Amount::new(6)).is_err());
        token.approve(alice(), bob(), Amount::new(3));
        assert!(token.can_transfer_from(bob(), alice(), Amount::new(3)).is_ok());
        assert!(token.can_transfer_from(bob(), alice(), Amount::new(4)).is_err());
        assert_eq!(token.balance_of(alice()), Amount::new(5));
    }

    #[test]
    fn metadata() {
        let token = funded(0);
        assert_eq!(token.name(), "Token A");
        assert_eq!(token.symbol(), "TKA");
        assert_eq!(token.decimals(), 18);
    }
}
