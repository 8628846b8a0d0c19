//! Thread-safe handle to a [`SimpleSwap`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{
    AddLiquidity, AddLiquidityReceipt, Address, Amount, FeeRate, Price, RemoveLiquidity,
    RemoveLiquidityReceipt, Shares, SwapReceipt, SwapRequest, Token, TokenPair,
};
use crate::error::Result;
use crate::pools::engine::SimpleSwap;
use crate::token::InMemoryToken;
use crate::traits::{Clock, LiquidityPool, SwapPool, SystemClock, TokenLedger};

/// Cloneable, `Send + Sync` handle to one pool.
///
/// Every operation holds the pool lock for its whole duration, so
/// operations on the same pool are serialized and each one observes the
/// state left by the previous one.  Token ledgers are locked inside the
/// pool lock, never the other way round.
#[derive(Debug)]
pub struct SharedSwap<L = InMemoryToken, C = SystemClock> {
    inner: Arc<Mutex<SimpleSwap<L, C>>>,
}

impl<L, C> Clone for SharedSwap<L, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: TokenLedger, C: Clock> SharedSwap<L, C> {
    /// Wraps `pool` for shared use.
    #[must_use]
    pub fn new(pool: SimpleSwap<L, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Runs `f` with exclusive access to the pool.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut SimpleSwap<L, C>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`SimpleSwap::add_liquidity`].
    ///
    /// # Errors
    ///
    /// As [`SimpleSwap::add_liquidity`].
    pub fn add_liquidity(
        &self,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityReceipt> {
        self.inner.lock().add_liquidity(caller, request)
    }

    /// See [`SimpleSwap::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// As [`SimpleSwap::remove_liquidity`].
    pub fn remove_liquidity(
        &self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityReceipt> {
        self.inner.lock().remove_liquidity(caller, request)
    }

    /// See [`SimpleSwap::swap_exact_tokens_for_tokens`].
    ///
    /// # Errors
    ///
    /// As [`SimpleSwap::swap_exact_tokens_for_tokens`].
    pub fn swap_exact_tokens_for_tokens(
        &self,
        caller: Address,
        request: &SwapRequest,
    ) -> Result<SwapReceipt> {
        self.inner
            .lock()
            .swap_exact_tokens_for_tokens(caller, request)
    }

    /// See [`SimpleSwap::transfer_shares`].
    ///
    /// # Errors
    ///
    /// As [`SimpleSwap::transfer_shares`].
    pub fn transfer_shares(&self, from: Address, to: Address, amount: Shares) -> Result<()> {
        self.inner.lock().transfer_shares(from, to, amount)
    }

    /// See [`SimpleSwap::get_price`].
    ///
    /// # Errors
    ///
    /// As [`SimpleSwap::get_price`].
    pub fn get_price(&self, token_x: &Token, token_y: &Token) -> Result<Price> {
        self.inner.lock().get_price(token_x, token_y)
    }

    /// Current canonical reserves.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        self.inner.lock().reserves()
    }

    /// Shares held by `account`.
    #[must_use]
    pub fn balance_of(&self, account: Address) -> Shares {
        self.inner.lock().balance_of(account)
    }

    /// Total shares outstanding.
    #[must_use]
    pub fn total_supply(&self) -> Shares {
        self.inner.lock().total_supply()
    }
}

impl<L: TokenLedger, C: Clock> SwapPool for SharedSwap<L, C> {
    fn swap_exact_tokens_for_tokens(
        &mut self,
        caller: Address,
        request: &SwapRequest,
    ) -> Result<SwapReceipt> {
        Self::swap_exact_tokens_for_tokens(self, caller, request)
    }

    fn get_price(&self, token_x: &Token, token_y: &Token) -> Result<Price> {
        Self::get_price(self, token_x, token_y)
    }

    fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        self.inner
            .lock()
            .get_amount_out(amount_in, reserve_in, reserve_out)
    }

    fn get_amount_in(
        &self,
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        self.inner
            .lock()
            .get_amount_in(amount_out, reserve_in, reserve_out)
    }

    fn token_pair(&self) -> TokenPair {
        self.inner.lock().token_pair()
    }

    fn fee_rate(&self) -> FeeRate {
        self.inner.lock().fee_rate()
    }

    fn reserves(&self) -> (Amount, Amount) {
        Self::reserves(self)
    }
}

impl<L: TokenLedger, C: Clock> LiquidityPool for SharedSwap<L, C> {
    fn add_liquidity(
        &mut self,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityReceipt> {
        Self::add_liquidity(self, caller, request)
    }

    fn remove_liquidity(
        &mut self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityReceipt> {
        Self::remove_liquidity(self, caller, request)
    }

    fn transfer_shares(&mut self, from: Address, to: Address, amount: Shares) -> Result<()> {
        Self::transfer_shares(self, from, to, amount)
    }

    fn balance_of(&self, account: Address) -> Shares {
        Self::balance_of(self, account)
    }

    fn total_supply(&self) -> Shares {
        Self::total_supply(self)
    }
}
