//! The SimpleSwap pool engine.
//!
//! [`SimpleSwap`] owns one [`Pool`] record (reserves and LP shares), handles
//! to the two token ledgers, the pool's own account on those ledgers and a
//! [`Clock`].  Every mutating operation runs the same pipeline:
//!
//! 1. deadline check, before anything else;
//! 2. validation and planning against a snapshot (no writes);
//! 3. preview of the reserve and share changes;
//! 4. token [`Settlement`] (preflight, pulls, pushes);
//! 5. commit of reserves and shares.
//!
//! A failure in steps 1 to 4 leaves the pool and both ledgers exactly as
//! they were.  Step 5 cannot fail for a plan that passed step 3; if it does
//! the error is an [`SwapError::InvariantViolation`].

use tracing::{error, info, warn};

use crate::config::PoolConfig;
use crate::domain::{
    AddLiquidity, AddLiquidityReceipt, Address, Amount, FeeRate, Price, RemoveLiquidity,
    RemoveLiquidityReceipt, Shares, Side, SwapReceipt, SwapRequest, Token, TokenPair,
};
use crate::error::{Result, SwapError};
use crate::math::CheckedArithmetic;
use crate::pools::deadline::DeadlineGuard;
use crate::pools::liquidity::{DepositBounds, LiquidityManager, PoolView};
use crate::pools::pricing;
use crate::pools::reserves::{deltas_for, ReserveDelta, ReserveLedger, Reserves};
use crate::pools::settlement::Settlement;
use crate::pools::share_ledger::{LpMetadata, ShareLedger};
use crate::pools::swap::SwapEngine;
use crate::token::InMemoryToken;
use crate::traits::{Clock, LiquidityPool, SwapPool, SystemClock, TokenLedger};

/// Mutable state of one pool: reserves and LP shares.
///
/// # Invariant
///
/// `reserve_a == 0 ⇔ reserve_b == 0 ⇔ total_supply == 0`.
#[derive(Debug, Clone)]
pub struct Pool {
    reserves: ReserveLedger,
    shares: ShareLedger,
}

impl Pool {
    fn new(metadata: LpMetadata) -> Self {
        Self {
            reserves: ReserveLedger::new(),
            shares: ShareLedger::new(metadata),
        }
    }

    /// The reserve ledger.
    #[must_use]
    pub const fn reserves(&self) -> &ReserveLedger {
        &self.reserves
    }

    /// The LP share ledger.
    #[must_use]
    pub const fn shares(&self) -> &ShareLedger {
        &self.shares
    }

    /// Returns `true` if the pool holds no liquidity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shares.total_supply().is_zero()
    }
}

/// A two-token constant-product pool.
///
/// Generic over the token ledger `L` and time source `C`; defaults suit
/// in-process use with [`InMemoryToken`] and the system clock.
///
/// `SimpleSwap` requires `&mut self` for every mutation.  Wrap it in a
/// [`SharedSwap`](crate::pools::SharedSwap) to share it between threads.
///
/// # Examples
///
/// ```
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::{AddLiquidity, Address, Amount, Timestamp, TokenPair};
/// use simple_swap::pools::SimpleSwap;
/// use simple_swap::token::InMemoryToken;
/// use simple_swap::traits::{ManualClock, TokenLedger};
///
/// let pool_account = Address::from_low_u64(0xfee);
/// let alice = Address::from_low_u64(1);
/// let (tka, mint_a) = InMemoryToken::create(Address::from_low_u64(0xa), "Token A", "TKA");
/// let (tkb, mint_b) = InMemoryToken::create(Address::from_low_u64(0xb), "Token B", "TKB");
/// tka.mint(&mint_a, alice, Amount::new(1_000)).expect("mint");
/// tkb.mint(&mint_b, alice, Amount::new(1_000)).expect("mint");
/// tka.approve(alice, pool_account, Amount::MAX);
/// tkb.approve(alice, pool_account, Amount::MAX);
///
/// let pair = TokenPair::new(tka.token(), tkb.token()).expect("pair");
/// let clock = ManualClock::new(Timestamp::from_secs(0));
/// let mut pool = SimpleSwap::new(PoolConfig::new(pair), pool_account, tka.clone(), tkb.clone(), clock)
///     .expect("pool");
///
/// let receipt = pool
///     .add_liquidity(alice, &AddLiquidity {
///         token_a: tka.token(),
///         token_b: tkb.token(),
///         amount_a_desired: Amount::new(100),
///         amount_b_desired: Amount::new(200),
///         amount_a_min: Amount::ZERO,
///         amount_b_min: Amount::ZERO,
///         recipient: alice,
///         deadline: Timestamp::from_secs(60),
///     })
///     .expect("deposit");
/// assert_eq!(receipt.shares_minted.get(), 141);
/// ```
#[derive(Debug)]
pub struct SimpleSwap<L = InMemoryToken, C = SystemClock> {
    config: PoolConfig,
    account: Address,
    ledger_a: L,
    ledger_b: L,
    clock: C,
    pool: Pool,
    liquidity: LiquidityManager,
    swaps: SwapEngine,
}

impl<L: TokenLedger, C: Clock> SimpleSwap<L, C> {
    /// Creates an empty pool.
    ///
    /// `account` is the pool's own identity on both ledgers: it holds the
    /// reserves and is the spender callers approve.  The ledgers may be
    /// passed in either order.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidConfiguration`] if `config` fails validation.
    /// - [`SwapError::InvalidToken`] if the ledgers do not track exactly the
    ///   configured pair.
    pub fn new(
        config: PoolConfig,
        account: Address,
        ledger_x: L,
        ledger_y: L,
        clock: C,
    ) -> Result<Self> {
        config.validate()?;
        let pair = *config.token_pair();
        let (ledger_a, ledger_b) = if pair.is_reversed(&ledger_x.token(), &ledger_y.token())? {
            (ledger_y, ledger_x)
        } else {
            (ledger_x, ledger_y)
        };
        let metadata = LpMetadata::new(config.lp_name(), config.lp_symbol());
        info!(
            token_a = %pair.first(),
            token_b = %pair.second(),
            fee = %config.fee_rate(),
            %account,
            "pool created"
        );
        Ok(Self {
            liquidity: LiquidityManager::new(config.minimum_liquidity()),
            swaps: SwapEngine::new(pair, config.fee_rate()),
            pool: Pool::new(metadata),
            config,
            account,
            ledger_a,
            ledger_b,
            clock,
        })
    }

    // -- Accessors ----------------------------------------------------------

    /// The configuration the pool was built from.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool's own account on both token ledgers.
    #[must_use]
    pub const fn account(&self) -> Address {
        self.account
    }

    /// The pool record.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// The time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The ledger of `token`, if it is one of the pool's tokens.
    #[must_use]
    pub fn ledger(&self, token: &Token) -> Option<&L> {
        self.config
            .token_pair()
            .side_of(token)
            .map(|side| self.ledger_on(side))
    }

    const fn ledger_on(&self, side: Side) -> &L {
        match side {
            Side::A => &self.ledger_a,
            Side::B => &self.ledger_b,
        }
    }

    /// The canonically ordered pair.
    #[must_use]
    pub const fn token_pair(&self) -> TokenPair {
        *self.config.token_pair()
    }

    /// The swap fee.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.config.fee_rate()
    }

    /// Current `(reserve_a, reserve_b)` in canonical order.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        self.pool.reserves.current()
    }

    /// Reserves of `token_x` and `token_y`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] unless `{token_x, token_y}` is the
    /// pool pair.
    pub fn reserves_for(&self, token_x: &Token, token_y: &Token) -> Result<(Amount, Amount)> {
        let reversed = self.token_pair().is_reversed(token_x, token_y)?;
        let (a, b) = self.reserves();
        Ok(if reversed { (b, a) } else { (a, b) })
    }

    /// Shares held by `account`.
    #[must_use]
    pub fn balance_of(&self, account: Address) -> Shares {
        self.pool.shares.balance_of(&account)
    }

    /// Total shares outstanding.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.pool.shares.total_supply()
    }

    /// LP token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.pool.shares.metadata().name
    }

    /// LP token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.pool.shares.metadata().symbol
    }

    /// LP token decimals.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.pool.shares.metadata().decimals
    }

    // -- Pricing ------------------------------------------------------------

    /// Spot price of `token_x` in units of `token_y`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidReserves`] if the pool is empty (checked first).
    /// - [`SwapError::InvalidToken`] if either token is outside the pair.
    pub fn get_price(&self, token_x: &Token, token_y: &Token) -> Result<Price> {
        let reserves = self.pool.reserves.snapshot();
        if reserves.has_zero() {
            return Err(SwapError::InvalidReserves);
        }
        let pair = self.token_pair();
        let side_x = pair
            .side_of(token_x)
            .ok_or(SwapError::InvalidToken("token_x is not part of the pool pair"))?;
        let side_y = pair
            .side_of(token_y)
            .ok_or(SwapError::InvalidToken("token_y is not part of the pool pair"))?;
        if side_x == side_y {
            return Ok(Price::ONE);
        }
        pricing::spot_price(reserves.get(side_x), reserves.get(side_y))
    }

    /// [`pricing::get_amount_out`] at this pool's fee.
    ///
    /// # Errors
    ///
    /// As [`pricing::get_amount_out`].
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        pricing::get_amount_out(amount_in, reserve_in, reserve_out, self.fee_rate())
    }

    /// [`pricing::get_amount_in`] at this pool's fee.
    ///
    /// # Errors
    ///
    /// As [`pricing::get_amount_in`].
    pub fn get_amount_in(
        &self,
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        pricing::get_amount_in(amount_out, reserve_in, reserve_out, self.fee_rate())
    }

    // -- Liquidity ----------------------------------------------------------

    /// Deposits both tokens from `caller` and mints shares to
    /// `request.recipient`.
    ///
    /// `caller` must have approved the pool account on both ledgers.
    ///
    /// # Errors
    ///
    /// [`SwapError::Expired`], [`SwapError::InvalidToken`],
    /// [`SwapError::InsufficientInitialLiquidity`],
    /// [`SwapError::InsufficientAmountA`], [`SwapError::InsufficientAmountB`],
    /// [`SwapError::ZeroSharesMinted`] or [`SwapError::TransferFailed`].
    pub fn add_liquidity(
        &mut self,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityReceipt> {
        self.try_add_liquidity(caller, request)
            .map_err(|e| report("add_liquidity", e))
    }

    fn try_add_liquidity(
        &mut self,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityReceipt> {
        DeadlineGuard::check(request.deadline, self.clock.now())?;
        let reversed = self
            .token_pair()
            .is_reversed(&request.token_a, &request.token_b)?;

        let plan = self.liquidity.plan_add(
            self.view(reversed),
            DepositBounds {
                desired_x: request.amount_a_desired,
                desired_y: request.amount_b_desired,
                min_x: request.amount_a_min,
                min_y: request.amount_b_min,
            },
        )?;
        let (amount_a, amount_b) = canonical(reversed, plan.amount_x, plan.amount_y);
        self.pool
            .reserves
            .preview_delta(ReserveDelta::Credit(amount_a), ReserveDelta::Credit(amount_b))?;
        self.pool
            .shares
            .check_mint(plan.shares.safe_add(&plan.locked)?)?;

        Settlement::new(self.account)
            .pull(&self.ledger_a, caller, amount_a)
            .pull(&self.ledger_b, caller, amount_b)
            .execute()?;

        self.pool
            .reserves
            .apply_delta(ReserveDelta::Credit(amount_a), ReserveDelta::Credit(amount_b))
            .map_err(commit_failed("reserve credit after deposit"))?;
        if !plan.locked.is_zero() {
            self.pool
                .shares
                .mint(Address::ZERO, plan.locked)
                .map_err(commit_failed("minimum liquidity mint"))?;
        }
        self.pool
            .shares
            .mint(request.recipient, plan.shares)
            .map_err(commit_failed("share mint after deposit"))?;

        let (reserve_a, reserve_b) = self.reserves();
        info!(
            %caller,
            recipient = %request.recipient,
            %amount_a,
            %amount_b,
            shares = %plan.shares,
            %reserve_a,
            %reserve_b,
            "liquidity added"
        );
        Ok(AddLiquidityReceipt {
            amount_a: plan.amount_x,
            amount_b: plan.amount_y,
            shares_minted: plan.shares,
        })
    }

    /// Burns `request.shares` of `caller`'s shares and pays both tokens to
    /// `request.recipient`.
    ///
    /// # Errors
    ///
    /// [`SwapError::Expired`], [`SwapError::InvalidToken`],
    /// [`SwapError::InsufficientShares`], [`SwapError::InsufficientAmountA`],
    /// [`SwapError::InsufficientAmountB`], [`SwapError::LockedLiquidity`],
    /// [`SwapError::InvalidRecipient`] or [`SwapError::TransferFailed`].
    pub fn remove_liquidity(
        &mut self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityReceipt> {
        self.try_remove_liquidity(caller, request)
            .map_err(|e| report("remove_liquidity", e))
    }

    fn try_remove_liquidity(
        &mut self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityReceipt> {
        DeadlineGuard::check(request.deadline, self.clock.now())?;
        if caller == Address::ZERO {
            return Err(SwapError::LockedLiquidity);
        }
        self.ensure_payable(request.recipient)?;
        let reversed = self
            .token_pair()
            .is_reversed(&request.token_a, &request.token_b)?;

        let balance = self.balance_of(caller);
        if request.shares.is_zero() || request.shares > self.total_supply() {
            return Err(SwapError::InsufficientShares {
                balance,
                requested: request.shares,
            });
        }
        let plan = self.liquidity.plan_remove(
            self.view(reversed),
            request.shares,
            request.amount_a_min,
            request.amount_b_min,
        )?;
        self.pool.shares.check_burn(&caller, request.shares)?;
        let (amount_a, amount_b) = canonical(reversed, plan.amount_x, plan.amount_y);
        self.pool
            .reserves
            .preview_delta(ReserveDelta::Debit(amount_a), ReserveDelta::Debit(amount_b))?;

        Settlement::new(self.account)
            .push(&self.ledger_a, request.recipient, amount_a)
            .push(&self.ledger_b, request.recipient, amount_b)
            .execute()?;

        self.pool
            .shares
            .burn(caller, request.shares)
            .map_err(commit_failed("share burn after withdrawal"))?;
        self.pool
            .reserves
            .apply_delta(ReserveDelta::Debit(amount_a), ReserveDelta::Debit(amount_b))
            .map_err(commit_failed("reserve debit after withdrawal"))?;

        let (reserve_a, reserve_b) = self.reserves();
        info!(
            %caller,
            recipient = %request.recipient,
            shares = %request.shares,
            %amount_a,
            %amount_b,
            %reserve_a,
            %reserve_b,
            "liquidity removed"
        );
        Ok(RemoveLiquidityReceipt {
            amount_a: plan.amount_x,
            amount_b: plan.amount_y,
        })
    }

    /// Moves LP shares between holders.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientShares`] if `from` holds fewer than
    /// `amount`, or [`SwapError::LockedLiquidity`] if `from` is the zero
    /// address.
    pub fn transfer_shares(&mut self, from: Address, to: Address, amount: Shares) -> Result<()> {
        if from == Address::ZERO {
            return Err(report("transfer_shares", SwapError::LockedLiquidity));
        }
        self.pool
            .shares
            .transfer(from, to, amount)
            .map_err(|e| report("transfer_shares", e))?;
        info!(%from, %to, %amount, "shares transferred");
        Ok(())
    }

    // -- Swaps --------------------------------------------------------------

    /// Swaps exactly `request.amount_in` of `path[0]` from `caller` for
    /// `path[1]` paid to `request.recipient`.
    ///
    /// The full input, fee included, stays in the pool, so the reserve
    /// product never decreases.
    ///
    /// # Errors
    ///
    /// [`SwapError::Expired`], [`SwapError::InvalidPath`],
    /// [`SwapError::InvalidReserves`], [`SwapError::InsufficientInputAmount`],
    /// [`SwapError::InsufficientOutputAmount`],
    /// [`SwapError::InvalidRecipient`] or [`SwapError::TransferFailed`].
    pub fn swap_exact_tokens_for_tokens(
        &mut self,
        caller: Address,
        request: &SwapRequest,
    ) -> Result<SwapReceipt> {
        self.try_swap(caller, request)
            .map_err(|e| report("swap_exact_tokens_for_tokens", e))
    }

    fn try_swap(&mut self, caller: Address, request: &SwapRequest) -> Result<SwapReceipt> {
        DeadlineGuard::check(request.deadline, self.clock.now())?;
        self.ensure_payable(request.recipient)?;
        let before = self.pool.reserves.snapshot();
        let plan = self.swaps.plan(before, request)?;
        let side_out = plan.side_in.flip();

        let (delta_a, delta_b) = deltas_for(
            plan.side_in,
            ReserveDelta::Credit(plan.amount_in),
            ReserveDelta::Debit(plan.amount_out),
        );
        let after = self.pool.reserves.preview_delta(delta_a, delta_b)?;
        ensure_product_kept(&before, &after)?;

        Settlement::new(self.account)
            .pull(self.ledger_on(plan.side_in), caller, plan.amount_in)
            .push(self.ledger_on(side_out), request.recipient, plan.amount_out)
            .execute()?;

        self.pool
            .reserves
            .apply_delta(delta_a, delta_b)
            .map_err(commit_failed("reserve update after swap"))?;

        let pair = self.token_pair();
        let receipt = SwapReceipt {
            token_in: pair.token(plan.side_in),
            token_out: pair.token(side_out),
            amount_in: plan.amount_in,
            amount_out: plan.amount_out,
            fee: plan.fee,
        };
        info!(
            %caller,
            recipient = %request.recipient,
            token_in = %receipt.token_in,
            token_out = %receipt.token_out,
            amount_in = %receipt.amount_in,
            amount_out = %receipt.amount_out,
            fee = %receipt.fee,
            "swap executed"
        );
        Ok(receipt)
    }

    /// A payout to the pool's own account would leave the tokens outside
    /// the reserves with no way to recover them.
    fn ensure_payable(&self, recipient: Address) -> Result<()> {
        if recipient == self.account {
            return Err(SwapError::InvalidRecipient("recipient is the pool account"));
        }
        Ok(())
    }

    /// Pool state oriented to a caller's token order.
    fn view(&self, reversed: bool) -> PoolView {
        let (a, b) = self.reserves();
        let (reserve_x, reserve_y) = if reversed { (b, a) } else { (a, b) };
        PoolView {
            reserve_x,
            reserve_y,
            total_shares: self.total_supply(),
        }
    }
}

/// Maps caller-ordered amounts to canonical `(a, b)`.
const fn canonical(reversed: bool, x: Amount, y: Amount) -> (Amount, Amount) {
    if reversed {
        (y, x)
    } else {
        (x, y)
    }
}

fn ensure_product_kept(before: &Reserves, after: &Reserves) -> Result<()> {
    if after.product() < before.product() {
        return Err(SwapError::InvariantViolation(
            "constant product decreased across swap",
        ));
    }
    Ok(())
}

fn commit_failed(context: &'static str) -> impl FnOnce(SwapError) -> SwapError {
    move |cause| {
        error!(error = %cause, context, "commit failed after settlement");
        SwapError::InvariantViolation(context)
    }
}

/// Logs a failed operation at a level matching its cause.
fn report(operation: &'static str, err: SwapError) -> SwapError {
    if err.is_invariant_violation() {
        error!(operation, error = %err, "pool invariant violated");
    } else {
        warn!(operation, error = %err, "request rejected");
    }
    err
}

impl<L: TokenLedger, C: Clock> SwapPool for SimpleSwap<L, C> {
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
        Self::get_amount_out(self, amount_in, reserve_in, reserve_out)
    }

    fn get_amount_in(
        &self,
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        Self::get_amount_in(self, amount_out, reserve_in, reserve_out)
    }

    fn token_pair(&self) -> TokenPair {
        Self::token_pair(self)
    }

    fn fee_rate(&self) -> FeeRate {
        Self::fee_rate(self)
    }

    fn reserves(&self) -> (Amount, Amount) {
        Self::reserves(self)
    }
}

impl<L: TokenLedger, C: Clock> LiquidityPool for SimpleSwap<L, C> {
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
