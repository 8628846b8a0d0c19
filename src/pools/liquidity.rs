//! Deposit and withdrawal planning.
//!
//! [`LiquidityManager`] turns a request and a snapshot of the pool into the
//! exact token amounts and share counts an operation will move.  It performs
//! every arithmetic and slippage check but mutates nothing; the engine
//! settles the plan.
//!
//! Plans are expressed in the caller's token order: `x` is the caller's
//! `token_a`, `y` the caller's `token_b`, and the reserves passed in are
//! oriented the same way.
//!
//! # Share issuance
//!
//! ```text
//! first deposit:  shares = ⌊√(amount_x × amount_y)⌋ − minimum_liquidity
//! later deposits: shares = min(⌊amount_x × T / reserve_x⌋, ⌊amount_y × T / reserve_y⌋)
//! withdrawal:     amount = ⌊shares × reserve / T⌋   (per token)
//! ```

use tracing::debug;

use crate::domain::{Amount, Shares};
use crate::error::{Result, SwapError};
use crate::math::{mul_div, sqrt_product};
use crate::pools::pricing::quote;

/// Pool state a plan is computed against, oriented to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolView {
    /// Reserve of the caller's `token_a`.
    pub reserve_x: Amount,
    /// Reserve of the caller's `token_b`.
    pub reserve_y: Amount,
    /// Shares outstanding.
    pub total_shares: Shares,
}

/// Caller-side bounds of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositBounds {
    /// Most of `x` to deposit.
    pub desired_x: Amount,
    /// Most of `y` to deposit.
    pub desired_y: Amount,
    /// Least of `x` to deposit.
    pub min_x: Amount,
    /// Least of `y` to deposit.
    pub min_y: Amount,
}

/// Amounts and shares of a planned deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPlan {
    /// Amount of `x` to pull from the caller.
    pub amount_x: Amount,
    /// Amount of `y` to pull from the caller.
    pub amount_y: Amount,
    /// Shares credited to the recipient.
    pub shares: Shares,
    /// Shares locked to the zero address (first deposit only).
    pub locked: Shares,
}

/// Amounts of a planned withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalPlan {
    /// Amount of `x` paid out.
    pub amount_x: Amount,
    /// Amount of `y` paid out.
    pub amount_y: Amount,
}

/// Plans deposits and withdrawals for one pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityManager {
    minimum_liquidity: Shares,
}

impl LiquidityManager {
    /// Creates a manager that locks `minimum_liquidity` shares on the first
    /// deposit.
    #[must_use]
    pub const fn new(minimum_liquidity: Shares) -> Self {
        Self { minimum_liquidity }
    }

    /// Shares locked on the first deposit.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Shares {
        self.minimum_liquidity
    }

    /// Plans a deposit.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientInitialLiquidity`] if a first deposit mints
    ///   no more than the locked minimum.
    /// - [`SwapError::InsufficientAmountA`] / [`SwapError::InsufficientAmountB`]
    ///   if the amounts used fall below the caller's minimums.
    /// - [`SwapError::ZeroSharesMinted`] if a later deposit mints nothing.
    pub fn plan_add(&self, pool: PoolView, bounds: DepositBounds) -> Result<DepositPlan> {
        if pool.total_shares.is_zero() {
            return self.plan_first_deposit(bounds);
        }

        let (amount_x, amount_y) = Self::optimal_amounts(pool, bounds)?;
        let total = pool.total_shares.get();
        let by_x = mul_div(amount_x.get(), total, pool.reserve_x.get())?;
        let by_y = mul_div(amount_y.get(), total, pool.reserve_y.get())?;
        let shares = Shares::new(by_x.min(by_y));
        if shares.is_zero() {
            return Err(SwapError::ZeroSharesMinted);
        }
        debug!(%amount_x, %amount_y, %shares, "planned deposit");
        Ok(DepositPlan {
            amount_x,
            amount_y,
            shares,
            locked: Shares::ZERO,
        })
    }

    fn plan_first_deposit(&self, bounds: DepositBounds) -> Result<DepositPlan> {
        check_floor_x(bounds.desired_x, bounds.min_x)?;
        check_floor_y(bounds.desired_y, bounds.min_y)?;
        let root = sqrt_product(bounds.desired_x.get(), bounds.desired_y.get());
        let locked = self.minimum_liquidity;
        if root <= locked.get() {
            return Err(SwapError::InsufficientInitialLiquidity);
        }
        let shares = Shares::new(root - locked.get());
        debug!(
            amount_x = %bounds.desired_x,
            amount_y = %bounds.desired_y,
            %shares,
            %locked,
            "planned first deposit"
        );
        Ok(DepositPlan {
            amount_x: bounds.desired_x,
            amount_y: bounds.desired_y,
            shares,
            locked,
        })
    }

    /// Largest amounts within the desired bounds that match the reserve ratio.
    fn optimal_amounts(pool: PoolView, bounds: DepositBounds) -> Result<(Amount, Amount)> {
        let y_optimal = quote(bounds.desired_x, pool.reserve_x, pool.reserve_y)?;
        if y_optimal <= bounds.desired_y {
            check_floor_y(y_optimal, bounds.min_y)?;
            return Ok((bounds.desired_x, y_optimal));
        }
        let x_optimal = quote(bounds.desired_y, pool.reserve_y, pool.reserve_x)?;
        if x_optimal > bounds.desired_x {
            return Err(SwapError::InvariantViolation(
                "ratio-adjusted deposit exceeds desired amount",
            ));
        }
        check_floor_x(x_optimal, bounds.min_x)?;
        Ok((x_optimal, bounds.desired_y))
    }

    /// Plans a withdrawal of `shares` and checks the payout floors.
    ///
    /// The caller is responsible for checking `shares` against the holder's
    /// balance; this only requires `shares <= total_shares`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidReserves`] if the pool has no shares.
    /// - [`SwapError::InsufficientLiquidity`] if `shares` exceeds the supply.
    /// - [`SwapError::InsufficientAmountA`] / [`SwapError::InsufficientAmountB`]
    ///   below the caller's minimums.
    pub fn plan_remove(
        &self,
        pool: PoolView,
        shares: Shares,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<WithdrawalPlan> {
        if pool.total_shares.is_zero() {
            return Err(SwapError::InvalidReserves);
        }
        if shares > pool.total_shares {
            return Err(SwapError::InsufficientLiquidity);
        }
        let total = pool.total_shares.get();
        let amount_x = Amount::new(mul_div(shares.get(), pool.reserve_x.get(), total)?);
        let amount_y = Amount::new(mul_div(shares.get(), pool.reserve_y.get(), total)?);
        check_floor_x(amount_x, min_x)?;
        check_floor_y(amount_y, min_y)?;
        debug!(%shares, %amount_x, %amount_y, "planned withdrawal");
        Ok(WithdrawalPlan { amount_x, amount_y })
    }
}

fn check_floor_x(amount: Amount, minimum: Amount) -> Result<()> {
    if amount < minimum {
        return Err(SwapError::InsufficientAmountA { amount, minimum });
    }
    Ok(())
}

fn check_floor_y(amount: Amount, minimum: Amount) -> Result<()> {
    if amount < minimum {
        return Err(SwapError::InsufficientAmountB { amount, minimum });
    }
    Ok(())
}
