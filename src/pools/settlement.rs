//! All-or-nothing token movement for one pool operation.
//!
//! A [`Settlement`] collects the inbound pulls and outbound pushes of an
//! operation and runs them in three stages:
//!
//! 1. **Preflight**: every leg is checked with the ledger's side-effect-free
//!    `can_transfer*` query.  Any failure aborts with nothing moved.
//! 2. **Pulls**: caller funds move into the pool account.  If a later pull
//!    fails, earlier pulls are refunded and the ledger error is returned.
//! 3. **Pushes**: pool funds move out.  A push that fails after a clean
//!    preflight means the ledger broke its own contract; pulls are refunded
//!    and [`SwapError::InvariantViolation`] is returned.
//!
//! Pool reserves and shares are committed by the engine only after
//! [`Settlement::execute`] succeeds.

use tracing::{error, warn};

use crate::domain::{Address, Amount};
use crate::error::{Result, SwapError};
use crate::traits::TokenLedger;

#[derive(Debug)]
struct Leg<'a, L> {
    ledger: &'a L,
    account: Address,
    amount: Amount,
}

/// Staged set of transfers between a pool account and outside accounts.
#[derive(Debug)]
pub struct Settlement<'a, L> {
    pool: Address,
    pulls: Vec<Leg<'a, L>>,
    pushes: Vec<Leg<'a, L>>,
}

impl<'a, L: TokenLedger> Settlement<'a, L> {
    /// Starts an empty settlement for the pool account `pool`.
    #[must_use]
    pub const fn new(pool: Address) -> Self {
        Self {
            pool,
            pulls: Vec::new(),
            pushes: Vec::new(),
        }
    }

    /// Adds a pull of `amount` from `from` into the pool, spent on the pool
    /// account's allowance.  Zero amounts are skipped.
    #[must_use]
    pub fn pull(mut self, ledger: &'a L, from: Address, amount: Amount) -> Self {
        if !amount.is_zero() {
            self.pulls.push(Leg {
                ledger,
                account: from,
                amount,
            });
        }
        self
    }

    /// Adds a push of `amount` from the pool to `to`.  Zero amounts are
    /// skipped.
    #[must_use]
    pub fn push(mut self, ledger: &'a L, to: Address, amount: Amount) -> Self {
        if !amount.is_zero() {
            self.pushes.push(Leg {
                ledger,
                account: to,
                amount,
            });
        }
        self
    }

    /// Checks every leg without moving anything.
    ///
    /// # Errors
    ///
    /// [`SwapError::TransferFailed`] with the first ledger rejection.
    pub fn preflight(&self) -> Result<()> {
        for leg in &self.pulls {
            leg.ledger
                .can_transfer_from(self.pool, leg.account, leg.amount)?;
        }
        for leg in &self.pushes {
            leg.ledger.can_transfer(self.pool, leg.amount)?;
        }
        Ok(())
    }

    /// Preflights, then moves every leg.
    ///
    /// # Errors
    ///
    /// - [`SwapError::TransferFailed`] if preflight or a pull fails; funds
    ///   already pulled are returned.
    /// - [`SwapError::InvariantViolation`] if a push fails after preflight
    ///   or a refund fails.
    pub fn execute(self) -> Result<()> {
        self.preflight()?;

        for (done, leg) in self.pulls.iter().enumerate() {
            if let Err(e) = leg
                .ledger
                .transfer_from(self.pool, leg.account, self.pool, leg.amount)
            {
                warn!(
                    token = %leg.ledger.token(),
                    from = %leg.account,
                    amount = %leg.amount,
                    error = %e,
                    "pull failed after preflight; refunding earlier pulls"
                );
                self.refund(done)?;
                return Err(SwapError::TransferFailed(e));
            }
        }

        for leg in &self.pushes {
            if let Err(e) = leg.ledger.transfer(self.pool, leg.account, leg.amount) {
                error!(
                    token = %leg.ledger.token(),
                    to = %leg.account,
                    amount = %leg.amount,
                    error = %e,
                    "push failed after clean preflight"
                );
                self.refund(self.pulls.len())?;
                return Err(SwapError::InvariantViolation(
                    "outbound transfer failed after preflight",
                ));
            }
        }
        Ok(())
    }

    /// Returns the first `count` pulls to their owners.
    fn refund(&self, count: usize) -> Result<()> {
        for leg in self.pulls.iter().take(count) {
            if let Err(e) = leg.ledger.transfer(self.pool, leg.account, leg.amount) {
                error!(
                    token = %leg.ledger.token(),
                    to = %leg.account,
                    amount = %leg.amount,
                    error = %e,
                    "refund failed"
                );
                return Err(SwapError::InvariantViolation("refund of pulled funds failed"));
            }
        }
        Ok(())
    }
}
