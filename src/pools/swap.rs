//! Exact-input swap planning.

use tracing::debug;

use crate::domain::{Amount, FeeRate, Side, SwapRequest, Token, TokenPair};
use crate::error::{Result, SwapError};
use crate::pools::pricing::{get_amount_out, swap_fee};
use crate::pools::reserves::Reserves;

/// Amounts of a planned swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPlan {
    /// Side of the pair paid in.
    pub side_in: Side,
    /// Amount pulled from the caller; credited to the input reserve in full.
    pub amount_in: Amount,
    /// Amount paid to the recipient.
    pub amount_out: Amount,
    /// Portion of `amount_in` kept as the LP fee.
    pub fee: Amount,
}

/// Validates swap requests and prices them against a reserve snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SwapEngine {
    pair: TokenPair,
    fee: FeeRate,
}

impl SwapEngine {
    /// Creates a planner for `pair` charging `fee`.
    #[must_use]
    pub const fn new(pair: TokenPair, fee: FeeRate) -> Self {
        Self { pair, fee }
    }

    /// Resolves a two-token path to the input side.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidPath`] unless the path is exactly the two
    /// pool tokens, distinct, in either order.
    pub fn resolve_path(&self, path: &[Token]) -> Result<Side> {
        let [token_in, token_out] = path else {
            return Err(SwapError::InvalidPath("path must contain exactly two tokens"));
        };
        if token_in == token_out {
            return Err(SwapError::InvalidPath("path tokens must be distinct"));
        }
        match (self.pair.side_of(token_in), self.pair.side_of(token_out)) {
            (Some(side_in), Some(_)) => Ok(side_in),
            _ => Err(SwapError::InvalidPath("path does not match the pool pair")),
        }
    }

    /// Plans `request` against `reserves`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidPath`] for a malformed path.
    /// - [`SwapError::InvalidReserves`] / [`SwapError::InsufficientInputAmount`]
    ///   from pricing.
    /// - [`SwapError::InsufficientOutputAmount`] if the output is zero or
    ///   below `amount_out_min`.
    pub fn plan(&self, reserves: Reserves, request: &SwapRequest) -> Result<SwapPlan> {
        let side_in = self.resolve_path(&request.path)?;
        let (reserve_in, reserve_out) = reserves.oriented(side_in);
        let amount_out = get_amount_out(request.amount_in, reserve_in, reserve_out, self.fee)?;
        if amount_out.is_zero() || amount_out < request.amount_out_min {
            return Err(SwapError::InsufficientOutputAmount {
                amount_out,
                amount_out_min: request.amount_out_min,
            });
        }
        let fee = swap_fee(request.amount_in, self.fee)?;
        debug!(
            amount_in = %request.amount_in,
            %amount_out,
            %fee,
            %reserve_in,
            %reserve_out,
            "planned swap"
        );
        Ok(SwapPlan {
            side_in,
            amount_in: request.amount_in,
            amount_out,
            fee,
        })
    }
}
