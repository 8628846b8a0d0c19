//! Exact-input swap request.

use super::{Address, Amount, Timestamp, Token};

/// An exact-input swap along a two-token path.
///
/// `path[0]` is the token paid in, `path[1]` the token paid out.  The path
/// must be exactly the pool's two tokens; longer paths (multi-hop routing)
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Exact amount of `path[0]` the caller pays.
    pub amount_in: Amount,
    /// Minimum acceptable amount of `path[1]`.
    pub amount_out_min: Amount,
    /// `[token_in, token_out]`.
    pub path: Vec<Token>,
    /// Account receiving the output.
    pub recipient: Address,
    /// Latest instant at which the swap may execute.
    pub deadline: Timestamp,
}

impl SwapRequest {
    /// Builds a request for the path `token_in -> token_out`.
    #[must_use]
    pub fn new(
        token_in: Token,
        token_out: Token,
        amount_in: Amount,
        amount_out_min: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Self {
        Self {
            amount_in,
            amount_out_min,
            path: vec![token_in, token_out],
            recipient,
            deadline,
        }
    }
}
