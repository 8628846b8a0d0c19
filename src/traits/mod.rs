//! Core trait abstractions.
//!
//! [`SwapPool`] and [`LiquidityPool`] are the pool-facing interfaces;
//! [`TokenLedger`] and [`Clock`] are the seams to the pool's collaborators.

mod clock;
mod liquidity_pool;
mod swap_pool;
mod token_ledger;

pub use clock::{Clock, ManualClock, SystemClock};
pub use liquidity_pool::{LiquidityPool, LiquidityReceipt};
pub use swap_pool::SwapPool;
pub use token_ledger::TokenLedger;
