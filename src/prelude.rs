//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use simple_swap::prelude::*;
//! ```

pub use crate::domain::{
    AddLiquidity, AddLiquidityReceipt, Address, Amount, FeeRate, LiquidityChange, Price,
    RemoveLiquidity, RemoveLiquidityReceipt, Shares, SwapReceipt, SwapRequest, Timestamp, Token,
    TokenPair,
};

pub use crate::traits::{
    Clock, LiquidityPool, LiquidityReceipt, ManualClock, SwapPool, SystemClock, TokenLedger,
};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{LedgerError, Result, SwapError};

pub use crate::pools::{SharedSwap, SimpleSwap};

pub use crate::token::{InMemoryToken, MintCapability};
