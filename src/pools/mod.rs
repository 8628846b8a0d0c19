//! The constant-product pool and its components.
//!
//! | Module | Component |
//! |--------|-----------|
//! | [`reserves`] | [`ReserveLedger`]: the two reserve balances |
//! | [`share_ledger`] | [`ShareLedger`]: LP share balances and supply |
//! | [`pricing`] | Pure pricing functions (`get_amount_out`, `quote`, ...) |
//! | [`liquidity`] | [`LiquidityManager`]: deposit and withdrawal planning |
//! | [`swap`] | [`SwapEngine`]: exact-input swap planning |
//! | [`deadline`] | [`DeadlineGuard`]: expiry checks |
//! | [`settlement`] | [`Settlement`]: staged token transfers |
//! | [`engine`] | [`SimpleSwap`]: the pool itself |
//! | [`shared`] | [`SharedSwap`]: thread-safe pool handle |

pub mod deadline;
pub mod engine;
pub mod liquidity;
pub mod pricing;
pub mod reserves;
pub mod settlement;
pub mod share_ledger;
pub mod shared;
pub mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use deadline::DeadlineGuard;
pub use engine::{Pool, SimpleSwap};
pub use liquidity::{DepositBounds, DepositPlan, LiquidityManager, PoolView, WithdrawalPlan};
pub use reserves::{ReserveDelta, ReserveLedger, Reserves};
pub use settlement::Settlement;
pub use share_ledger::{LpMetadata, ShareLedger};
pub use shared::SharedSwap;
pub use swap::{SwapEngine, SwapPlan};
