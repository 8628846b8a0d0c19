//! Fundamental domain value types used throughout the engine.
//!
//! Identities (addresses, tokens, the pool pair), quantities (amounts,
//! shares, prices), time, and the request and receipt values exchanged with
//! callers.  Quantities are `u128` newtypes with checked arithmetic.

mod address;
mod amount;
mod fee_rate;
mod liquidity_change;
mod price;
mod receipts;
mod shares;
mod swap_request;
mod timestamp;
mod token;
mod token_pair;

pub use address::{Address, ADDRESS_LEN};
pub use amount::{Amount, ONE_TOKEN, TOKEN_DECIMALS};
pub use fee_rate::FeeRate;
pub use liquidity_change::{AddLiquidity, LiquidityChange, RemoveLiquidity};
pub use price::Price;
pub use receipts::{AddLiquidityReceipt, RemoveLiquidityReceipt, SwapReceipt};
pub use shares::Shares;
pub use swap_request::SwapRequest;
pub use timestamp::Timestamp;
pub use token::Token;
pub use token_pair::{Side, TokenPair};
