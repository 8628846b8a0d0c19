//! # SimpleSwap
//!
//! Two-asset constant-product AMM engine: one pool pairing two tokens,
//! fungible LP shares, exact-input swaps priced by `x * y = k` with a fee
//! that stays in the pool, and slippage and deadline guards on every
//! mutating call.
//!
//! All quantities are unsigned integers (`u128`) in the smallest unit of the
//! token; intermediate products are computed at 256/512-bit width so no
//! valid input overflows.
//!
//! ## Create a pool, deposit and swap
//!
//! ```rust
//! use simple_swap::prelude::*;
//!
//! let pool_account = Address::from_low_u64(0xfee);
//! let alice = Address::from_low_u64(1);
//!
//! // 1. Two token ledgers, with Alice funded and the pool approved
//! let (tka, mint_a) = InMemoryToken::create(Address::from_low_u64(0xa), "Token A", "TKA");
//! let (tkb, mint_b) = InMemoryToken::create(Address::from_low_u64(0xb), "Token B", "TKB");
//! tka.mint(&mint_a, alice, Amount::from_tokens(1_000)).expect("mint");
//! tkb.mint(&mint_b, alice, Amount::from_tokens(1_000)).expect("mint");
//! tka.approve(alice, pool_account, Amount::MAX);
//! tkb.approve(alice, pool_account, Amount::MAX);
//!
//! // 2. The pool
//! let pair = TokenPair::new(tka.token(), tkb.token()).expect("distinct tokens");
//! let clock = ManualClock::new(Timestamp::from_secs(0));
//! let mut pool = SimpleSwap::new(
//!     PoolConfig::new(pair),
//!     pool_account,
//!     tka.clone(),
//!     tkb.clone(),
//!     clock,
//! )
//! .expect("valid config");
//!
//! // 3. Seed liquidity at 1 A = 2 B
//! pool.add_liquidity(alice, &AddLiquidity {
//!     token_a: tka.token(),
//!     token_b: tkb.token(),
//!     amount_a_desired: Amount::from_tokens(100),
//!     amount_b_desired: Amount::from_tokens(200),
//!     amount_a_min: Amount::ZERO,
//!     amount_b_min: Amount::ZERO,
//!     recipient: alice,
//!     deadline: Timestamp::from_secs(60),
//! })
//! .expect("deposit");
//! assert_eq!(pool.get_price(&tka.token(), &tkb.token()).expect("price").whole(), 2);
//!
//! // 4. Sell 10 A for B
//! let request = SwapRequest::new(
//!     tka.token(),
//!     tkb.token(),
//!     Amount::from_tokens(10),
//!     Amount::ZERO,
//!     alice,
//!     Timestamp::from_secs(60),
//! );
//! let receipt = pool.swap_exact_tokens_for_tokens(alice, &request).expect("swap");
//! assert!(receipt.amount_out > Amount::ZERO);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller    │  SwapRequest / AddLiquidity / RemoveLiquidity
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  SimpleSwap  │  deadline → plan → preview → settle → commit
//! └──────┬───────┘
//!        │ LiquidityManager, SwapEngine, pricing
//!        ▼
//! ┌──────────────┐
//! │     Pool     │  ReserveLedger + ShareLedger
//! └──────┬───────┘
//!        │ Settlement
//!        ▼
//! ┌──────────────┐
//! │ TokenLedger  │  two external token ledgers
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Price`](domain::Price), requests and receipts |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`TokenLedger`](traits::TokenLedger), [`Clock`](traits::Clock) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), in code or from TOML |
//! | [`pools`]  | [`SimpleSwap`](pools::SimpleSwap) and its components |
//! | [`token`]  | [`InMemoryToken`](token::InMemoryToken) reference ledger |
//! | [`math`]   | Checked and wide-integer arithmetic |
//! | [`error`]  | [`SwapError`](error::SwapError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod token;
pub mod traits;
