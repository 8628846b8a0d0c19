//! SimpleSwap walkthrough.
//!
//! Creates two in-memory tokens and a pool, seeds liquidity, swaps in both
//! directions, and withdraws.  Set `RUST_LOG=simple_swap=debug` to see the
//! engine's planning logs.
//!
//! # Run
//!
//! ```bash
//! cargo run --example simple_swap
//! ```

use simple_swap::config::PoolConfig;
use simple_swap::domain::{
    AddLiquidity, Address, Amount, RemoveLiquidity, SwapRequest, Timestamp, TokenPair,
};
use simple_swap::error::SwapError;
use simple_swap::pools::SimpleSwap;
use simple_swap::token::InMemoryToken;
use simple_swap::traits::{Clock, SystemClock, TokenLedger};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simple_swap=info")),
        )
        .init();

    println!("=== SimpleSwap (x · y = k) ===\n");

    // ── 1. Tokens and accounts ──────────────────────────────────────────
    let pool_account = Address::from_low_u64(0x5157);
    let alice = Address::from_low_u64(0xa11ce);
    let bob = Address::from_low_u64(0xb0b);

    let (tka, mint_a) = InMemoryToken::create(Address::from_low_u64(0xa), "Token A", "TKA");
    let (tkb, mint_b) = InMemoryToken::create(Address::from_low_u64(0xb), "Token B", "TKB");
    for who in [alice, bob] {
        tka.mint(&mint_a, who, Amount::from_tokens(1_000))?;
        tkb.mint(&mint_b, who, Amount::from_tokens(1_000))?;
        tka.approve(who, pool_account, Amount::MAX);
        tkb.approve(who, pool_account, Amount::MAX);
    }
    println!("{} and {} minted to Alice and Bob", tka.symbol(), tkb.symbol());

    // ── 2. Pool ─────────────────────────────────────────────────────────
    let pair = TokenPair::new(tka.token(), tkb.token())?;
    let clock = SystemClock;
    let deadline = clock.now().saturating_add_secs(300);
    let mut pool = SimpleSwap::new(
        PoolConfig::new(pair),
        pool_account,
        tka.clone(),
        tkb.clone(),
        clock,
    )?;
    println!("\nPool {} ({}) created", pool.name(), pool.symbol());
    println!("  Fee: {}", pool.fee_rate());

    // ── 3. Alice seeds 100 A / 200 B ────────────────────────────────────
    let deposit = pool.add_liquidity(
        alice,
        &AddLiquidity {
            token_a: tka.token(),
            token_b: tkb.token(),
            amount_a_desired: Amount::from_tokens(100),
            amount_b_desired: Amount::from_tokens(200),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: alice,
            deadline,
        },
    )?;
    println!("\nAlice deposited {} A / {} B", deposit.amount_a, deposit.amount_b);
    println!("  Shares minted: {}", deposit.shares_minted);
    println!("  Price A in B:  {}", pool.get_price(&tka.token(), &tkb.token())?);

    // ── 4. Bob sells 10 A ───────────────────────────────────────────────
    let sell_a = SwapRequest::new(
        tka.token(),
        tkb.token(),
        Amount::from_tokens(10),
        Amount::ZERO,
        bob,
        deadline,
    );
    let receipt = pool.swap_exact_tokens_for_tokens(bob, &sell_a)?;
    println!("\nBob swapped: {receipt}");
    println!("  Price A in B:  {}", pool.get_price(&tka.token(), &tkb.token())?);

    // ── 5. A swap with an unreachable floor is rejected ─────────────────
    let greedy = SwapRequest::new(
        tkb.token(),
        tka.token(),
        Amount::from_tokens(10),
        Amount::from_tokens(10),
        bob,
        deadline,
    );
    match pool.swap_exact_tokens_for_tokens(bob, &greedy) {
        Err(SwapError::InsufficientOutputAmount {
            amount_out,
            amount_out_min,
        }) => println!("\nRejected: would pay {amount_out}, floor was {amount_out_min}"),
        other => println!("\nUnexpected: {other:?}"),
    }

    // ── 6. Alice withdraws everything ───────────────────────────────────
    let shares = pool.balance_of(alice);
    let withdrawal = pool.remove_liquidity(
        alice,
        &RemoveLiquidity {
            token_a: tka.token(),
            token_b: tkb.token(),
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: alice,
            deadline,
        },
    )?;
    println!(
        "\nAlice withdrew {} A / {} B for {shares} shares",
        withdrawal.amount_a, withdrawal.amount_b
    );
    let (ra, rb) = pool.reserves();
    println!("  Reserves now: {ra} / {rb}");
    println!("  Alice holds:  {} A / {} B", tka.balance_of(alice), tkb.balance_of(alice));

    Ok(())
}
