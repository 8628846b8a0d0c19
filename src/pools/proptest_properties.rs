//! Property-based tests for pool invariants.
//!
//! 1. **Product preservation**: `reserve_a * reserve_b` never decreases
//!    across swaps.
//! 2. **Share conservation**: LP balances always sum to the total supply.
//! 3. **Full exit**: removing every share empties both reserves.
//! 4. **Output bounds**: `get_amount_out` stays below the output reserve and
//!    is non-decreasing in the input.
//! 5. **No free lunch**: add then remove never returns more than was paid.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{
    AddLiquidity, Address, Amount, FeeRate, RemoveLiquidity, Shares, SwapRequest, Timestamp,
    TokenPair,
};
use crate::pools::engine::SimpleSwap;
use crate::pools::pricing;
use crate::token::InMemoryToken;
use crate::traits::{ManualClock, TokenLedger};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ALICE: Address = Address::from_low_u64(0xa11ce);
const BOB: Address = Address::from_low_u64(0xb0b);
const POOL: Address = Address::from_low_u64(0x9001);

/// Balance each trader starts with on both tokens.
const FUNDING: u128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

struct Harness {
    pool: SimpleSwap<InMemoryToken, ManualClock>,
    tka: InMemoryToken,
    tkb: InMemoryToken,
}

impl Harness {
    fn new() -> Self {
        let (tka, mint_a) = InMemoryToken::create(Address::from_low_u64(0xa), "Token A", "TKA");
        let (tkb, mint_b) = InMemoryToken::create(Address::from_low_u64(0xb), "Token B", "TKB");
        for who in [ALICE, BOB] {
            let Ok(()) = tka.mint(&mint_a, who, Amount::new(FUNDING)) else {
                panic!("mint A");
            };
            let Ok(()) = tkb.mint(&mint_b, who, Amount::new(FUNDING)) else {
                panic!("mint B");
            };
            tka.approve(who, POOL, Amount::MAX);
            tkb.approve(who, POOL, Amount::MAX);
        }
        let Ok(pair) = TokenPair::new(tka.token(), tkb.token()) else {
            panic!("valid pair");
        };
        let clock = ManualClock::new(Timestamp::from_secs(1_000));
        let Ok(pool) =
            SimpleSwap::new(PoolConfig::new(pair), POOL, tka.clone(), tkb.clone(), clock)
        else {
            panic!("valid pool");
        };
        Self { pool, tka, tkb }
    }

    fn seeded(ra: u128, rb: u128) -> Self {
        let mut h = Self::new();
        let Ok(_) = h.add(ALICE, ra, rb) else {
            panic!("seed deposit");
        };
        h
    }

    fn add(&mut self, who: Address, a: u128, b: u128) -> crate::error::Result<Shares> {
        let request = AddLiquidity {
            token_a: self.tka.token(),
            token_b: self.tkb.token(),
            amount_a_desired: Amount::new(a),
            amount_b_desired: Amount::new(b),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: who,
            deadline: Timestamp::MAX,
        };
        self.pool
            .add_liquidity(who, &request)
            .map(|r| r.shares_minted)
    }

    fn remove(&mut self, who: Address, shares: Shares) -> crate::error::Result<(u128, u128)> {
        let request = RemoveLiquidity {
            token_a: self.tka.token(),
            token_b: self.tkb.token(),
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: who,
            deadline: Timestamp::MAX,
        };
        self.pool
            .remove_liquidity(who, &request)
            .map(|r| (r.amount_a.get(), r.amount_b.get()))
    }

    fn swap(&mut self, a_to_b: bool, amount_in: u128) -> crate::error::Result<u128> {
        let (token_in, token_out) = if a_to_b {
            (self.tka.token(), self.tkb.token())
        } else {
            (self.tkb.token(), self.tka.token())
        };
        let request = SwapRequest::new(
            token_in,
            token_out,
            Amount::new(amount_in),
            Amount::ZERO,
            BOB,
            Timestamp::MAX,
        );
        self.pool
            .swap_exact_tokens_for_tokens(BOB, &request)
            .map(|r| r.amount_out.get())
    }

    fn product(&self) -> primitive_types::U256 {
        self.pool.pool().reserves().product()
    }

    fn holder_sum(&self) -> u128 {
        self.pool
            .pool()
            .shares()
            .holders()
            .fold(0u128, |acc, (_, s)| acc.saturating_add(s.get()))
    }
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000_000_000u128
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((any::<bool>(), amount_strategy()), 1..8),
    ) {
        let mut h = Harness::seeded(ra, rb);
        for (a_to_b, amount_in) in swaps {
            let before = h.product();
            let _ = h.swap(a_to_b, amount_in);
            prop_assert!(h.product() >= before, "product decreased");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Share conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_balances_sum_to_supply(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec((0u8..4, amount_strategy()), 1..12),
    ) {
        let mut h = Harness::seeded(ra, rb);
        for (op, n) in ops {
            let _ = match op {
                0 => h.add(BOB, n, n).map(|_| ()),
                1 => h.pool.transfer_shares(ALICE, BOB, Shares::new(n)),
                2 => {
                    let held = h.pool.balance_of(BOB).get();
                    h.remove(BOB, Shares::new(n.min(held))).map(|_| ())
                }
                _ => h.swap(n % 2 == 0, n).map(|_| ()),
            };
            prop_assert_eq!(h.holder_sum(), h.pool.total_supply().get());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Full exit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_removing_all_shares_empties_pool(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in amount_strategy(),
    ) {
        let mut h = Harness::seeded(ra, rb);
        let _ = h.swap(true, swap_in);
        let all = h.pool.balance_of(ALICE);
        let Ok(_) = h.remove(ALICE, all) else {
            return Err(TestCaseError::fail("full removal failed"));
        };
        prop_assert_eq!(h.pool.reserves(), (Amount::ZERO, Amount::ZERO));
        prop_assert!(h.pool.total_supply().is_zero());
        prop_assert_eq!(h.tka.balance_of(POOL), Amount::ZERO);
        prop_assert_eq!(h.tkb.balance_of(POOL), Amount::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Output bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_amount_out_bounded_and_monotone(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        small in amount_strategy(),
        extra in amount_strategy(),
    ) {
        let (rin, rout) = (Amount::new(reserve_in), Amount::new(reserve_out));
        let Ok(out_small) = pricing::get_amount_out(Amount::new(small), rin, rout, FeeRate::DEFAULT)
        else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        let Ok(out_large) =
            pricing::get_amount_out(Amount::new(small + extra), rin, rout, FeeRate::DEFAULT)
        else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        prop_assert!(out_small < rout);
        prop_assert!(out_large < rout);
        prop_assert!(out_large >= out_small);
    }
}

// ---------------------------------------------------------------------------
// Property 5: No free lunch
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_remove_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let mut h = Harness::seeded(ra, rb);
        let a_before = h.tka.balance_of(BOB);
        let b_before = h.tkb.balance_of(BOB);
        let Ok(shares) = h.add(BOB, da, db) else {
            return Ok(());
        };
        let Ok(_) = h.remove(BOB, shares) else {
            return Err(TestCaseError::fail("removal of fresh shares failed"));
        };
        prop_assert!(h.tka.balance_of(BOB) <= a_before);
        prop_assert!(h.tkb.balance_of(BOB) <= b_before);
    }
}
