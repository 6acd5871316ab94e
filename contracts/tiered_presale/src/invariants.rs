// contracts/tiered_presale/src/invariants.rs
//
// Property tests over random purchase sequences. Whatever the mix of valid
// and rejected purchases, the pool must conserve its supply, never move its
// counters backwards, count each investor once, respect tier caps, and pay
// every entitlement exactly once.

extern crate std;

use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, Address};
use std::collections::BTreeSet;
use std::vec::Vec;

use crate::test_setup::*;
use crate::{Error, PoolState};

const CAPS: [i128; 4] = [3_000, 4_000, 5_000, 6_000];
const FUNDS: i128 = 20_000;

#[derive(Clone, Debug)]
struct Purchase {
    /// 0..=3 are the tier investors, 4 is never whitelisted.
    investor: usize,
    round2: bool,
    amount: i128,
}

fn purchase() -> impl Strategy<Value = Purchase> {
    (0usize..5, any::<bool>(), -10i128..3_500).prop_map(|(investor, round2, amount)| Purchase {
        investor,
        round2,
        amount,
    })
}

fn check_counters(presale: &Presale, before: &PoolState, after: &PoolState) {
    assert_eq!(
        after.available_tokens + after.total_amount_sold,
        TOTAL_AMOUNT
    );
    assert!(after.total_amount_sold >= before.total_amount_sold);
    assert!(after.available_tokens <= before.available_tokens);
    assert!(after.available_tokens >= 0);
    assert_eq!(
        presale.currency.balance(&presale.client.address),
        after.currency_balance
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_random_purchases_keep_pool_consistent(
        purchases in prop::collection::vec(purchase(), 1..24)
    ) {
        let presale = Presale::new();
        let mut params = presale.params();
        params.tiers = presale.tiers_with_caps(CAPS);
        let pool_id = presale.create_pool(&params);

        let stranger = Address::generate(&presale.env);
        let mut wallets: Vec<Address> = presale.investors.iter().cloned().collect();
        wallets.push(stranger);
        for wallet in wallets.iter() {
            presale.fund_investor(wallet, FUNDS);
        }

        // Round 1 purchases first, then round 2, as the clock only moves forward.
        let mut ordered = purchases.clone();
        ordered.sort_by_key(|p| p.round2);

        let mut buyers: BTreeSet<usize> = BTreeSet::new();
        for p in ordered.iter() {
            presale.set_time(if p.round2 { ROUND2_START } else { ROUND1_START });

            let wallet = &wallets[p.investor];
            let before = presale.client.pool_state(&pool_id);
            let balance_before = presale.currency.balance(wallet);

            match presale.client.try_buy(&pool_id, wallet, &p.amount) {
                Ok(Ok(tokens)) => {
                    prop_assert!(p.investor < 4);
                    prop_assert!(p.round2 || p.investor == 0);
                    prop_assert_eq!(tokens, p.amount);
                    prop_assert_eq!(presale.currency.balance(wallet), balance_before - p.amount);
                    buyers.insert(p.investor);
                }
                Err(Ok(err)) => {
                    prop_assert_ne!(err, Error::ArithmeticOverflow);
                    prop_assert_eq!(&presale.client.pool_state(&pool_id), &before);
                    prop_assert_eq!(presale.currency.balance(wallet), balance_before);
                }
                other => prop_assert!(false, "unexpected host failure: {:?}", other),
            }

            let after = presale.client.pool_state(&pool_id);
            check_counters(&presale, &before, &after);
            prop_assert_eq!(after.number_participants as usize, buyers.len());
        }

        for (index, wallet) in wallets.iter().enumerate() {
            match presale.client.investor(&pool_id, wallet) {
                Some(record) => {
                    prop_assert!(buyers.contains(&index));
                    prop_assert!(record.spent <= CAPS[record.tier as usize - 1]);
                    prop_assert_eq!(record.tier as usize, index + 1);
                }
                None => prop_assert!(!buyers.contains(&index)),
            }
        }

        presale.set_time(RELEASE_TIME);
        let sold = presale.client.total_amount_sold(&pool_id);
        let mut claimed = 0i128;
        for index in buyers.iter() {
            let wallet = &wallets[*index];
            claimed += presale.client.claim_tokens(&pool_id, wallet);
            prop_assert_eq!(
                presale.client.try_claim_tokens(&pool_id, wallet),
                Err(Ok(Error::AlreadyClaimed))
            );
        }

        let state = presale.client.pool_state(&pool_id);
        prop_assert_eq!(claimed, sold);
        prop_assert_eq!(state.total_claimed, sold);
        prop_assert_eq!(state.token_balance, state.available_tokens);
        prop_assert_eq!(
            presale.token.balance(&presale.client.address),
            state.available_tokens
        );
    }
}
