// contracts/tiered_presale/src/pool.rs
//
// Sale pool: purchases during the two rounds and claims after release.
//
// Every entry point checks everything that can fail before the first token
// moves, then commits counters, investor record and event together.

use soroban_sdk::{Address, Env, Vec};

use crate::constants::PRICE_SCALE;
use crate::errors::Error;
use crate::events::{emit_tokens_claimed, emit_tokens_purchased};
use crate::ledger;
use crate::phase::phase_at;
use crate::storage::{
    get_tier_mask, load_investor, load_investor_at, load_pool_config, load_pool_state,
    save_investor, save_investor_at, save_pool_state,
};
use crate::tiers::{cap_of, resolve_tier};
use crate::types::{InvestorRecord, Phase};

/// Token units bought by `amount` currency units at `price`.
///
/// The conversion must be exact; an amount that would leave a fraction of a
/// token unpaid for fails with `InvalidAmount`.
pub fn tokens_for(amount: i128, price: i128) -> Result<i128, Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }
    let scaled = amount
        .checked_mul(PRICE_SCALE)
        .ok_or(Error::ArithmeticOverflow)?;
    if scaled % price != 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(scaled / price)
}

/// Smallest token quantity a whole number of currency units buys at `price`.
/// Every exact purchase is a multiple of it.
pub fn token_step(price: i128) -> i128 {
    PRICE_SCALE / gcd(PRICE_SCALE, price)
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Spend `amount` of the pool currency for `investor`. Returns the token
/// units added to the investor's entitlement.
///
/// Requests larger than the remaining supply fail with
/// `InsufficientSupply`; they are never clamped. The full `amount` is
/// charged, so it must convert to a whole number of tokens.
pub fn buy(env: &Env, pool_id: u64, investor: &Address, amount: i128) -> Result<i128, Error> {
    let config = load_pool_config(env, pool_id);
    let mut state = load_pool_state(env, pool_id);

    if state.available_tokens == 0 {
        return Err(Error::SoldOut);
    }

    let phase = phase_at(&config, env.ledger().timestamp());
    if let Some(err) = phase.purchase_error() {
        return Err(err);
    }

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let existing = load_investor(env, pool_id, investor);
    let mask = get_tier_mask(env, pool_id, investor);
    let tier = resolve_tier(mask, phase, existing.as_ref().map(|r| r.tier))?;

    let spent = existing
        .as_ref()
        .map_or(0, |r| r.spent)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if spent > cap_of(&config, tier)? {
        return Err(Error::TierCapExceeded);
    }

    let tokens = tokens_for(amount, config.price)?;
    if tokens > state.available_tokens {
        return Err(Error::InsufficientSupply);
    }

    ledger::pull(env, &config.currency, investor, amount)?;

    state.available_tokens -= tokens;
    state.total_amount_sold += tokens;
    state.currency_balance += amount;

    let record = match existing {
        Some(mut record) => {
            record.spent = spent;
            record.entitlement += tokens;
            record
        }
        None => {
            let index = state.number_participants;
            save_investor_at(env, pool_id, index, investor);
            state.number_participants += 1;
            InvestorRecord {
                spent,
                entitlement: tokens,
                tier,
                claimed: false,
                index,
            }
        }
    };

    save_investor(env, pool_id, investor, &record);
    save_pool_state(env, pool_id, &state);

    emit_tokens_purchased(env, pool_id, investor.clone(), amount, tokens);

    Ok(tokens)
}

/// Pay out the full entitlement of `investor`. Returns the amount paid.
pub fn claim(env: &Env, pool_id: u64, investor: &Address) -> Result<i128, Error> {
    let config = load_pool_config(env, pool_id);

    if phase_at(&config, env.ledger().timestamp()) != Phase::Claimable {
        return Err(Error::ClaimNotOpen);
    }

    let mut record = load_investor(env, pool_id, investor).ok_or(Error::NothingToClaim)?;
    if record.claimed {
        return Err(Error::AlreadyClaimed);
    }
    if record.entitlement == 0 {
        return Err(Error::NothingToClaim);
    }

    let mut state = load_pool_state(env, pool_id);
    let amount = record.entitlement;

    ledger::push(env, &config.token, investor, amount);

    record.claimed = true;
    state.token_balance -= amount;
    state.total_claimed += amount;

    save_investor(env, pool_id, investor, &record);
    save_pool_state(env, pool_id, &state);

    emit_tokens_claimed(env, pool_id, investor.clone(), amount);

    Ok(amount)
}

/// Investors of a pool in the order they first bought, with their
/// entitlements.
pub fn investors(env: &Env, pool_id: u64) -> (Vec<Address>, Vec<i128>) {
    let state = load_pool_state(env, pool_id);
    let mut addresses = Vec::new(env);
    let mut amounts = Vec::new(env);

    for index in 0..state.number_participants {
        let investor = load_investor_at(env, pool_id, index);
        let entitlement = load_investor(env, pool_id, &investor).map_or(0, |r| r.entitlement);
        addresses.push_back(investor);
        amounts.push_back(entitlement);
    }

    (addresses, amounts)
}
