// contracts/tiered_presale/src/factory.rs
//
// Pool factory: owner-gated creation of sale pools.
//
// Creation order is validate → fund → persist pool → append to the pool
// log → register in the directory, so a directory entry always points at a
// pool that is already funded and usable.

use soroban_sdk::{Address, Env, String, Vec};

use crate::constants::NULL_CONTRACT_STRKEY;
use crate::directory;
use crate::errors::Error;
use crate::events::{emit_ownership_transferred, emit_pool_created};
use crate::ledger;
use crate::pool::token_step;
use crate::storage::{
    get_and_increment_pool_id, get_owner, get_platform_token, save_pool_config,
    save_pool_list_entry, save_pool_state, set_owner,
};
use crate::tiers::{caps_from_params, write_whitelists};
use crate::types::{PoolConfig, PoolListEntry, PoolParams, PoolState, PresaleEntry};

/// The all-zero contract address.
pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_CONTRACT_STRKEY))
}

fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    let owner = get_owner(env);
    if *caller != owner {
        return Err(Error::NotAuthorized);
    }
    Ok(owner)
}

/// Check `params` and return the tier caps, tier 1 first.
pub fn validate_params(env: &Env, params: &PoolParams) -> Result<Vec<i128>, Error> {
    if params.token == params.currency {
        return Err(Error::SameTokenAndCurrency);
    }
    let null = null_address(env);
    if params.token == null {
        return Err(Error::ZeroTokenAddress);
    }
    if params.currency == null {
        return Err(Error::ZeroCurrencyAddress);
    }

    let ordered = params.round1_start < params.round1_end
        && params.round1_end <= params.round2_start
        && params.round2_start < params.round2_end
        && params.round2_end <= params.release_time;
    if !ordered {
        return Err(Error::InvalidSchedule);
    }

    if params.price <= 0 {
        return Err(Error::InvalidPrice);
    }
    if params.total_amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    // Supply must be sellable down to the last token.
    if params.total_amount % token_step(params.price) != 0 {
        return Err(Error::InvalidAmount);
    }

    caps_from_params(env, &params.tiers)
}

/// Create, fund and register a pool. Returns its id.
pub fn create_pool(env: &Env, caller: &Address, params: PoolParams) -> Result<u64, Error> {
    require_owner(env, caller)?;

    let tier_caps = validate_params(env, &params)?;
    if directory::is_registered(env, params.project_id) {
        return Err(Error::ProjectAlreadyRegistered);
    }

    ledger::pull(env, &params.token, caller, params.total_amount)?;

    let pool_id = get_and_increment_pool_id(env);

    let config = PoolConfig {
        id: pool_id,
        project_id: params.project_id,
        token: params.token.clone(),
        currency: params.currency.clone(),
        platform_token: get_platform_token(env),
        round1_start: params.round1_start,
        round1_end: params.round1_end,
        round2_start: params.round2_start,
        round2_end: params.round2_end,
        release_time: params.release_time,
        price: params.price,
        total_amount: params.total_amount,
        tier_caps,
        created_at: env.ledger().timestamp(),
    };
    let state = PoolState {
        available_tokens: params.total_amount,
        total_amount_sold: 0,
        number_participants: 0,
        token_balance: params.total_amount,
        currency_balance: 0,
        total_claimed: 0,
    };

    save_pool_config(env, &config);
    save_pool_state(env, pool_id, &state);
    write_whitelists(env, pool_id, &params.tiers);

    save_pool_list_entry(
        env,
        pool_id,
        &PoolListEntry {
            pool_id,
            currency: params.currency.clone(),
            token: params.token.clone(),
        },
    );

    directory::register(
        env,
        &PresaleEntry {
            project_id: params.project_id,
            pool_id,
            token: params.token.clone(),
            currency: params.currency.clone(),
        },
    )?;

    emit_pool_created(
        env,
        pool_id,
        params.project_id,
        params.token,
        params.currency,
        params.total_amount,
    );

    Ok(pool_id)
}

pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    let previous = require_owner(env, caller)?;
    set_owner(env, new_owner);
    emit_ownership_transferred(env, previous, new_owner.clone());
    Ok(())
}
