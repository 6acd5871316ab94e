#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod constants;
mod directory;
mod errors;
mod events;
mod factory;
mod ledger;
mod phase;
mod pool;
mod storage;
mod tiers;
mod types;

#[cfg(test)]
mod invariants;

pub use constants::{PRICE_SCALE, TIER_COUNT};
pub use errors::{Error, ErrorKind};
pub use types::{
    InvestorRecord, Phase, PoolConfig, PoolListEntry, PoolParams, PoolState, PresaleEntry,
    TierParams,
};

use storage::{
    get_owner, get_pool_count, get_presale_count, get_tier_mask, has_pool, is_initialized,
    load_investor, load_pool_config, load_pool_list_entry, load_pool_state, set_owner,
    set_platform_token,
};

#[contract]
pub struct TieredPresale;

#[contractimpl]
impl TieredPresale {
    // ─── Factory ─────────────────────────────────────────

    /// One-time setup.
    ///
    /// - `owner` is the only address allowed to create pools.
    /// - `platform_token` is stamped into every pool created afterwards.
    pub fn init(env: Env, owner: Address, platform_token: Address) -> Result<(), Error> {
        owner.require_auth();
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        set_owner(&env, &owner);
        set_platform_token(&env, &platform_token);
        Ok(())
    }

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    /// Hand the factory over to `new_owner`. Only the current owner may call.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        factory::transfer_ownership(&env, &caller, &new_owner)
    }

    /// Create a new sale pool.
    ///
    /// - `caller` must authorize the call and be the owner.
    /// - `caller` must have approved this contract for `params.total_amount`
    ///   of `params.token`; the whole amount is pulled in before the pool is
    ///   registered.
    ///
    /// Returns the new pool id.
    pub fn create_pool(env: Env, caller: Address, params: PoolParams) -> Result<u64, Error> {
        caller.require_auth();
        factory::create_pool(&env, &caller, params)
    }

    pub fn pool_count(env: Env) -> u64 {
        get_pool_count(&env)
    }

    /// Entry `index` of the append-only pool log.
    pub fn pool_list(env: Env, index: u64) -> PoolListEntry {
        load_pool_list_entry(&env, index)
    }

    // ─── Directory ───────────────────────────────────────

    /// Pool id of the presale registered for `project_id`.
    pub fn get_presale_address(env: Env, project_id: u64) -> Result<u64, Error> {
        directory::presale_pool(&env, project_id)
    }

    pub fn presale(env: Env, project_id: u64) -> Option<PresaleEntry> {
        directory::entry(&env, project_id)
    }

    pub fn presale_count(env: Env) -> u64 {
        get_presale_count(&env)
    }

    // ─── Sale pool ───────────────────────────────────────

    /// Spend `amount` of the pool currency on sale tokens.
    ///
    /// - `investor` must authorize the call and have approved this contract
    ///   for at least `amount` of the currency.
    /// - Round 1 is open to tier 1 only, round 2 to tiers 1–4.
    /// - Cumulative spend may not exceed the investor's tier cap.
    ///
    /// Returns the token units added to the investor's entitlement.
    pub fn buy(env: Env, pool_id: u64, investor: Address, amount: i128) -> Result<i128, Error> {
        investor.require_auth();
        pool::buy(&env, pool_id, &investor, amount)
    }

    /// Transfer the caller's full entitlement once the release time is reached.
    pub fn claim_tokens(env: Env, pool_id: u64, investor: Address) -> Result<i128, Error> {
        investor.require_auth();
        pool::claim(&env, pool_id, &investor)
    }

    pub fn pool_config(env: Env, pool_id: u64) -> PoolConfig {
        load_pool_config(&env, pool_id)
    }

    pub fn pool_state(env: Env, pool_id: u64) -> PoolState {
        load_pool_state(&env, pool_id)
    }

    /// Phase of the pool at the current ledger time.
    pub fn phase(env: Env, pool_id: u64) -> Phase {
        let config = load_pool_config(&env, pool_id);
        phase::phase_at(&config, env.ledger().timestamp())
    }

    pub fn token(env: Env, pool_id: u64) -> Address {
        load_pool_config(&env, pool_id).token
    }

    pub fn currency(env: Env, pool_id: u64) -> Address {
        load_pool_config(&env, pool_id).currency
    }

    pub fn platform_token(env: Env, pool_id: u64) -> Address {
        load_pool_config(&env, pool_id).platform_token
    }

    pub fn round1_start(env: Env, pool_id: u64) -> u64 {
        load_pool_config(&env, pool_id).round1_start
    }

    pub fn round1_end(env: Env, pool_id: u64) -> u64 {
        load_pool_config(&env, pool_id).round1_end
    }

    pub fn round2_start(env: Env, pool_id: u64) -> u64 {
        load_pool_config(&env, pool_id).round2_start
    }

    pub fn round2_end(env: Env, pool_id: u64) -> u64 {
        load_pool_config(&env, pool_id).round2_end
    }

    pub fn release_time(env: Env, pool_id: u64) -> u64 {
        load_pool_config(&env, pool_id).release_time
    }

    pub fn price(env: Env, pool_id: u64) -> i128 {
        load_pool_config(&env, pool_id).price
    }

    pub fn total_amount(env: Env, pool_id: u64) -> i128 {
        load_pool_config(&env, pool_id).total_amount
    }

    pub fn available_tokens(env: Env, pool_id: u64) -> i128 {
        load_pool_state(&env, pool_id).available_tokens
    }

    pub fn total_amount_sold(env: Env, pool_id: u64) -> i128 {
        load_pool_state(&env, pool_id).total_amount_sold
    }

    pub fn number_participants(env: Env, pool_id: u64) -> u32 {
        load_pool_state(&env, pool_id).number_participants
    }

    /// Investment cap of `tier` (1–4) in the pool.
    pub fn tier_max_amount(env: Env, pool_id: u64, tier: u32) -> Result<i128, Error> {
        let config = load_pool_config(&env, pool_id);
        tiers::cap_of(&config, tier)
    }

    pub fn is_whitelisted(
        env: Env,
        pool_id: u64,
        tier: u32,
        investor: Address,
    ) -> Result<bool, Error> {
        tiers::check_tier(tier)?;
        if !has_pool(&env, pool_id) {
            return Err(Error::PoolNotFound);
        }
        Ok(get_tier_mask(&env, pool_id, &investor) & tiers::tier_bit(tier) != 0)
    }

    /// Investors in first-purchase order and their token entitlements, as two
    /// parallel vectors.
    pub fn get_investors(env: Env, pool_id: u64) -> (Vec<Address>, Vec<i128>) {
        pool::investors(&env, pool_id)
    }

    pub fn investor(env: Env, pool_id: u64, investor: Address) -> Option<InvestorRecord> {
        load_investor(&env, pool_id, &investor)
    }
}
