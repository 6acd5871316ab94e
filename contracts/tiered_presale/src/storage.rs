// contracts/tiered_presale/src/storage.rs
//
// Storage helpers for TieredPresale.
//
// Instance storage holds the factory-wide settings and counters; everything
// keyed by a pool id or project id lives in persistent storage and has its
// TTL bumped whenever it is touched.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::errors::Error;
use crate::types::{InvestorRecord, PoolConfig, PoolListEntry, PoolState, PresaleEntry};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PlatformToken,
    PoolCount,
    PresaleCount,
    PoolConfig(u64),
    PoolState(u64),
    PoolList(u64),
    /// Tier bitmask of an investor in a pool.
    Whitelist(u64, Address),
    Investor(u64, Address),
    /// Investor address by join order.
    InvestorAt(u64, u32),
    /// Directory entry by project id.
    Presale(u64),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ─────────────────────────────────────────────────────────
// Factory settings
// ─────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_platform_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PlatformToken)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_platform_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PlatformToken, token);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Counters
// ─────────────────────────────────────────────────────────

pub fn get_pool_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PoolCount)
        .unwrap_or(0)
}

/// Read and increment the pool counter. Returns the id for the next pool.
pub fn get_and_increment_pool_id(env: &Env) -> u64 {
    let id = get_pool_count(env);
    env.storage().instance().set(&DataKey::PoolCount, &(id + 1));
    bump_instance(env);
    id
}

pub fn get_presale_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PresaleCount)
        .unwrap_or(0)
}

fn increment_presale_count(env: &Env) {
    let count = get_presale_count(env) + 1;
    env.storage().instance().set(&DataKey::PresaleCount, &count);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Pool records
// ─────────────────────────────────────────────────────────

pub fn has_pool(env: &Env, pool_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::PoolConfig(pool_id))
}

/// Load a pool's config. Panics with `Error::PoolNotFound` if missing.
pub fn load_pool_config(env: &Env, pool_id: u64) -> PoolConfig {
    read_persistent(env, &DataKey::PoolConfig(pool_id))
        .unwrap_or_else(|| panic_with_error!(env, Error::PoolNotFound))
}

pub fn save_pool_config(env: &Env, config: &PoolConfig) {
    write_persistent(env, &DataKey::PoolConfig(config.id), config);
}

/// Load a pool's mutable counters. Panics with `Error::PoolNotFound` if missing.
pub fn load_pool_state(env: &Env, pool_id: u64) -> PoolState {
    read_persistent(env, &DataKey::PoolState(pool_id))
        .unwrap_or_else(|| panic_with_error!(env, Error::PoolNotFound))
}

pub fn save_pool_state(env: &Env, pool_id: u64, state: &PoolState) {
    write_persistent(env, &DataKey::PoolState(pool_id), state);
}

pub fn load_pool_list_entry(env: &Env, index: u64) -> PoolListEntry {
    read_persistent(env, &DataKey::PoolList(index))
        .unwrap_or_else(|| panic_with_error!(env, Error::PoolNotFound))
}

pub fn save_pool_list_entry(env: &Env, index: u64, entry: &PoolListEntry) {
    write_persistent(env, &DataKey::PoolList(index), entry);
}

// ─────────────────────────────────────────────────────────
// Whitelist
// ─────────────────────────────────────────────────────────

/// Tier bitmask of `investor` in `pool_id`; 0 when not whitelisted.
pub fn get_tier_mask(env: &Env, pool_id: u64, investor: &Address) -> u32 {
    read_persistent(env, &DataKey::Whitelist(pool_id, investor.clone())).unwrap_or(0)
}

pub fn set_tier_mask(env: &Env, pool_id: u64, investor: &Address, mask: u32) {
    write_persistent(env, &DataKey::Whitelist(pool_id, investor.clone()), &mask);
}

// ─────────────────────────────────────────────────────────
// Investors
// ─────────────────────────────────────────────────────────

pub fn load_investor(env: &Env, pool_id: u64, investor: &Address) -> Option<InvestorRecord> {
    read_persistent(env, &DataKey::Investor(pool_id, investor.clone()))
}

pub fn save_investor(env: &Env, pool_id: u64, investor: &Address, record: &InvestorRecord) {
    write_persistent(env, &DataKey::Investor(pool_id, investor.clone()), record);
}

pub fn load_investor_at(env: &Env, pool_id: u64, index: u32) -> Address {
    read_persistent(env, &DataKey::InvestorAt(pool_id, index))
        .unwrap_or_else(|| panic_with_error!(env, Error::PoolNotFound))
}

pub fn save_investor_at(env: &Env, pool_id: u64, index: u32, investor: &Address) {
    write_persistent(env, &DataKey::InvestorAt(pool_id, index), investor);
}

// ─────────────────────────────────────────────────────────
// Directory
// ─────────────────────────────────────────────────────────

pub fn load_presale(env: &Env, project_id: u64) -> Option<PresaleEntry> {
    read_persistent(env, &DataKey::Presale(project_id))
}

pub fn has_presale(env: &Env, project_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Presale(project_id))
}

/// Persist a directory entry and bump the presale counter.
pub fn save_presale(env: &Env, entry: &PresaleEntry) {
    write_persistent(env, &DataKey::Presale(entry.project_id), entry);
    increment_presale_count(env);
}
