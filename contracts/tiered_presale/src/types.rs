// contracts/tiered_presale/src/types.rs
//
// Pool data is split the same way for every pool id:
//   - PoolConfig   written once by the factory, never mutated
//   - PoolState    small counters rewritten by every buy / claim
//   - InvestorRecord  one entry per (pool, investor), created on first buy
//
// Whitelists are not part of PoolConfig; they are flattened into one
// tier bitmask per (pool, investor) so eligibility is a single read.

use soroban_sdk::{contracttype, Address, Vec};

/// Time-derived lifecycle of a pool. Never stored; see `phase::phase_at`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Before round 1 opens.
    Pending,
    /// Tier 1 only.
    Round1,
    /// Gap between the two rounds.
    InterRound,
    /// Tiers 1 through 4.
    Round2,
    /// Sale over, tokens still locked.
    Closed,
    /// Release time reached; entitlements can be claimed.
    Claimable,
}

/// Per-tier input to the factory: investment ceiling plus its whitelist.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierParams {
    /// Maximum cumulative currency a single investor of this tier may spend.
    pub max_investment: i128,
    pub whitelist: Vec<Address>,
}

/// Caller-supplied description of a new pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolParams {
    pub token: Address,
    pub currency: Address,
    pub round1_start: u64,
    pub round1_end: u64,
    pub round2_start: u64,
    pub round2_end: u64,
    pub release_time: u64,
    /// Currency units per token unit, scaled by `PRICE_SCALE`.
    pub price: i128,
    /// Token units offered; pulled from the owner at creation.
    pub total_amount: i128,
    /// Off-chain project identifier, the directory key.
    pub project_id: u64,
    /// Exactly `TIER_COUNT` entries; index 0 is tier 1.
    pub tiers: Vec<TierParams>,
}

/// Immutable configuration of a pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub id: u64,
    pub project_id: u64,
    pub token: Address,
    pub currency: Address,
    /// Platform token of the factory at the time the pool was created.
    pub platform_token: Address,
    pub round1_start: u64,
    pub round1_end: u64,
    pub round2_start: u64,
    pub round2_end: u64,
    pub release_time: u64,
    pub price: i128,
    pub total_amount: i128,
    /// Index 0 is tier 1.
    pub tier_caps: Vec<i128>,
    pub created_at: u64,
}

/// Mutable sale counters of a pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Token units still for sale.
    pub available_tokens: i128,
    /// Token units sold so far; `available_tokens + total_amount_sold == total_amount`.
    pub total_amount_sold: i128,
    pub number_participants: u32,
    /// Sale tokens custodied by the contract on behalf of this pool.
    pub token_balance: i128,
    /// Currency raised by this pool.
    pub currency_balance: i128,
    pub total_claimed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorRecord {
    /// Cumulative currency spent in this pool.
    pub spent: i128,
    /// Cumulative token units owed after release.
    pub entitlement: i128,
    /// Tier fixed at first purchase.
    pub tier: u32,
    pub claimed: bool,
    /// Position in the pool's investor order.
    pub index: u32,
}

/// One row of the factory's append-only pool log.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolListEntry {
    pub pool_id: u64,
    pub currency: Address,
    pub token: Address,
}

/// Directory row: where the presale of a project lives.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleEntry {
    pub project_id: u64,
    pub pool_id: u64,
    pub token: Address,
    pub currency: Address,
}
