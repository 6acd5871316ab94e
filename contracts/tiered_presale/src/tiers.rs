// contracts/tiered_presale/src/tiers.rs
//
// Tier table: one cap per tier plus a whitelist bitmask per investor.
// Tiers are numbered 1..=TIER_COUNT; bit `t - 1` of a mask stands for tier `t`.

use soroban_sdk::{Env, Vec};

use crate::constants::TIER_COUNT;
use crate::errors::Error;
use crate::storage::{get_tier_mask, set_tier_mask};
use crate::types::{Phase, PoolConfig, TierParams};

pub fn tier_bit(tier: u32) -> u32 {
    1 << (tier - 1)
}

pub fn check_tier(tier: u32) -> Result<(), Error> {
    if tier == 0 || tier > TIER_COUNT {
        return Err(Error::InvalidTier);
    }
    Ok(())
}

/// Lowest tier present in `mask`.
pub fn lowest_tier(mask: u32) -> Option<u32> {
    if mask == 0 {
        None
    } else {
        Some(mask.trailing_zeros() + 1)
    }
}

/// Cap of `tier` in `config`.
pub fn cap_of(config: &PoolConfig, tier: u32) -> Result<i128, Error> {
    check_tier(tier)?;
    config.tier_caps.get(tier - 1).ok_or(Error::InvalidTier)
}

/// Check the factory input table and extract the caps, tier 1 first.
pub fn caps_from_params(env: &Env, tiers: &Vec<TierParams>) -> Result<Vec<i128>, Error> {
    if tiers.len() != TIER_COUNT {
        return Err(Error::InvalidTierTable);
    }
    let mut caps = Vec::new(env);
    for tier in tiers.iter() {
        if tier.max_investment < 0 {
            return Err(Error::InvalidTierTable);
        }
        caps.push_back(tier.max_investment);
    }
    Ok(caps)
}

/// Write the whitelist of every tier for `pool_id`. An address listed in
/// several tiers ends up with all of their bits set.
pub fn write_whitelists(env: &Env, pool_id: u64, tiers: &Vec<TierParams>) {
    for (index, tier) in tiers.iter().enumerate() {
        let bit = tier_bit(index as u32 + 1);
        for investor in tier.whitelist.iter() {
            let mask = get_tier_mask(env, pool_id, &investor);
            if mask & bit == 0 {
                set_tier_mask(env, pool_id, &investor, mask | bit);
            }
        }
    }
}

/// Tier an investor buys under in `phase`.
///
/// `recorded` is the tier fixed by an earlier purchase in the same pool.
/// Fails with `NotWhitelisted` when none of the investor's tiers is admitted.
pub fn resolve_tier(mask: u32, phase: Phase, recorded: Option<u32>) -> Result<u32, Error> {
    let eligible = mask & phase.admitted_tiers();
    let lowest = lowest_tier(eligible).ok_or(Error::NotWhitelisted)?;
    Ok(recorded.unwrap_or(lowest))
}
