// contracts/tiered_presale/src/constants.rs

/// Number of investor tiers every pool carries.
pub const TIER_COUNT: u32 = 4;

/// Fixed-point scale of `PoolConfig::price` (7 decimals, the Stellar asset
/// convention). A price equal to `PRICE_SCALE` sells one token unit per
/// currency unit.
pub const PRICE_SCALE: i128 = 10_000_000;

/// Strkey of the all-zero contract address, treated as the null handle for
/// the token and currency of a pool.
pub const NULL_CONTRACT_STRKEY: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
