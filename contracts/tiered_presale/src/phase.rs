// contracts/tiered_presale/src/phase.rs

use crate::errors::Error;
use crate::types::{Phase, PoolConfig};

/// Phase of a pool at ledger time `now`.
///
/// Windows are half-open: a round is live from its start up to, but not
/// including, its end. Empty windows (`round1_end == round2_start`,
/// `round2_end == release_time`) are skipped naturally.
pub fn phase_at(config: &PoolConfig, now: u64) -> Phase {
    if now < config.round1_start {
        Phase::Pending
    } else if now < config.round1_end {
        Phase::Round1
    } else if now < config.round2_start {
        Phase::InterRound
    } else if now < config.round2_end {
        Phase::Round2
    } else if now < config.release_time {
        Phase::Closed
    } else {
        Phase::Claimable
    }
}

impl Phase {
    /// Error a purchase gets in this phase, or `None` when purchases are open.
    pub fn purchase_error(&self) -> Option<Error> {
        match self {
            Phase::Pending => Some(Error::SaleNotStarted),
            Phase::Round1 | Phase::Round2 => None,
            Phase::InterRound => Some(Error::BetweenRounds),
            Phase::Closed | Phase::Claimable => Some(Error::SaleClosed),
        }
    }

    /// Bitmask of tiers allowed to buy in this phase.
    pub fn admitted_tiers(&self) -> u32 {
        match self {
            Phase::Round1 => 0b0001,
            Phase::Round2 => 0b1111,
            _ => 0,
        }
    }
}
