// contracts/tiered_presale/src/directory.rs
//
// Presale directory: project id → pool. Entries are written once, by the
// factory, after the pool they point at is funded.

use soroban_sdk::Env;

use crate::errors::Error;
use crate::storage::{has_presale, load_presale, save_presale};
use crate::types::PresaleEntry;

pub fn is_registered(env: &Env, project_id: u64) -> bool {
    has_presale(env, project_id)
}

pub(crate) fn register(env: &Env, entry: &PresaleEntry) -> Result<(), Error> {
    if has_presale(env, entry.project_id) {
        return Err(Error::ProjectAlreadyRegistered);
    }
    save_presale(env, entry);
    Ok(())
}

pub fn entry(env: &Env, project_id: u64) -> Option<PresaleEntry> {
    load_presale(env, project_id)
}

/// Pool id of the presale registered for `project_id`.
pub fn presale_pool(env: &Env, project_id: u64) -> Result<u64, Error> {
    entry(env, project_id)
        .map(|e| e.pool_id)
        .ok_or(Error::PresaleNotFound)
}
