// contracts/tiered_presale/src/ledger.rs
//
// Movements of the sale token and the payment currency. Both are reached
// through the standard token interface; the contract address is the
// custodian of every pool's funds.

use soroban_sdk::{token, Address, Env};

use crate::errors::Error;

/// Debit `amount` of `asset` from `from` into the contract through the
/// allowance `from` granted to the contract.
///
/// Allowance and balance are read fresh on every call so a change made
/// between two invocations is always honoured.
pub fn pull(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, asset);
    let this = env.current_contract_address();

    if client.allowance(from, &this) < amount {
        return Err(Error::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        return Err(Error::InsufficientBalance);
    }

    client.transfer_from(&this, from, &this, &amount);
    Ok(())
}

/// Pay `amount` of `asset` out of the contract to `to`.
pub fn push(env: &Env, asset: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(env, asset);
    client.transfer(&env.current_contract_address(), to, &amount);
}
