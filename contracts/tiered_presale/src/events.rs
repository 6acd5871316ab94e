use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreated {
    pub pool_id: u64,
    pub project_id: u64,
    pub token: Address,
    pub currency: Address,
    pub total_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensPurchased {
    pub pool_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimed {
    pub pool_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_pool_created(
    env: &Env,
    pool_id: u64,
    project_id: u64,
    token: Address,
    currency: Address,
    total_amount: i128,
) {
    let topics = (symbol_short!("created"), pool_id);
    let data = PoolCreated {
        pool_id,
        project_id,
        token,
        currency,
        total_amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_tokens_purchased(
    env: &Env,
    pool_id: u64,
    investor: Address,
    amount: i128,
    tokens: i128,
) {
    let topics = (symbol_short!("purchase"), pool_id);
    let data = TokensPurchased {
        pool_id,
        investor,
        amount,
        tokens,
    };
    env.events().publish(topics, data);
}

pub fn emit_tokens_claimed(env: &Env, pool_id: u64, investor: Address, amount: i128) {
    let topics = (symbol_short!("claimed"), pool_id);
    let data = TokensClaimed {
        pool_id,
        investor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (symbol_short!("owner"),);
    let data = OwnershipTransferred {
        previous_owner,
        new_owner,
    };
    env.events().publish(topics, data);
}
