use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

const OWNER: Symbol = symbol_short!("owner");
const FRATS: Symbol = symbol_short!("frats");
const VOTES: Symbol = symbol_short!("votes");

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&OWNER)
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&OWNER).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Registered frat names in registration order.
pub fn get_frats(env: &Env) -> Vec<String> {
    env.storage()
        .instance()
        .get(&FRATS)
        .unwrap_or(Vec::new(env))
}

pub fn set_frats(env: &Env, frats: &Vec<String>) {
    env.storage().instance().set(&FRATS, frats);
}

pub fn has_tally(env: &Env, name: &String) -> bool {
    env.storage().persistent().has(&(VOTES, name.clone()))
}

pub fn get_tally(env: &Env, name: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&(VOTES, name.clone()))
        .unwrap_or(0)
}

pub fn set_tally(env: &Env, name: &String, votes: u32) {
    env.storage().persistent().set(&(VOTES, name.clone()), &votes);
}
