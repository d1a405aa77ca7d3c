use soroban_sdk::{symbol_short, Address, Env, String};

pub fn added(env: &Env, name: &String) {
    env.events().publish((symbol_short!("added"),), name.clone());
}

pub fn voted(env: &Env, voter: &Address, name: &String, new_count: u32) {
    env.events().publish(
        (symbol_short!("voted"), voter.clone()),
        (name.clone(), new_count),
    );
}
