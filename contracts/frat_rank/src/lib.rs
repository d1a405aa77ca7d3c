#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, String, Vec,
};

mod events;
mod storage;


/// One registered frat together with its current tally.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FratTally {
    pub name: String,
    pub votes: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    /// "You are not the owner."
    NotOwner = 2,
    /// "Frat already exists"
    FratAlreadyExists = 3,
    /// "Frat does not exist"
    FratDoesNotExist = 4,
}

const DEFAULT_FRATS: [&str; 4] = ["Pike", "KA", "SAE", "Sigma Chi"];

#[contract]
pub struct FratRank;

#[contractimpl]
impl FratRank {
    /// Fix the owner and seed the default frats, each with a zero tally.
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();

        if storage::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_owner(&env, &owner);

        let mut frats = Vec::new(&env);
        for name in DEFAULT_FRATS {
            let name = String::from_str(&env, name);
            storage::set_tally(&env, &name, 0);
            frats.push_back(name);
        }
        storage::set_frats(&env, &frats);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Every frat with its tally, in registration order.
    pub fn get_votes(env: Env) -> Vec<FratTally> {
        let mut tallies = Vec::new(&env);
        for name in storage::get_frats(&env).iter() {
            let votes = storage::get_tally(&env, &name);
            tallies.push_back(FratTally { name, votes });
        }
        tallies
    }

    /// Register a new frat with a zero tally. Owner only.
    pub fn add_frat(env: Env, caller: Address, name: String) -> Result<(), Error> {
        caller.require_auth();

        if caller != storage::get_owner(&env) {
            return Err(Error::NotOwner);
        }
        if storage::has_tally(&env, &name) {
            return Err(Error::FratAlreadyExists);
        }

        storage::set_tally(&env, &name, 0);
        let mut frats = storage::get_frats(&env);
        frats.push_back(name.clone());
        storage::set_frats(&env, &frats);

        events::added(&env, &name);
        Ok(())
    }

    /// Cast one vote for an existing frat and return its new tally.
    /// Open to any caller; repeat votes accumulate.
    pub fn vote(env: Env, caller: Address, name: String) -> Result<u32, Error> {
        caller.require_auth();

        if !storage::has_tally(&env, &name) {
            return Err(Error::FratDoesNotExist);
        }

        let new_count = storage::get_tally(&env, &name) + 1;
        storage::set_tally(&env, &name, new_count);

        events::voted(&env, &caller, &name, new_count);
        Ok(new_count)
    }
}
