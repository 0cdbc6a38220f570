//! One-shot pool registration.
//!
//! Registering the pool is the launch: it binds the pool address and starts
//! the decay clock in a single write. There is no path that clears or
//! replaces the record afterwards.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::constants::ZERO_ACCOUNT;
use crate::errors::ContractError;
use crate::ledger::OwnerGate;
use crate::types::DataKey;

/// Pool binding recorded at launch.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Launch {
    /// Counterparty whose involvement in a transfer triggers the tax.
    pub pool: Address,
    /// Ledger timestamp of registration; origin of the decay clock.
    pub launched_at: u64,
}

impl Launch {
    /// Whether a transfer between `from` and `to` touches the pool.
    pub fn touches(&self, from: &Address, to: &Address) -> bool {
        *from == self.pool || *to == self.pool
    }
}

pub fn is_zero_account(e: &Env, candidate: &Address) -> bool {
    *candidate == Address::from_string(&String::from_str(e, ZERO_ACCOUNT))
}

/// Launch record, `None` until the pool is registered.
pub fn load(e: &Env) -> Option<Launch> {
    e.storage().instance().get(&DataKey::Launch)
}

/// Register `candidate` as the pool and stamp the launch time.
///
/// Checks run in order: prior registration, owner gate, zero account.
/// Once a pool is set every call fails with `AlreadyRegistered`, whoever
/// the caller and whatever the candidate. Nothing is written unless all
/// three checks pass.
pub fn register_pool<G: OwnerGate>(
    e: &Env,
    gate: &G,
    caller: &Address,
    candidate: &Address,
    now: u64,
) -> Result<Launch, ContractError> {
    if e.storage().instance().has(&DataKey::Launch) {
        return Err(ContractError::AlreadyRegistered);
    }
    if !gate.is_owner(caller) {
        return Err(ContractError::Unauthorized);
    }
    if is_zero_account(e, candidate) {
        return Err(ContractError::InvalidAddress);
    }

    let launch = Launch {
        pool: candidate.clone(),
        launched_at: now,
    };
    e.storage().instance().set(&DataKey::Launch, &launch);
    Ok(launch)
}
