//! Launch Tax Token Contract
//!
//! A fungible token that taxes every transfer touching a single liquidity
//! pool. The tax starts high at launch and decays linearly in two phases down
//! to a final rate; the taxed amount is burned, never redirected.
//!
//! ## Key design decisions
//!
//! - **Immutable schedule**: decay parameters are validated and stored by the
//!   constructor; no entry point writes them again.
//! - **Launch = pool registration**: the owner registers the pool exactly
//!   once, which also stamps the launch timestamp.
//! - **Capabilities, not inheritance**: the tax core consumes a `Ledger` and
//!   an `OwnerGate`; this contract supplies storage-backed implementations.
//! - **Checked arithmetic only**: any overflow, underflow or division by zero
//!   surfaces as `ArithmeticFault`.
//! - **All-or-nothing transfers**: the sender must cover the gross amount
//!   before the net transfer and the burn are applied.

#![no_std]

pub mod constants;
pub mod errors;
pub mod events;
pub mod launch;
pub mod ledger;
pub mod math;
pub mod schedule;
pub mod taxed_transfer;
pub mod types;

pub use errors::{ContractError, ErrorCategory, ErrorExt};
pub use launch::Launch;
pub use schedule::{FeeSchedule, ScheduleConfig};
pub use taxed_transfer::TransferOutcome;

use constants::DECIMALS;
use ledger::{Ledger, StorageLedger, StoredOwner};
use types::{DataKey, TokenMetadata};

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};



#[cfg(test)]
mod test_schedule;



#[cfg(test)]
mod test_errors;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn metadata(e: &Env) -> TokenMetadata {
    e.storage()
        .instance()
        .get(&DataKey::Metadata)
        .unwrap_or_else(|| panic!("not initialized"))
}

/// Run a taxed transfer against contract storage and report the burn.
fn settle(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    let ledger = StorageLedger::new(e);
    let launch = launch::load(e);
    let schedule = schedule::load(e);
    let outcome = taxed_transfer::transfer(
        &ledger,
        launch.as_ref(),
        &schedule,
        from,
        to,
        amount,
        e.ledger().timestamp(),
    )?;
    if outcome.tax > 0 {
        events::emit_launch_tax(e, from, to, outcome.tax, outcome.rate);
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct LaunchTaxToken;

#[contractimpl]
impl LaunchTaxToken {
    // ── Construction ───────────────────────────────────────────────────────

    /// Store metadata and the decay schedule, then mint `initial_supply`
    /// to `owner`.
    ///
    /// Aborts with `InvalidSchedule` if the schedule is inconsistent and
    /// with `NegativeAmount` if `initial_supply` is negative.
    pub fn __constructor(
        e: Env,
        owner: Address,
        name: String,
        symbol: String,
        initial_supply: i128,
        config: ScheduleConfig,
    ) {
        let schedule =
            FeeSchedule::from_config(&config).unwrap_or_else(|err| panic_with_error!(&e, err));

        StoredOwner::new(&e).set(&owner);
        e.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                name,
                symbol,
                decimals: DECIMALS,
            },
        );
        schedule::store(&e, &schedule);

        StorageLedger::new(&e)
            .mint(&owner, initial_supply)
            .unwrap_or_else(|err| panic_with_error!(&e, err));

        events::emit_token_created(&e, &owner, initial_supply, &schedule);
    }

    // ── Launch ─────────────────────────────────────────────────────────────

    /// Bind `pool` as the taxed counterparty and start the decay clock.
    ///
    /// Errors: `AlreadyRegistered` (any call after the first success,
    /// checked first), `Unauthorized` (caller is not the owner),
    /// `InvalidAddress` (zero account).
    pub fn register_pool(e: Env, caller: Address, pool: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let gate = StoredOwner::new(&e);
        let launch = launch::register_pool(&e, &gate, &caller, &pool, e.ledger().timestamp())?;
        events::emit_pool_registered(&e, &launch.pool, launch.launched_at);
        Ok(())
    }

    // ── Token operations ───────────────────────────────────────────────────

    /// Transfer `amount` from `from` to `to`. Pool transfers burn the
    /// current launch tax from the sender.
    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        settle(&e, &from, &to, amount)
    }

    /// Transfer on behalf of `from`. The allowance is charged the gross
    /// `amount`, tax included.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        let ledger = StorageLedger::new(&e);
        ledger.require_allowance(&from, &spender, amount)?;
        settle(&e, &from, &to, amount)?;
        ledger.spend_allowance(&from, &spender, amount)
    }

    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();
        StorageLedger::new(&e).approve(&from, &spender, amount, expiration_ledger)
    }

    /// Destroy `amount` of the caller's own balance. Never taxed.
    pub fn burn(e: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        StorageLedger::new(&e).burn(&from, amount)
    }

    pub fn burn_from(
        e: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        let ledger = StorageLedger::new(&e);
        ledger.require_allowance(&from, &spender, amount)?;
        ledger.burn(&from, amount)?;
        ledger.spend_allowance(&from, &spender, amount)
    }

    // ── Token queries ──────────────────────────────────────────────────────

    pub fn balance(e: Env, id: Address) -> i128 {
        StorageLedger::new(&e).balance(&id)
    }

    pub fn total_supply(e: Env) -> i128 {
        StorageLedger::new(&e).total_supply()
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        StorageLedger::new(&e).allowance(&from, &spender)
    }

    pub fn decimals(e: Env) -> u32 {
        metadata(&e).decimals
    }

    pub fn name(e: Env) -> String {
        metadata(&e).name
    }

    pub fn symbol(e: Env) -> String {
        metadata(&e).symbol
    }

    // ── Schedule / launch queries ──────────────────────────────────────────

    pub fn owner(e: Env) -> Address {
        StoredOwner::new(&e).get()
    }

    /// Registered pool, if any.
    pub fn pool(e: Env) -> Option<Address> {
        launch::load(&e).map(|launch| launch.pool)
    }

    /// Launch timestamp, if the pool has been registered.
    pub fn launch_timestamp(e: Env) -> Option<u64> {
        launch::load(&e).map(|launch| launch.launched_at)
    }

    pub fn schedule(e: Env) -> FeeSchedule {
        schedule::load(&e)
    }

    pub fn initial_rate(e: Env) -> u32 {
        schedule::load(&e).initial_rate
    }

    pub fn breakpoint_rate(e: Env) -> u32 {
        schedule::load(&e).breakpoint_rate
    }

    /// Seconds.
    pub fn breakpoint_duration(e: Env) -> u64 {
        schedule::load(&e).breakpoint_duration
    }

    pub fn final_rate(e: Env) -> u32 {
        schedule::load(&e).final_rate
    }

    /// Seconds.
    pub fn final_duration(e: Env) -> u64 {
        schedule::load(&e).final_duration
    }

    /// Rate a pool transfer would pay right now; 0 before launch.
    pub fn current_tax_rate(e: Env) -> Result<u32, ContractError> {
        match launch::load(&e) {
            Some(launch) => schedule::current_tax_rate(
                e.ledger().timestamp(),
                launch.launched_at,
                &schedule::load(&e),
            ),
            None => Ok(0),
        }
    }

    /// Net/tax split `transfer(from, to, amount)` would produce right now.
    pub fn quote_transfer(
        e: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<TransferOutcome, ContractError> {
        let launch = launch::load(&e);
        taxed_transfer::quote(
            launch.as_ref(),
            &schedule::load(&e),
            &from,
            &to,
            amount,
            e.ledger().timestamp(),
        )
    }
}
