use soroban_sdk::{Address, Env, Symbol};

use crate::schedule::FeeSchedule;

/// Emitted once by the constructor.
///
/// # Topics
/// * `Symbol` - "token_created"
/// * `Address` - The owner receiving the initial supply
///
/// # Data
/// * `i128` - Initial supply
/// * `FeeSchedule` - Decay parameters (seconds)
pub fn emit_token_created(e: &Env, owner: &Address, initial_supply: i128, schedule: &FeeSchedule) {
    let topics = (Symbol::new(e, "token_created"), owner.clone());
    let data = (initial_supply, schedule.clone());
    e.events().publish(topics, data);
}

/// Emitted when the pool is registered and the decay clock starts.
///
/// # Topics
/// * `Symbol` - "pool_registered"
/// * `Address` - The pool
///
/// # Data
/// * `u64` - Launch timestamp
pub fn emit_pool_registered(e: &Env, pool: &Address, launched_at: u64) {
    let topics = (Symbol::new(e, "pool_registered"), pool.clone());
    e.events().publish(topics, launched_at);
}

/// Emitted for every pool transfer that burned a non-zero tax.
///
/// # Topics
/// * `Symbol` - "launch_tax"
/// * `Address` - Sender (tax is burned from this account)
/// * `Address` - Recipient
///
/// # Data
/// * `i128` - Tax burned
/// * `u32` - Rate applied, basis points
pub fn emit_launch_tax(e: &Env, from: &Address, to: &Address, tax: i128, rate: u32) {
    let topics = (Symbol::new(e, "launch_tax"), from.clone(), to.clone());
    e.events().publish(topics, (tax, rate));
}

/// Balance movement, in the standard token event shape.
///
/// # Topics
/// * `Symbol` - "transfer"
/// * `Address` - Sender
/// * `Address` - Recipient
///
/// # Data
/// * `i128` - Amount credited to the recipient
pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "transfer"), from.clone(), to.clone());
    e.events().publish(topics, amount);
}

/// # Topics
/// * `Symbol` - "mint"
/// * `Address` - Recipient
///
/// # Data
/// * `i128` - Amount created
pub fn emit_mint(e: &Env, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "mint"), to.clone());
    e.events().publish(topics, amount);
}

/// # Topics
/// * `Symbol` - "burn"
/// * `Address` - Account the units were destroyed from
///
/// # Data
/// * `i128` - Amount destroyed
pub fn emit_burn(e: &Env, from: &Address, amount: i128) {
    let topics = (Symbol::new(e, "burn"), from.clone());
    e.events().publish(topics, amount);
}

/// # Topics
/// * `Symbol` - "approve"
/// * `Address` - Owner of the funds
/// * `Address` - Spender
///
/// # Data
/// * `i128` - Allowance amount
/// * `u32` - Expiration ledger
pub fn emit_approve(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let topics = (Symbol::new(e, "approve"), from.clone(), spender.clone());
    e.events().publish(topics, (amount, expiration_ledger));
}
