//! Transfer interception.
//!
//! Every transfer is priced by [`quote`] and then settled against the
//! [`Ledger`]: the net amount moves to the recipient and the tax is burned
//! from the sender. Transfers that do not touch the registered pool, and all
//! transfers before launch, are never taxed.

use soroban_sdk::{contracttype, Address};

use crate::errors::ContractError;
use crate::launch::Launch;
use crate::ledger::Ledger;
use crate::math;
use crate::schedule::{self, FeeSchedule};

/// Split of a gross transfer amount. `net + tax == gross` always.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Amount credited to the recipient.
    pub net: i128,
    /// Amount burned from the sender.
    pub tax: i128,
    /// Rate applied, in basis points (0 when untaxed).
    pub rate: u32,
}

/// Price a transfer without touching any balance.
pub fn quote(
    launch: Option<&Launch>,
    schedule: &FeeSchedule,
    from: &Address,
    to: &Address,
    amount: i128,
    now: u64,
) -> Result<TransferOutcome, ContractError> {
    if amount < 0 {
        return Err(ContractError::NegativeAmount);
    }

    // The calculator is only reachable once a launch exists.
    let rate = match launch {
        Some(launch) if launch.touches(from, to) => {
            schedule::current_tax_rate(now, launch.launched_at, schedule)?
        }
        _ => 0,
    };

    let tax = math::bps(amount, rate)?;
    let net = math::sub_i128(amount, tax)?;
    if net < 0 {
        // Only reachable with a rate above BASE.
        return Err(ContractError::ArithmeticFault);
    }

    Ok(TransferOutcome { net, tax, rate })
}

/// Settle a transfer of `amount` from `from` to `to`, burning the tax.
///
/// The sender must hold the full gross amount before anything is moved, so a
/// failure leaves every balance untouched.
pub fn transfer<L: Ledger>(
    ledger: &L,
    launch: Option<&Launch>,
    schedule: &FeeSchedule,
    from: &Address,
    to: &Address,
    amount: i128,
    now: u64,
) -> Result<TransferOutcome, ContractError> {
    let outcome = quote(launch, schedule, from, to, amount, now)?;

    if ledger.balance(from) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    ledger.transfer(from, to, outcome.net)?;
    if outcome.tax > 0 {
        ledger.burn(from, outcome.tax)?;
    }

    Ok(outcome)
}
