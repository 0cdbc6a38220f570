//! Decay schedule and the launch tax rate calculator.
//!
//! The tax decays linearly in two phases measured from the launch instant:
//!
//! ```text
//! rate
//!  initial ┤*
//!          │  *
//!          │    *
//! breakpt  ┤      *  .  .
//!          │               .  .
//!  final   ┤                     . . . . . .
//!          └──────┬──────────────┬──────────── elapsed
//!             breakpoint       final
//! ```
//!
//! All arithmetic is integer with truncating division, so the returned rate
//! can sit up to one basis point above the ideal line near a phase end.

use soroban_sdk::{contracttype, Env};

use crate::constants::{BASE, SECONDS_PER_MINUTE};
use crate::errors::ContractError;
use crate::math;
use crate::types::DataKey;

/// Schedule parameters as supplied at construction. Durations in minutes.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub initial_rate: u32,
    pub breakpoint_rate: u32,
    pub breakpoint_minutes: u64,
    pub final_rate: u32,
    pub final_minutes: u64,
}

/// Immutable decay parameters. Rates in basis points, durations in seconds.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Rate charged at the launch instant.
    pub initial_rate: u32,
    /// Rate reached at `breakpoint_duration`.
    pub breakpoint_rate: u32,
    /// End of the first (steep) phase, seconds after launch.
    pub breakpoint_duration: u64,
    /// Rate charged from `final_duration` onwards.
    pub final_rate: u32,
    /// End of the second phase, seconds after launch.
    pub final_duration: u64,
}

impl FeeSchedule {
    /// Converts minute durations to seconds and validates the result.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ContractError> {
        let schedule = FeeSchedule {
            initial_rate: config.initial_rate,
            breakpoint_rate: config.breakpoint_rate,
            breakpoint_duration: math::mul_u64(config.breakpoint_minutes, SECONDS_PER_MINUTE)?,
            final_rate: config.final_rate,
            final_duration: math::mul_u64(config.final_minutes, SECONDS_PER_MINUTE)?,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Requires `final <= breakpoint <= initial <= BASE` and
    /// `0 < breakpoint_duration < final_duration`.
    pub fn validate(&self) -> Result<(), ContractError> {
        let rates_ordered = self.final_rate <= self.breakpoint_rate
            && self.breakpoint_rate <= self.initial_rate
            && self.initial_rate <= BASE;
        let durations_ordered =
            self.breakpoint_duration > 0 && self.breakpoint_duration < self.final_duration;
        if rates_ordered && durations_ordered {
            Ok(())
        } else {
            Err(ContractError::InvalidSchedule)
        }
    }
}

/// Tax rate in basis points at `now` for a launch at `launched_at`.
///
/// A malformed schedule (one `validate` would reject) or a clock earlier
/// than the launch yields `ArithmeticFault` instead of a wrapped value.
pub fn current_tax_rate(
    now: u64,
    launched_at: u64,
    schedule: &FeeSchedule,
) -> Result<u32, ContractError> {
    let elapsed = math::sub_u64(now, launched_at)?;

    if elapsed >= schedule.final_duration {
        return Ok(schedule.final_rate);
    }

    if elapsed < schedule.breakpoint_duration {
        let span = math::sub_u32(schedule.initial_rate, schedule.breakpoint_rate)?;
        let drop = math::scale_u32(span, elapsed, schedule.breakpoint_duration)?;
        return math::sub_u32(schedule.initial_rate, drop);
    }

    // breakpoint_duration <= elapsed < final_duration
    let span = math::sub_u32(schedule.breakpoint_rate, schedule.final_rate)?;
    let into_phase = math::sub_u64(elapsed, schedule.breakpoint_duration)?;
    let phase_len = math::sub_u64(schedule.final_duration, schedule.breakpoint_duration)?;
    let drop = math::scale_u32(span, into_phase, phase_len)?;
    math::sub_u32(schedule.breakpoint_rate, drop)
}

pub fn store(e: &Env, schedule: &FeeSchedule) {
    e.storage().instance().set(&DataKey::Schedule, schedule);
}

/// Stored schedule. Always present once the constructor has run.
pub fn load(e: &Env) -> FeeSchedule {
    e.storage()
        .instance()
        .get(&DataKey::Schedule)
        .unwrap_or_else(|| panic!("not initialized"))
}
