//! Tests for the decay calculator and schedule validation.

#![cfg(test)]

use crate::errors::ContractError;
use crate::math;
use crate::schedule::{current_tax_rate, FeeSchedule, ScheduleConfig};
use crate::test_helpers::{reference_config, reference_schedule};

const LAUNCH: u64 = 1_000;

fn rate_at(schedule: &FeeSchedule, elapsed: u64) -> u32 {
    current_tax_rate(LAUNCH + elapsed, LAUNCH, schedule).unwrap()
}

// ─── Reference scenario ────────────────────────────────────────────────────

#[test]
fn test_reference_scenario() {
    let s = reference_schedule();
    assert_eq!(rate_at(&s, 0), 9_900);
    assert_eq!(rate_at(&s, 150), 6_450);
    assert_eq!(rate_at(&s, 300), 3_000);
    assert_eq!(rate_at(&s, 900), 1_800);
    assert_eq!(rate_at(&s, 1_800), 0);
    assert_eq!(rate_at(&s, 5_000), 0);
}

#[test]
fn test_breakpoint_takes_phase_two_branch() {
    // Phase 1 is strict `<`; at the seam phase 2 starts with zero drop.
    let s = reference_schedule();
    assert_eq!(rate_at(&s, 299), 3_023);
    assert_eq!(rate_at(&s, 300), s.breakpoint_rate);
}

#[test]
fn test_final_duration_and_beyond_return_final_rate() {
    let s = FeeSchedule {
        final_rate: 250,
        ..reference_schedule()
    };
    assert_eq!(rate_at(&s, 1_799), 252);
    assert_eq!(rate_at(&s, 1_800), 250);
    assert_eq!(rate_at(&s, u64::MAX - LAUNCH), 250);
}

// ─── Truncation ────────────────────────────────────────────────────────────

#[test]
fn test_phase_one_truncates_toward_zero() {
    // 1000 bps over 7 s: 1000 * 3 / 7 = 428.57 → drop 428
    let s = FeeSchedule {
        initial_rate: 2_000,
        breakpoint_rate: 1_000,
        breakpoint_duration: 7,
        final_rate: 0,
        final_duration: 100,
    };
    assert_eq!(rate_at(&s, 3), 1_572);
    assert_eq!(rate_at(&s, 6), 1_143);
}

#[test]
fn test_phase_two_truncates_toward_zero() {
    // 1000 bps over 93 s: 1000 * 92 / 93 = 989.2 → drop 989
    let s = FeeSchedule {
        initial_rate: 2_000,
        breakpoint_rate: 1_000,
        breakpoint_duration: 7,
        final_rate: 0,
        final_duration: 100,
    };
    assert_eq!(rate_at(&s, 99), 11);
    assert_eq!(rate_at(&s, 100), 0);
}

#[test]
fn test_flat_schedule_is_constant() {
    let s = FeeSchedule {
        initial_rate: 500,
        breakpoint_rate: 500,
        breakpoint_duration: 60,
        final_rate: 500,
        final_duration: 120,
    };
    for elapsed in [0, 30, 60, 90, 120, 10_000] {
        assert_eq!(rate_at(&s, elapsed), 500);
    }
}

#[test]
fn test_full_rate_schedule_stays_in_range() {
    let s = FeeSchedule {
        initial_rate: 10_000,
        breakpoint_rate: 10_000,
        breakpoint_duration: 1,
        final_rate: 0,
        final_duration: u64::MAX,
    };
    assert_eq!(rate_at(&s, 0), 10_000);
    assert_eq!(rate_at(&s, u64::MAX / 2), 5_001);
}

// ─── Monotonic walk ────────────────────────────────────────────────────────

#[test]
fn test_reference_rate_never_increases() {
    let s = reference_schedule();
    let mut previous = rate_at(&s, 0);
    for elapsed in 1..=2_000 {
        let rate = rate_at(&s, elapsed);
        assert!(rate <= previous, "rate rose at elapsed = {}", elapsed);
        previous = rate;
    }
}

// ─── Faults ────────────────────────────────────────────────────────────────

#[test]
fn test_clock_before_launch_faults() {
    let s = reference_schedule();
    assert_eq!(
        current_tax_rate(LAUNCH - 1, LAUNCH, &s),
        Err(ContractError::ArithmeticFault)
    );
}

#[test]
fn test_rising_phase_one_faults() {
    let s = FeeSchedule {
        initial_rate: 1_000,
        breakpoint_rate: 2_000,
        ..reference_schedule()
    };
    assert_eq!(
        current_tax_rate(LAUNCH + 10, LAUNCH, &s),
        Err(ContractError::ArithmeticFault)
    );
}

#[test]
fn test_rising_phase_two_faults() {
    let s = FeeSchedule {
        final_rate: 5_000,
        ..reference_schedule()
    };
    assert_eq!(
        current_tax_rate(LAUNCH + 600, LAUNCH, &s),
        Err(ContractError::ArithmeticFault)
    );
}

// ─── Validation ────────────────────────────────────────────────────────────

#[test]
fn test_from_config_converts_minutes() {
    assert_eq!(
        FeeSchedule::from_config(&reference_config()),
        Ok(reference_schedule())
    );
}

#[test]
fn test_validate_rejects_zero_breakpoint() {
    let config = ScheduleConfig {
        breakpoint_minutes: 0,
        ..reference_config()
    };
    assert_eq!(
        FeeSchedule::from_config(&config),
        Err(ContractError::InvalidSchedule)
    );
}

#[test]
fn test_validate_rejects_final_before_breakpoint() {
    let s = FeeSchedule {
        breakpoint_duration: 600,
        final_duration: 300,
        ..reference_schedule()
    };
    assert_eq!(s.validate(), Err(ContractError::InvalidSchedule));
}

#[test]
fn test_validate_accepts_boundary_rates() {
    let s = FeeSchedule {
        initial_rate: 10_000,
        breakpoint_rate: 0,
        final_rate: 0,
        ..reference_schedule()
    };
    assert_eq!(s.validate(), Ok(()));
}

// ─── Math helpers ──────────────────────────────────────────────────────────

#[test]
fn test_bps_floor() {
    assert_eq!(math::bps(1_000, 6_450), Ok(645));
    assert_eq!(math::bps(3, 1_800), Ok(0));
    assert_eq!(math::bps(i128::MAX, 10_000), Err(ContractError::ArithmeticFault));
}

#[test]
fn test_scale_u32_divide_by_zero_faults() {
    assert_eq!(math::scale_u32(100, 1, 0), Err(ContractError::ArithmeticFault));
}
