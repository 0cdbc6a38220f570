//! Fixed protocol constants.

/// Denominator for every rate: rates are basis points of `BASE`.
pub const BASE: u32 = 10_000;

/// Schedule durations are configured in minutes and stored in seconds.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Token decimals (Stellar asset convention).
pub const DECIMALS: u32 = 7;

/// Strkey of the all-zero ed25519 account. Never a valid pool.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
