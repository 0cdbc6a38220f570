//! Overflow-safe arithmetic helpers for fee calculations.
//!
//! Every helper uses checked arithmetic and reports
//! [`ContractError::ArithmeticFault`] on overflow/underflow/div-by-zero.
//! Nothing in the tax path may wrap or saturate.

use crate::constants::BASE;
use crate::errors::ContractError;

/// Checked `u32` subtraction.
#[inline]
pub fn sub_u32(a: u32, b: u32) -> Result<u32, ContractError> {
    a.checked_sub(b).ok_or(ContractError::ArithmeticFault)
}

/// Checked `u64` subtraction.
#[inline]
pub fn sub_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_sub(b).ok_or(ContractError::ArithmeticFault)
}

/// Checked `u64` multiplication.
#[inline]
pub fn mul_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_mul(b).ok_or(ContractError::ArithmeticFault)
}

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::ArithmeticFault)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::ArithmeticFault)
}

/// `span * numerator / denominator`, truncating.
///
/// Intermediates are `u128` so the product of a rate span and a duration in
/// seconds cannot overflow; the result must still fit back into `u32`.
#[inline]
pub fn scale_u32(span: u32, numerator: u64, denominator: u64) -> Result<u32, ContractError> {
    let product = (span as u128)
        .checked_mul(numerator as u128)
        .ok_or(ContractError::ArithmeticFault)?;
    let quotient = product
        .checked_div(denominator as u128)
        .ok_or(ContractError::ArithmeticFault)?;
    u32::try_from(quotient).map_err(|_| ContractError::ArithmeticFault)
}

/// Basis-point share of an amount: `floor(amount * rate / BASE)`.
#[inline]
pub fn bps(amount: i128, rate: u32) -> Result<i128, ContractError> {
    let numerator = amount
        .checked_mul(rate as i128)
        .ok_or(ContractError::ArithmeticFault)?;
    numerator
        .checked_div(BASE as i128)
        .ok_or(ContractError::ArithmeticFault)
}
