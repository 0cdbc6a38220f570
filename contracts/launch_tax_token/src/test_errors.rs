#![cfg(test)]

extern crate std;

use crate::{ContractError, ErrorCategory, ErrorExt};
use std::vec::Vec;

fn all_variants() -> Vec<ContractError> {
    std::vec![
        ContractError::InvalidSchedule,
        ContractError::Unauthorized,
        ContractError::InvalidAddress,
        ContractError::AlreadyRegistered,
        ContractError::InsufficientBalance,
        ContractError::InsufficientAllowance,
        ContractError::NegativeAmount,
        ContractError::InvalidExpiration,
        ContractError::ArithmeticFault,
    ]
}

// --- Wire code tests ---

#[test]
fn test_codes_are_stable() {
    assert_eq!(ContractError::InvalidSchedule as u32, 1);
    assert_eq!(ContractError::Unauthorized as u32, 100);
    assert_eq!(ContractError::InvalidAddress as u32, 200);
    assert_eq!(ContractError::AlreadyRegistered as u32, 201);
    assert_eq!(ContractError::InsufficientBalance as u32, 300);
    assert_eq!(ContractError::InsufficientAllowance as u32, 301);
    assert_eq!(ContractError::NegativeAmount as u32, 302);
    assert_eq!(ContractError::InvalidExpiration as u32, 303);
    assert_eq!(ContractError::ArithmeticFault as u32, 400);
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<u32> = all_variants().iter().map(|v| *v as u32).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all_variants().len());
}

// --- Category tests ---

#[test]
fn test_category_matches_code_block() {
    for variant in all_variants() {
        let expected = match variant as u32 {
            1..=99 => ErrorCategory::Configuration,
            100..=199 => ErrorCategory::Authorization,
            200..=299 => ErrorCategory::Launch,
            300..=399 => ErrorCategory::Ledger,
            400..=499 => ErrorCategory::Arithmetic,
            other => panic!("code {} outside any block", other),
        };
        assert_eq!(variant.category(), expected, "{:?}", variant);
    }
}

// --- Description tests ---

#[test]
fn test_descriptions_non_empty_and_distinct() {
    let descriptions: Vec<&str> = all_variants().iter().map(|v| v.description()).collect();
    for d in &descriptions {
        assert!(!d.is_empty());
    }
    let mut sorted = descriptions.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), descriptions.len());
}

#[test]
fn test_converts_into_sdk_error() {
    let err: soroban_sdk::Error = ContractError::AlreadyRegistered.into();
    assert_eq!(err, soroban_sdk::Error::from_contract_error(201));
}
