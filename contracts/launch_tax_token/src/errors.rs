use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and off-chain display.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Construction-time configuration errors (codes 1-99).
    Configuration,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Pool registration / launch errors (codes 200-299).
    Launch,
    /// Balance, allowance and amount errors (codes 300-399).
    Ledger,
    /// Checked-math errors (codes 400-499).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum for the launch tax token.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1   -  99 : Configuration
///   100 - 199 : Authorization
///   200 - 299 : Launch
///   300 - 399 : Ledger
///   400 - 499 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Configuration (1-99) ---
    /// Decay schedule violates `final <= breakpoint <= initial <= 10000`
    /// or `0 < breakpoint_duration < final_duration`.
    InvalidSchedule = 1,

    // --- Authorization (100-199) ---
    /// Caller is not the token owner.
    Unauthorized = 100,

    // --- Launch (200-299) ---
    /// Pool candidate is the zero account.
    InvalidAddress = 200,

    /// The pool has already been registered; registration is single-use.
    AlreadyRegistered = 201,

    // --- Ledger (300-399) ---
    /// Sender balance does not cover the requested amount.
    InsufficientBalance = 300,

    /// Spender allowance does not cover the requested amount.
    InsufficientAllowance = 301,

    /// Amount arguments must be non-negative.
    NegativeAmount = 302,

    /// Allowance expiration ledger is already in the past.
    InvalidExpiration = 303,

    // --- Arithmetic (400-499) ---
    /// A checked operation overflowed, underflowed or divided by zero.
    ArithmeticFault = 400,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidSchedule => ErrorCategory::Configuration,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::InvalidAddress | ContractError::AlreadyRegistered => {
                ErrorCategory::Launch
            }
            ContractError::InsufficientBalance
            | ContractError::InsufficientAllowance
            | ContractError::NegativeAmount
            | ContractError::InvalidExpiration => ErrorCategory::Ledger,
            ContractError::ArithmeticFault => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::InvalidSchedule => "Fee schedule parameters are inconsistent",
            ContractError::Unauthorized => "Caller is not the token owner",
            ContractError::InvalidAddress => "Pool address must not be the zero account",
            ContractError::AlreadyRegistered => "Pool has already been registered",
            ContractError::InsufficientBalance => "Insufficient balance for transfer",
            ContractError::InsufficientAllowance => "Insufficient allowance for spender",
            ContractError::NegativeAmount => "Amount must be non-negative",
            ContractError::InvalidExpiration => "Expiration ledger is in the past",
            ContractError::ArithmeticFault => "Checked arithmetic overflowed or divided by zero",
        }
    }
}
