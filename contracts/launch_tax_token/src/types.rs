use soroban_sdk::{contracttype, Address, String};

// ─── Token metadata ────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ─── Allowances ────────────────────────────────────────────────────────────

/// Spendable amount granted by `from` to `spender`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowanceValue {
    pub amount: i128,
    /// Last ledger sequence at which the allowance may be spent.
    pub expiration_ledger: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Owner allowed to register the pool.
    Owner,
    /// Name / symbol / decimals (TokenMetadata).
    Metadata,
    /// Decay parameters (FeeSchedule), written once by the constructor.
    Schedule,
    /// Pool + launch timestamp (Launch), absent until registration.
    Launch,
    /// Circulating supply.
    TotalSupply,
    /// Per-account balance.
    Balance(Address),
    /// Allowance keyed by (from, spender).
    Allowance(Address, Address),
}
