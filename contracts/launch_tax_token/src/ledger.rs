//! Ledger and owner-gate capabilities.
//!
//! The tax core never reads or writes balances itself; it is handed a
//! [`Ledger`] and an [`OwnerGate`]. [`StorageLedger`] and [`StoredOwner`] are
//! the contract-storage implementations used by `LaunchTaxToken`.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::events;
use crate::math;
use crate::types::{AllowanceValue, DataKey};

/// Fungible balance bookkeeping consumed by the tax core.
pub trait Ledger {
    fn balance(&self, id: &Address) -> i128;

    fn total_supply(&self) -> i128;

    /// Move `amount` from `from` to `to`.
    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError>;

    /// Create `amount` new units for `to`.
    fn mint(&self, to: &Address, amount: i128) -> Result<(), ContractError>;

    /// Destroy `amount` units held by `from`.
    fn burn(&self, from: &Address, amount: i128) -> Result<(), ContractError>;
}

/// Single-owner authorization check.
pub trait OwnerGate {
    fn is_owner(&self, caller: &Address) -> bool;
}

fn require_non_negative(amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::NegativeAmount);
    }
    Ok(())
}

// ─── Storage-backed ledger ─────────────────────────────────────────────────

pub struct StorageLedger<'a> {
    env: &'a Env,
}

impl<'a> StorageLedger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    fn write_balance(&self, id: &Address, amount: i128) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &amount);
    }

    fn write_supply(&self, amount: i128) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::TotalSupply, &amount);
    }

    fn debit(&self, id: &Address, amount: i128) -> Result<(), ContractError> {
        let balance = self.balance(id);
        if balance < amount {
            return Err(ContractError::InsufficientBalance);
        }
        self.write_balance(id, math::sub_i128(balance, amount)?);
        Ok(())
    }

    fn credit(&self, id: &Address, amount: i128) -> Result<(), ContractError> {
        let balance = self.balance(id);
        self.write_balance(id, math::add_i128(balance, amount)?);
        Ok(())
    }

    /// Current allowance; expired grants read as zero.
    pub fn allowance(&self, from: &Address, spender: &Address) -> i128 {
        let key = DataKey::Allowance(from.clone(), spender.clone());
        match self
            .env
            .storage()
            .persistent()
            .get::<_, AllowanceValue>(&key)
        {
            Some(value) if value.expiration_ledger >= self.env.ledger().sequence() => value.amount,
            _ => 0,
        }
    }

    /// Replace the allowance `from` grants `spender`.
    pub fn approve(
        &self,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ContractError> {
        require_non_negative(amount)?;
        if amount > 0 && expiration_ledger < self.env.ledger().sequence() {
            return Err(ContractError::InvalidExpiration);
        }
        let key = DataKey::Allowance(from.clone(), spender.clone());
        let value = AllowanceValue {
            amount,
            expiration_ledger,
        };
        self.env.storage().persistent().set(&key, &value);
        events::emit_approve(self.env, from, spender, amount, expiration_ledger);
        Ok(())
    }

    /// Fails unless `spender` may still spend `amount` of `from`'s balance.
    pub fn require_allowance(
        &self,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        require_non_negative(amount)?;
        if self.allowance(from, spender) < amount {
            return Err(ContractError::InsufficientAllowance);
        }
        Ok(())
    }

    /// Reduce the allowance by `amount`, keeping its expiration.
    pub fn spend_allowance(
        &self,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        self.require_allowance(from, spender, amount)?;
        if amount == 0 {
            return Ok(());
        }
        let key = DataKey::Allowance(from.clone(), spender.clone());
        let mut value: AllowanceValue = self
            .env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::InsufficientAllowance)?;
        value.amount = math::sub_i128(value.amount, amount)?;
        self.env.storage().persistent().set(&key, &value);
        Ok(())
    }
}

impl Ledger for StorageLedger<'_> {
    fn balance(&self, id: &Address) -> i128 {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn total_supply(&self) -> i128 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
        require_non_negative(amount)?;
        self.debit(from, amount)?;
        self.credit(to, amount)?;
        events::emit_transfer(self.env, from, to, amount);
        Ok(())
    }

    fn mint(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        require_non_negative(amount)?;
        let supply = math::add_i128(self.total_supply(), amount)?;
        self.credit(to, amount)?;
        self.write_supply(supply);
        events::emit_mint(self.env, to, amount);
        Ok(())
    }

    fn burn(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        require_non_negative(amount)?;
        self.debit(from, amount)?;
        let supply = math::sub_i128(self.total_supply(), amount)?;
        self.write_supply(supply);
        events::emit_burn(self.env, from, amount);
        Ok(())
    }
}

// ─── Stored owner ──────────────────────────────────────────────────────────

pub struct StoredOwner<'a> {
    env: &'a Env,
}

impl<'a> StoredOwner<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn set(&self, owner: &Address) {
        self.env.storage().instance().set(&DataKey::Owner, owner);
    }

    pub fn get(&self) -> Address {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .unwrap_or_else(|| panic!("not initialized"))
    }
}

impl OwnerGate for StoredOwner<'_> {
    fn is_owner(&self, caller: &Address) -> bool {
        self.get() == *caller
    }
}
