use cosmwasm_std::{StdResult, Storage, Uint128};
use outcome::PlayOutcome;

use crate::error::ContractError;
use crate::state::CONTRACT_BALANCE;

/// Custodied token balance of the contract.
///
/// Handlers load it, stage credits and debits in memory, and `save` only
/// once every precondition of the call has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: Uint128,
}

impl Ledger {
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        let balance = CONTRACT_BALANCE.may_load(storage)?.unwrap_or_default();
        Ok(Self { balance })
    }

    pub fn balance(&self) -> Uint128 {
        self.balance
    }

    pub fn credit(&mut self, amount: Uint128) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::ZeroAmount {});
        }
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: Uint128) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::ZeroAmount {});
        }
        self.ensure_covers(amount)?;
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }

    pub fn ensure_covers(&self, amount: Uint128) -> Result<(), ContractError> {
        if amount > self.balance {
            return Err(ContractError::InsufficientBalance {
                available: self.balance,
                requested: amount,
            });
        }
        Ok(())
    }

    /// Apply the contract side of a resolved play: debit on a win, credit on a loss.
    pub fn settle(&mut self, outcome: &PlayOutcome) -> Result<(), ContractError> {
        let amount = Uint128::new(outcome.amount);
        if outcome.won {
            self.debit(amount)
        } else {
            self.credit(amount)
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) -> StdResult<()> {
        CONTRACT_BALANCE.save(storage, &self.balance)
    }
}
