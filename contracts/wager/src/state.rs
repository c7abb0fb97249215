use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, OverflowError, Storage, Uint128, Uint64};
use cw_storage_plus::Item;

use crate::error::ContractError;

pub const DEFAULT_MIN_STAKE: Uint128 = Uint128::new(1_000_000);
pub const DEFAULT_MAX_STAKE: Uint128 = Uint128::new(10_000_000);

#[cw_serde]
pub struct Config {
    pub owner: Option<Addr>,
    pub initialized: bool,
    pub min_stake: Uint128,
    pub max_stake: Uint128,
}

impl Config {
    pub fn uninitialized() -> Self {
        Self {
            owner: None,
            initialized: false,
            min_stake: Uint128::zero(),
            max_stake: Uint128::zero(),
        }
    }

    pub fn stake_in_range(&self, amount: Uint128) -> bool {
        self.min_stake <= amount && amount <= self.max_stake
    }
}

/// The one token this contract custodies, fixed at instantiation.
#[cw_serde]
pub struct TokenInfo {
    pub contract: Addr,
    pub symbol: String,
}

#[cw_serde]
#[derive(Default)]
pub struct PlayStats {
    pub plays: u64,
    pub wins: u64,
    pub losses: u64,
    pub total_staked: Uint128,
    pub total_paid_out: Uint128,
}

impl PlayStats {
    /// Fold one settled play into the totals. `payout` is what was pushed back to the player.
    pub fn record(&mut self, won: bool, stake: Uint128, payout: Uint128) -> Result<(), OverflowError> {
        self.plays = bump(self.plays)?;
        if won {
            self.wins = bump(self.wins)?;
        } else {
            self.losses = bump(self.losses)?;
        }
        self.total_staked = self.total_staked.checked_add(stake)?;
        self.total_paid_out = self.total_paid_out.checked_add(payout)?;
        Ok(())
    }
}

fn bump(counter: u64) -> Result<u64, OverflowError> {
    Ok(Uint64::new(counter).checked_add(Uint64::one())?.u64())
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKEN: Item<TokenInfo> = Item::new("token");
pub const CONTRACT_BALANCE: Item<Uint128> = Item::new("contract_balance");
pub const STATS: Item<PlayStats> = Item::new("stats");

/// Load the config, failing unless Initialize has already succeeded.
pub fn load_initialized(storage: &dyn Storage) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if !config.initialized {
        return Err(ContractError::NotInitialized {});
    }
    Ok(config)
}
