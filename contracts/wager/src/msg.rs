use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Int128, Uint128};

pub use crate::state::PlayStats;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the multi-token contract holding custody balances.
    pub token: String,
    /// Token symbol this contract accepts. Fixed for the life of the contract.
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    // One-shot: caller becomes owner, stake bounds default when omitted
    Initialize {
        min_stake: Option<Uint128>,
        max_stake: Option<Uint128>,
    },
    // Pull `amount` from the caller into the contract balance
    Deposit { amount: Uint128 },
    // Push `amount` from the contract balance to the caller
    Withdraw { amount: Uint128 },
    // Stake `amount`; settles win or loss in the same transaction
    Play { amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    GetOwner {},
    #[returns(ContractBalanceResponse)]
    GetContractBalance {},
    #[returns(ConfigResponse)]
    GetConfig {},
    #[returns(PlayStats)]
    GetStats {},
    /// Recompute a play outcome from the hex seed of a `play_outcome` event.
    #[returns(AuditOutcomeResponse)]
    AuditOutcome {
        player: String,
        amount: Uint128,
        seed: String,
    },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<Addr>,
}

#[cw_serde]
pub struct ContractBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Option<Addr>,
    pub initialized: bool,
    pub min_stake: Uint128,
    pub max_stake: Uint128,
    pub token: Addr,
    pub symbol: String,
}

#[cw_serde]
pub struct AuditOutcomeResponse {
    pub won: bool,
    pub contract_delta: Int128,
}
