#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Int128, StdError, StdResult, Uint128};
use outcome::{FixedSeed, Seed};

use crate::error::ContractError;
use crate::ledger::Ledger;
use crate::msg::{AuditOutcomeResponse, ConfigResponse, ContractBalanceResponse, OwnerResponse, PlayStats, QueryMsg};
use crate::resolver::resolve_play;
use crate::state::{load_initialized, CONFIG, STATS, TOKEN};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let bin = match msg {
        QueryMsg::GetOwner {} => to_json_binary(&query_owner(deps)?)?,
        QueryMsg::GetContractBalance {} => to_json_binary(&query_contract_balance(deps)?)?,
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::GetStats {} => to_json_binary(&query_stats(deps)?)?,
        QueryMsg::AuditOutcome { player, amount, seed } => {
            to_json_binary(&query_audit_outcome(deps, player, amount, seed)?)?
        }
    };
    Ok(bin)
}

/// `None` until Initialize has run.
fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse { owner: config.owner })
}

fn query_contract_balance(deps: Deps) -> Result<ContractBalanceResponse, ContractError> {
    load_initialized(deps.storage)?;
    let ledger = Ledger::load(deps.storage)?;
    Ok(ContractBalanceResponse {
        balance: ledger.balance(),
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let token = TOKEN.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        initialized: config.initialized,
        min_stake: config.min_stake,
        max_stake: config.max_stake,
        token: token.contract,
        symbol: token.symbol,
    })
}

fn query_stats(deps: Deps) -> StdResult<PlayStats> {
    Ok(STATS.may_load(deps.storage)?.unwrap_or_default())
}

fn query_audit_outcome(
    deps: Deps,
    player: String,
    amount: Uint128,
    seed: String,
) -> Result<AuditOutcomeResponse, ContractError> {
    let player = deps.api.addr_validate(&player)?;
    let seed = Seed::from_hex(&seed)?;
    let (outcome, _) = resolve_play(&player, amount, &FixedSeed(seed));
    let contract_delta = outcome
        .contract_delta()
        .ok_or_else(|| StdError::msg("Stake does not fit a signed delta"))?;
    Ok(AuditOutcomeResponse {
        won: outcome.won,
        contract_delta: Int128::new(contract_delta),
    })
}
