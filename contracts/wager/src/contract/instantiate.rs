#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdError, Uint128};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::InstantiateMsg;
use crate::state::{Config, PlayStats, TokenInfo, CONFIG, CONTRACT_BALANCE, STATS, TOKEN};

const CONTRACT_NAME: &str = "crates.io:wager";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binds the contract to its token. Ownership and stake bounds are set later
/// by `ExecuteMsg::Initialize`.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.symbol.trim().is_empty() {
        return Err(ContractError::Std(StdError::msg("Token symbol cannot be empty")));
    }
    let token = TokenInfo {
        contract: deps.api.addr_validate(&msg.token)?,
        symbol: msg.symbol,
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    TOKEN.save(deps.storage, &token)?;
    CONFIG.save(deps.storage, &Config::uninitialized())?;
    CONTRACT_BALANCE.save(deps.storage, &Uint128::zero())?;
    STATS.save(deps.storage, &PlayStats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("token", token.contract)
        .add_attribute("symbol", token.symbol))
}
