#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::testing::MockApi;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdError, StdResult, Storage,
    Uint128,
};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Map;
use wager::msg::{ContractBalanceResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use wager::token::{TokenAllowanceResponse, TokenBalanceResponse, TokenExecuteMsg, TokenQueryMsg};

pub const SYMBOL: &str = "TOKEN";
pub const STARTING_BALANCE: u128 = 1_000_000_000;

// ===== Mock multi-token contract =====

#[cw_serde]
pub struct InitialBalance {
    pub address: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct TokenInstantiateMsg {
    pub symbol: String,
    pub initial_balances: Vec<InitialBalance>,
}

const BALANCES: Map<(&str, &Addr), Uint128> = Map::new("balances");
const ALLOWANCES: Map<(&str, &Addr, &Addr), Uint128> = Map::new("allowances");

fn token_instantiate(deps: DepsMut, _env: Env, _info: MessageInfo, msg: TokenInstantiateMsg) -> StdResult<Response> {
    for initial in msg.initial_balances {
        let address = deps.api.addr_validate(&initial.address)?;
        BALANCES.save(deps.storage, (msg.symbol.as_str(), &address), &initial.amount)?;
    }
    Ok(Response::new())
}

fn move_balance(storage: &mut dyn Storage, symbol: &str, from: &Addr, to: &Addr, amount: Uint128) -> StdResult<()> {
    let from_balance = BALANCES.may_load(storage, (symbol, from))?.unwrap_or_default();
    if from_balance < amount {
        return Err(StdError::msg(format!(
            "Insufficient {symbol} balance. Available: {from_balance}, Required: {amount}"
        )));
    }
    BALANCES.save(storage, (symbol, from), &(from_balance - amount))?;
    let to_balance = BALANCES.may_load(storage, (symbol, to))?.unwrap_or_default();
    BALANCES.save(storage, (symbol, to), &(to_balance + amount))?;
    Ok(())
}

fn token_execute(deps: DepsMut, _env: Env, info: MessageInfo, msg: TokenExecuteMsg) -> StdResult<Response> {
    match msg {
        TokenExecuteMsg::Approve { spender, symbol, amount } => {
            let spender = deps.api.addr_validate(&spender)?;
            ALLOWANCES.save(deps.storage, (symbol.as_str(), &info.sender, &spender), &amount)?;
            Ok(Response::new().add_attribute("action", "approve"))
        }
        TokenExecuteMsg::Transfer { recipient, symbol, amount } => {
            let recipient = deps.api.addr_validate(&recipient)?;
            move_balance(deps.storage, &symbol, &info.sender, &recipient, amount)?;
            Ok(Response::new().add_attribute("action", "transfer"))
        }
        TokenExecuteMsg::TransferFrom {
            owner,
            recipient,
            symbol,
            amount,
        } => {
            let owner = deps.api.addr_validate(&owner)?;
            let recipient = deps.api.addr_validate(&recipient)?;
            let key = (symbol.as_str(), &owner, &info.sender);
            let allowance = ALLOWANCES.may_load(deps.storage, key)?.unwrap_or_default();
            if allowance < amount {
                return Err(StdError::msg("Insufficient allowance"));
            }
            ALLOWANCES.save(deps.storage, key, &(allowance - amount))?;
            move_balance(deps.storage, &symbol, &owner, &recipient, amount)?;
            Ok(Response::new().add_attribute("action", "transfer_from"))
        }
    }
}

fn token_query(deps: Deps, _env: Env, msg: TokenQueryMsg) -> StdResult<Binary> {
    match msg {
        TokenQueryMsg::GetBalance { owner, symbol } => {
            let address = deps.api.addr_validate(&owner)?;
            let balance = BALANCES
                .may_load(deps.storage, (symbol.as_str(), &address))?
                .unwrap_or_default();
            to_json_binary(&TokenBalanceResponse { owner, symbol, balance })
        }
        TokenQueryMsg::GetAllowance { owner, spender, symbol } => {
            let owner = deps.api.addr_validate(&owner)?;
            let spender = deps.api.addr_validate(&spender)?;
            let allowance = ALLOWANCES
                .may_load(deps.storage, (symbol.as_str(), &owner, &spender))?
                .unwrap_or_default();
            to_json_binary(&TokenAllowanceResponse { allowance })
        }
    }
}

// ===== Test environment =====

pub struct TestEnv {
    pub app: App,
    pub token: Addr,
    pub contract: Addr,
    pub owner: Addr,
    pub player: Addr,
}

/// Token and wager contracts deployed; Initialize not yet called.
pub fn setup() -> TestEnv {
    let api = MockApi::default();
    let owner = api.addr_make("owner");
    let player = api.addr_make("player");

    let mut app = App::default();

    let token_code = app.store_code(Box::new(ContractWrapper::new(
        token_execute,
        token_instantiate,
        token_query,
    )));
    let token = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &TokenInstantiateMsg {
                symbol: SYMBOL.to_string(),
                initial_balances: vec![
                    InitialBalance {
                        address: owner.to_string(),
                        amount: Uint128::new(STARTING_BALANCE),
                    },
                    InitialBalance {
                        address: player.to_string(),
                        amount: Uint128::new(STARTING_BALANCE),
                    },
                ],
            },
            &[],
            "token",
            None,
        )
        .unwrap();

    let wager_code = app.store_code(Box::new(ContractWrapper::new(
        wager::contract::execute,
        wager::contract::instantiate,
        wager::contract::query,
    )));
    let contract = app
        .instantiate_contract(
            wager_code,
            owner.clone(),
            &InstantiateMsg {
                token: token.to_string(),
                symbol: SYMBOL.to_string(),
            },
            &[],
            "wager",
            Some(owner.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        token,
        contract,
        owner,
        player,
    }
}

/// Deployed, initialized by `owner` with default stake bounds, both accounts
/// approved for their full starting balance.
pub fn setup_initialized() -> TestEnv {
    let mut env = setup();
    let owner = env.owner.clone();
    let player = env.player.clone();
    initialize(&mut env, &owner, None, None).unwrap();
    approve(&mut env, &owner, STARTING_BALANCE);
    approve(&mut env, &player, STARTING_BALANCE);
    env
}

pub fn initialize(
    env: &mut TestEnv,
    sender: &Addr,
    min_stake: Option<u128>,
    max_stake: Option<u128>,
) -> Result<AppResponse, String> {
    env.app.execute_contract(
        sender.clone(),
        env.contract.clone(),
        &ExecuteMsg::Initialize {
            min_stake: min_stake.map(Uint128::new),
            max_stake: max_stake.map(Uint128::new),
        },
        &[],
    )
    .map_err(|err| format!("{err:?}"))
}

pub fn approve(env: &mut TestEnv, owner: &Addr, amount: u128) {
    env.app
        .execute_contract(
            owner.clone(),
            env.token.clone(),
            &TokenExecuteMsg::Approve {
                spender: env.contract.to_string(),
                symbol: SYMBOL.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap();
}

pub fn deposit(env: &mut TestEnv, sender: &Addr, amount: u128) -> Result<AppResponse, String> {
    env.app.execute_contract(
        sender.clone(),
        env.contract.clone(),
        &ExecuteMsg::Deposit {
            amount: Uint128::new(amount),
        },
        &[],
    )
    .map_err(|err| format!("{err:?}"))
}

pub fn withdraw(env: &mut TestEnv, sender: &Addr, amount: u128) -> Result<AppResponse, String> {
    env.app.execute_contract(
        sender.clone(),
        env.contract.clone(),
        &ExecuteMsg::Withdraw {
            amount: Uint128::new(amount),
        },
        &[],
    )
    .map_err(|err| format!("{err:?}"))
}

pub fn play(env: &mut TestEnv, sender: &Addr, amount: u128) -> Result<AppResponse, String> {
    env.app.execute_contract(
        sender.clone(),
        env.contract.clone(),
        &ExecuteMsg::Play {
            amount: Uint128::new(amount),
        },
        &[],
    )
    .map_err(|err| format!("{err:?}"))
}

pub fn token_balance(env: &TestEnv, owner: &Addr) -> Uint128 {
    let resp: TokenBalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &TokenQueryMsg::GetBalance {
                owner: owner.to_string(),
                symbol: SYMBOL.to_string(),
            },
        )
        .unwrap();
    resp.balance
}

pub fn contract_balance(env: &TestEnv) -> Uint128 {
    let resp: ContractBalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.contract, &QueryMsg::GetContractBalance {})
        .unwrap();
    resp.balance
}

/// Custom events emitted by the wager contract, e.g. `"deposit"` -> `wasm-deposit`.
pub fn wager_events<'a>(resp: &'a AppResponse, name: &str) -> Vec<&'a Event> {
    let ty = format!("wasm-{name}");
    resp.events.iter().filter(|e| e.ty == ty).collect()
}

pub fn attr(event: &Event, key: &str) -> String {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("attribute {key} missing from {}", event.ty))
}
