#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::ledger::Ledger;
use crate::msg::ExecuteMsg;
use crate::resolver::{block_entropy, resolve_play};
use crate::state::{load_initialized, CONFIG, DEFAULT_MAX_STAKE, DEFAULT_MIN_STAKE, STATS, TOKEN};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize { min_stake, max_stake } => execute_initialize(deps, info, min_stake, max_stake),
        ExecuteMsg::Deposit { amount } => execute_deposit(deps, env, info, amount),
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, info, amount),
        ExecuteMsg::Play { amount } => execute_play(deps, env, info, amount),
    }
}

pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    min_stake: Option<Uint128>,
    max_stake: Option<Uint128>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    // Rejected for everyone, the owner included
    if config.initialized {
        return Err(ContractError::AlreadyInitialized {});
    }

    let min_stake = min_stake.unwrap_or(DEFAULT_MIN_STAKE);
    let max_stake = max_stake.unwrap_or(DEFAULT_MAX_STAKE);
    if min_stake.is_zero() || min_stake > max_stake {
        return Err(ContractError::InvalidStakeRange { min_stake, max_stake });
    }

    config.owner = Some(info.sender.clone());
    config.initialized = true;
    config.min_stake = min_stake;
    config.max_stake = max_stake;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(
            Event::new("initialize")
                .add_attribute("owner", info.sender.as_str())
                .add_attribute("min_stake", min_stake)
                .add_attribute("max_stake", max_stake),
        )
        .add_attribute("action", "initialize")
        .add_attribute("owner", info.sender)
        .add_attribute("min_stake", min_stake)
        .add_attribute("max_stake", max_stake))
}

pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    load_initialized(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    let token = TOKEN.load(deps.storage)?;
    let mut ledger = Ledger::load(deps.storage)?;
    ledger.credit(amount)?;

    token.ensure_pullable(&deps.querier, &info.sender, &env.contract.address, amount)?;
    let pull = token.transfer_from_msg(&info.sender, &env.contract.address, amount)?;

    ledger.save(deps.storage)?;

    Ok(Response::new()
        .add_message(pull)
        .add_event(
            Event::new("deposit")
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("balance", ledger.balance()))
}

pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    load_initialized(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    let token = TOKEN.load(deps.storage)?;
    let mut ledger = Ledger::load(deps.storage)?;
    ledger.debit(amount)?;

    let push = token.transfer_msg(&info.sender, amount)?;
    ledger.save(deps.storage)?;

    Ok(Response::new()
        .add_message(push)
        .add_event(
            Event::new("withdraw")
                .add_attribute("recipient", info.sender.as_str())
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", info.sender)
        .add_attribute("remaining", ledger.balance()))
}

/// Stake `amount` and settle in the same call.
///
/// The stake is always pulled in. A win pushes back twice the stake, so the
/// player ends `+amount` and the contract `-amount`; a loss leaves the stake
/// with the contract. Every check runs before the outcome is drawn, so
/// whether the call fails never depends on how the play would have gone.
pub fn execute_play(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_initialized(deps.storage)?;
    if !config.stake_in_range(amount) {
        return Err(ContractError::AmountOutOfRange {
            amount,
            min_stake: config.min_stake,
            max_stake: config.max_stake,
        });
    }

    let token = TOKEN.load(deps.storage)?;
    let mut ledger = Ledger::load(deps.storage)?;

    // The contract must be able to pay out a win before the play is accepted
    ledger.ensure_covers(amount)?;
    token.ensure_pullable(&deps.querier, &info.sender, &env.contract.address, amount)?;

    let (outcome, seed) = resolve_play(&info.sender, amount, &block_entropy(&env));
    ledger.settle(&outcome)?;

    let mut transfers = vec![token.transfer_from_msg(&info.sender, &env.contract.address, amount)?];
    let payout = if outcome.won {
        let payout = amount.checked_add(amount)?;
        transfers.push(token.transfer_msg(&info.sender, payout)?);
        payout
    } else {
        Uint128::zero()
    };

    let mut stats = STATS.may_load(deps.storage)?.unwrap_or_default();
    stats.record(outcome.won, amount, payout)?;

    ledger.save(deps.storage)?;
    STATS.save(deps.storage, &stats)?;

    if outcome.won && ledger.balance().is_zero() {
        deps.api.debug("wager: contract balance drained by a winning play");
    }

    Ok(Response::new()
        .add_messages(transfers)
        .add_event(
            Event::new("play_outcome")
                .add_attribute("player", info.sender.as_str())
                .add_attribute("amount", amount)
                .add_attribute("won", outcome.won.to_string())
                .add_attribute("seed", seed.to_hex()),
        )
        .add_attribute("action", "play")
        .add_attribute("player", info.sender)
        .add_attribute("won", outcome.won.to_string())
        .add_attribute("balance", ledger.balance()))
}
