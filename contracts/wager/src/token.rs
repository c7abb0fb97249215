use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};

use crate::error::ContractError;
use crate::state::TokenInfo;

/// Execute messages understood by the multi-token contract.
#[cw_serde]
pub enum TokenExecuteMsg {
    Approve {
        spender: String,
        symbol: String,
        amount: Uint128,
    },
    Transfer {
        recipient: String,
        symbol: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        symbol: String,
        amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum TokenQueryMsg {
    #[returns(TokenBalanceResponse)]
    GetBalance { owner: String, symbol: String },
    #[returns(TokenAllowanceResponse)]
    GetAllowance {
        owner: String,
        spender: String,
        symbol: String,
    },
}

#[cw_serde]
pub struct TokenBalanceResponse {
    pub owner: String,
    pub symbol: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct TokenAllowanceResponse {
    pub allowance: Uint128,
}

impl TokenInfo {
    fn execute_msg(&self, msg: &TokenExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.contract.to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        }))
    }

    /// Pull `amount` from `owner` to `recipient` using a prior approval.
    pub fn transfer_from_msg(&self, owner: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute_msg(&TokenExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            symbol: self.symbol.clone(),
            amount,
        })
    }

    /// Push `amount` from this contract to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute_msg(&TokenExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            symbol: self.symbol.clone(),
            amount,
        })
    }

    pub fn balance(&self, querier: &QuerierWrapper, owner: &Addr) -> StdResult<Uint128> {
        let resp: TokenBalanceResponse = querier.query_wasm_smart(
            self.contract.to_string(),
            &TokenQueryMsg::GetBalance {
                owner: owner.to_string(),
                symbol: self.symbol.clone(),
            },
        )?;
        Ok(resp.balance)
    }

    pub fn allowance(&self, querier: &QuerierWrapper, owner: &Addr, spender: &Addr) -> StdResult<Uint128> {
        let resp: TokenAllowanceResponse = querier.query_wasm_smart(
            self.contract.to_string(),
            &TokenQueryMsg::GetAllowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
                symbol: self.symbol.clone(),
            },
        )?;
        Ok(resp.allowance)
    }

    /// Fail with `TransferFailed` unless `owner` has approved `spender` for
    /// `amount` and actually holds it. Checked up front so a pull never fails
    /// after the handler has staged its effects.
    pub fn ensure_pullable(
        &self,
        querier: &QuerierWrapper,
        owner: &Addr,
        spender: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        let allowance = self.allowance(querier, owner, spender)?;
        if allowance < amount {
            return Err(ContractError::TransferFailed {
                reason: format!("Insufficient allowance. Approved: {allowance}, Required: {amount}"),
            });
        }
        let balance = self.balance(querier, owner)?;
        if balance < amount {
            return Err(ContractError::TransferFailed {
                reason: format!("Insufficient {} balance. Available: {balance}, Required: {amount}", self.symbol),
            });
        }
        Ok(())
    }
}
