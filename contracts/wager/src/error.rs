use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Ledger overflow: {0}")]
    Overflow(#[from] OverflowError),

    #[error("Contract already initialized")]
    AlreadyInitialized {},

    #[error("Contract not initialized")]
    NotInitialized {},

    #[error("Stake {amount} out of range. Allowed: {min_stake}..={max_stake}")]
    AmountOutOfRange {
        amount: Uint128,
        min_stake: Uint128,
        max_stake: Uint128,
    },

    #[error("Insufficient balance. Available: {available}, Requested: {requested}")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Token transfer failed: {reason}")]
    TransferFailed { reason: String },

    /// Reserved for owner-gated operations beyond Initialize.
    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Amount must be greater than zero")]
    ZeroAmount {},

    #[error("Invalid stake range: min_stake {min_stake} must be non-zero and not exceed max_stake {max_stake}")]
    InvalidStakeRange {
        min_stake: Uint128,
        max_stake: Uint128,
    },

    #[error("Invalid seed: {0}")]
    InvalidSeed(#[from] outcome::SeedError),
}
