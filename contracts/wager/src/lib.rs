pub mod contract;
pub mod error;
pub mod ledger;
pub mod msg;
pub mod resolver;
pub mod state;
pub mod token;

pub use crate::error::ContractError;
