use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::entropy::EntropySource;


const OUTCOME_TAG: &[u8] = b"wager/outcome/v1";

/// A single stake placed by a player. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    pub player: String,
    pub amount: u128,
}

/// Result of resolving a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub won: bool,
    pub amount: u128,
}

impl PlayOutcome {
    /// Signed change of the contract balance. `None` if the stake does not fit in `i128`.
    pub fn contract_delta(&self) -> Option<i128> {
        let amount = i128::try_from(self.amount).ok()?;
        Some(if self.won { -amount } else { amount })
    }

    /// Signed change of the player balance, always the negation of the contract delta.
    pub fn player_delta(&self) -> Option<i128> {
        self.contract_delta().map(|delta| -delta)
    }
}

/// Decide a play from the request and the seed provided by `entropy`.
///
/// The decision is the low bit of
/// `SHA-256(tag || seed || len(player) || player || amount)`, so identical
/// inputs always give identical outcomes.
pub fn resolve<E: EntropySource + ?Sized>(request: &PlayRequest, entropy: &E) -> PlayOutcome {
    let seed = entropy.seed();
    let player = request.player.as_bytes();
    let digest = Sha256::new()
        .chain_update(OUTCOME_TAG)
        .chain_update(seed.0)
        .chain_update((player.len() as u64).to_be_bytes())
        .chain_update(player)
        .chain_update(request.amount.to_be_bytes())
        .finalize();

    PlayOutcome {
        won: digest[31] & 1 == 1,
        amount: request.amount,
    }
}
