use cosmwasm_std::{Addr, Env, Uint128};
use outcome::{resolve, BlockEntropy, EntropySource, FixedSeed, PlayOutcome, PlayRequest, Seed};

/// Entropy the host exposes for the transaction being executed.
pub fn block_entropy(env: &Env) -> BlockEntropy {
    BlockEntropy {
        chain_id: env.block.chain_id.clone(),
        height: env.block.height,
        time_nanos: env.block.time.nanos(),
        tx_index: env.transaction.as_ref().map(|tx| tx.index),
    }
}

/// Resolve a play and return the seed it was drawn from, so the seed can be
/// published alongside the outcome.
pub fn resolve_play<E: EntropySource + ?Sized>(player: &Addr, amount: Uint128, entropy: &E) -> (PlayOutcome, Seed) {
    let seed = entropy.seed();
    let request = PlayRequest {
        player: player.to_string(),
        amount: amount.u128(),
    };
    (resolve(&request, &FixedSeed(seed)), seed)
}
