use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

const BLOCK_ENTROPY_TAG: &[u8] = b"wager/block-entropy/v1";

/// Transaction index used when the host does not expose one.
const NO_TX_INDEX: u32 = u32::MAX;

/// 32 bytes every play outcome is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub [u8; 32]);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed is not valid hex")]
    InvalidHex,
    #[error("Seed must be 32 bytes, got {0}")]
    InvalidLength(usize),
}

impl Seed {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(encoded: &str) -> Result<Self, SeedError> {
        let bytes = hex::decode(encoded).map_err(|_| SeedError::InvalidHex)?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| SeedError::InvalidLength(b.len()))?;
        Ok(Self(bytes))
    }
}

/// Anything that can hand the resolver a seed.
///
/// Implementations must be deterministic: re-executing a transaction has to
/// produce the same seed, so wall clocks and OS randomness are off limits.
/// A verifiable random function can be plugged in here without touching
/// settlement.
pub trait EntropySource {
    fn seed(&self) -> Seed;
}

/// Entropy visible to every validator while executing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntropy {
    pub chain_id: String,
    pub height: u64,
    pub time_nanos: u64,
    pub tx_index: Option<u32>,
}

impl EntropySource for BlockEntropy {
    fn seed(&self) -> Seed {
        let chain_id = self.chain_id.as_bytes();
        let digest = Sha256::new()
            .chain_update(BLOCK_ENTROPY_TAG)
            .chain_update((chain_id.len() as u64).to_be_bytes())
            .chain_update(chain_id)
            .chain_update(self.height.to_be_bytes())
            .chain_update(self.time_nanos.to_be_bytes())
            .chain_update(self.tx_index.unwrap_or(NO_TX_INDEX).to_be_bytes())
            .finalize();
        Seed(digest.into())
    }
}

/// A seed recorded earlier, e.g. from an emitted event. Used for replays and audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub Seed);

impl EntropySource for FixedSeed {
    fn seed(&self) -> Seed {
        self.0
    }
}
