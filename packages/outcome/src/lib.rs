mod entropy;
mod resolve;

pub use entropy::{BlockEntropy, EntropySource, FixedSeed, Seed, SeedError};
pub use resolve::{resolve, PlayOutcome, PlayRequest};
