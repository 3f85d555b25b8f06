pub mod block;
pub mod model;
pub mod pow;

pub use block::Block;
pub use model::{Blockchain, MinedBlock};

/// Required hex prefix of a valid proof hash.
pub const DIFFICULTY_PREFIX: &str = "0000";

/// Proof carried by the genesis block (not mined).
pub const GENESIS_PROOF: u64 = 1;

/// Previous-hash placeholder of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";
