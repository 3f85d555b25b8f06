use crate::blockchain::{Block, Blockchain, MinedBlock};
use serde::Serialize;
use std::sync::Mutex;

/// Shared application state: the single ledger instance.
#[derive(Default)]
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
}

impl AppState {
    pub fn new(blockchain: Blockchain) -> Self {
        Self {
            blockchain: Mutex::new(blockchain),
        }
    }
}

pub const MINED_MESSAGE: &str = "Congratulations, you just mined a block!";

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    #[serde(with = "crate::blockchain::block::timestamp_text")]
    pub timestamp: chrono::NaiveDateTime,
    pub proof: u64,
    pub previous_hash: String,
    pub hash: String,
    pub proof_hash: String,
}

impl From<MinedBlock> for MineResponse {
    fn from(mined: MinedBlock) -> Self {
        let MinedBlock {
            block,
            hash,
            proof_hash,
        } = mined;
        Self {
            message: MINED_MESSAGE,
            index: block.index,
            timestamp: block.timestamp,
            proof: block.proof,
            previous_hash: block.previous_hash,
            hash,
            proof_hash,
        }
    }
}

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct ValidResponse {
    pub is_chain_valid: bool,
}
