use log::{debug, info};

use super::Block;
use super::pow::{is_valid_proof, proof_hash, proof_of_work};

/// Result of a full mining round: the appended block plus the digests the
/// API reports for it.
#[derive(Debug, Clone)]
pub struct MinedBlock {
    pub block: Block,
    pub hash: String,
    pub proof_hash: String,
}

/// In-memory, append-only ledger with a fixed proof-of-work puzzle.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    /// Initialize a new ledger holding only the genesis block.
    pub fn new() -> Self {
        let mut bc = Self { chain: Vec::new() };
        bc.chain.push(Block::genesis());
        bc
    }

    /// Return the last block in the chain.
    pub fn previous_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Append a block with the next index and the current time.
    /// The proof and previous hash are trusted as given.
    pub fn create_block(&mut self, proof: u64, previous_hash: String) -> &Block {
        let index = self.chain.len() as u64 + 1;
        self.chain.push(Block::new(index, proof, previous_hash));
        self.previous_block()
    }

    /// Solve the puzzle against the current tip and append the result.
    pub fn mine(&mut self) -> MinedBlock {
        let previous = self.previous_block();
        let previous_proof = previous.proof;
        let previous_hash = previous.hash();

        let proof = proof_of_work(previous_proof);
        let block = self.create_block(proof, previous_hash).clone();
        let hash = block.hash();

        info!(
            "MINER - sealed block #{} (proof={}, hash={})",
            block.index, block.proof, hash
        );

        MinedBlock {
            block,
            hash,
            proof_hash: proof_hash(previous_proof, proof),
        }
    }

    /// Check linkage and proof of every block after the first.
    /// Empty and single-block chains are trivially valid.
    pub fn is_chain_valid(chain: &[Block]) -> bool {
        for pair in chain.windows(2) {
            let (prev, current) = (&pair[0], &pair[1]);

            if current.previous_hash != prev.hash() {
                debug!("VALIDATE - block #{} previous_hash mismatch", current.index);
                return false;
            }

            if !is_valid_proof(prev.proof, current.proof) {
                debug!("VALIDATE - block #{} proof {} rejected", current.index, current.proof);
                return false;
            }
        }
        true
    }

    /// Validate this ledger's own chain.
    pub fn is_valid(&self) -> bool {
        Self::is_chain_valid(&self.chain)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }
}
