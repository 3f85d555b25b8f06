use log::debug;
use sha2::{Digest, Sha256};

use super::DIFFICULTY_PREFIX;

/// Decimal text of `candidate² - previous²`.
///
/// Both squares fit in a u128, so the difference is rendered from its
/// magnitude with a leading `-` when `candidate < previous`.
pub fn squared_difference(candidate: u64, previous: u64) -> String {
    let c = u128::from(candidate) * u128::from(candidate);
    let p = u128::from(previous) * u128::from(previous);
    if c >= p {
        (c - p).to_string()
    } else {
        format!("-{}", p - c)
    }
}

/// SHA-256 (lowercase hex) of the puzzle input for a proof pair.
pub fn proof_hash(previous_proof: u64, proof: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(squared_difference(proof, previous_proof).as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `proof` solves the puzzle against `previous_proof`.
pub fn is_valid_proof(previous_proof: u64, proof: u64) -> bool {
    proof_hash(previous_proof, proof).starts_with(DIFFICULTY_PREFIX)
}

/// Brute-force search for the smallest proof (starting at 1) whose
/// proof hash meets the difficulty prefix. Blocks until found.
pub fn proof_of_work(previous_proof: u64) -> u64 {
    let mut candidate: u64 = 1;
    while !is_valid_proof(previous_proof, candidate) {
        candidate += 1;
    }
    debug!("POW - previous_proof={previous_proof} -> proof={candidate}");
    candidate
}
